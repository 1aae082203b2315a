//! Prompt templates for RAG generation

/// Prompt builder for RAG queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the answer prompt the generation engine is tuned against.
    ///
    /// The labeled sections (`Context:`, `Question:`), blank-line separators
    /// and trailing instruction are the contract with the model; callers
    /// must not reorder or relabel them.
    pub fn answer_prompt(context: &str, question: &str) -> String {
        format!(
            r#"Context:
{context}

Question: {question}

Answer clearly and concisely:"#,
            context = context,
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_has_labeled_sections_in_order() {
        let prompt = PromptBuilder::answer_prompt(
            "Kubernetes is a container orchestration system.",
            "What is Kubernetes?",
        );

        let context_pos = prompt.find("Context:").unwrap();
        let question_pos = prompt.find("Question: What is Kubernetes?").unwrap();
        let answer_pos = prompt.find("Answer clearly and concisely:").unwrap();

        assert!(context_pos < question_pos);
        assert!(question_pos < answer_pos);
        assert!(prompt.contains("Kubernetes is a container orchestration system."));
        assert!(prompt.ends_with("Answer clearly and concisely:"));
    }

    #[test]
    fn empty_context_keeps_the_section() {
        let prompt = PromptBuilder::answer_prompt("", "What is Kubernetes?");

        assert!(prompt.starts_with("Context:\n\n"));
        assert!(prompt.contains("Question: What is Kubernetes?"));
    }
}
