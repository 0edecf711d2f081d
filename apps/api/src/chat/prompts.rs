use crate::llm_client::prompts::SAFETY_INSTRUCTION;

/// Call-to-action appended to every freshly generated answer.
pub const CONSULTATION_CTA: &str = "I'd be happy to discuss this further in a personalized consultation. Would you like to book a session to explore this topic in more depth?";

/// Role preamble for primary-model calls. The user question follows it.
const ROLE_PREAMBLE: &str = "As a helpful AI assistant responding on Jacques Evens Camille's website, \
please provide a knowledgeable and concise response to the following question \
that does not relate directly to Jacques Evens Camille. Maintain a professional \
and courteous tone consistent with Jacques' brand as an Executive Leadership Coach \
and Organizational Development Expert.";

pub fn build_primed_prompt(question: &str) -> String {
    format!("{ROLE_PREAMBLE}\n\n{SAFETY_INSTRUCTION}\n\nUser question: {question}")
}

pub fn with_cta(generated: &str) -> String {
    format!("{generated}\n\n{CONSULTATION_CTA}")
}
