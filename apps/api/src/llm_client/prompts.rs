// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Safety line appended to every role-primed prompt.
pub const SAFETY_INSTRUCTION: &str =
    "Do not provide information that could be harmful, illegal, or unethical.";
