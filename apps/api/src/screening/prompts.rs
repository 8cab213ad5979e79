//! Fixed prompt text for the screening assistant.
//! Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System role content sent with every completion call.
pub const SYSTEM_PROMPT: &str = "You are a hiring assistant helping screen technical candidates.";

/// Farewell appended when the candidate ends the chat with an exit keyword.
pub const FAREWELL: &str = "Thank you for using TalentScout. Goodbye!";

/// Inputs that end the chat without a completion call.
pub const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "end"];

/// Warning shown when question generation runs with an empty tech stack.
pub const EMPTY_TECH_STACK_WARNING: &str = "Please enter your tech stack before proceeding.";

/// Builds the question-generation prompt. The tech stack is inserted
/// verbatim, exactly as the candidate typed it.
pub fn question_prompt(tech_stack: &str) -> String {
    format!(
        "Generate 3-5 technical interview questions for a candidate proficient in {tech_stack}."
    )
}

/// True when the lowercase-normalized input is exactly an exit keyword.
pub fn is_exit_keyword(input: &str) -> bool {
    let normalized = input.to_lowercase();
    EXIT_KEYWORDS.iter().any(|keyword| *keyword == normalized)
}
