/// System instruction sent with every fallback question.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant.";
