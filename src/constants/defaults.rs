pub const DEFAULT_QUESTIONS_SOURCE: &str = "questions";
pub const DEFAULT_RANDOM_LIMIT: usize = 80;
pub const DEFAULT_POPUP_SECONDS: u64 = 5;
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;
