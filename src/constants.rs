pub mod deepseek {
    pub const API_BASE: &str = "https://api.deepseek.com/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_VAR: &str = "DEEPSEEK_API_KEY";
    pub const DEFAULT_MAX_TOKENS: u32 = 50;
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
}
