use std::env;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug, Default)]
pub struct OpenAIConfig {
    pub openai_key: String,
    pub api_base: String,
}

impl OpenAIConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.openai_key = env::var("OPENAI_API_KEY")
            .map_err(|_| "OPENAI_API_KEY not set in environment".to_string())?;

        self.api_base =
            env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(())
    }
}
