pub mod openai;
pub mod server;
pub mod tracing;
pub mod webhook;

use dotenv::dotenv;

#[derive(Clone, Default, Debug)]
pub struct ServiceConfig {
    pub server: server::ServerConfig,
    pub openai: openai::OpenAIConfig,
    pub webhook: webhook::WebhookConfig,
}

impl ServiceConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        dotenv().ok();
        self.server.init_from_env()?;
        self.openai.init_from_env()?;
        self.webhook.init_from_env()?;
        Ok(())
    }
}
