use std::env;
use url::Url;

const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n.cinqa.space/webhook/7cfd8f0f-2d73-4ca8-8c1d-99cb4812b46b";

#[derive(Clone, Debug, Default)]
pub struct WebhookConfig {
    pub webhook_url: String,
}

impl WebhookConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.webhook_url =
            env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        Url::parse(&self.webhook_url).map_err(|_| "WEBHOOK_URL is not a valid URL".to_string())?;

        Ok(())
    }
}
