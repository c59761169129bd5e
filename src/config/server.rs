use std::env;

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub addr: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        self.port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|_| "PORT is not a valid u16".to_string())?,
            Err(_) => 3000,
        };

        Ok(())
    }
}
