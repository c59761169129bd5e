use std::sync::Arc;

use image_edit_service::config::{self, ServiceConfig};
use image_edit_service::{routes, ServiceState};
use tracing::info;

#[tokio::main]
async fn main() {
    let mut service_config = ServiceConfig::default();
    if let Err(e) = service_config.init_from_env() {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    }

    config::tracing::init();

    let addr = service_config.server.get_addr();
    let state = Arc::new(ServiceState {
        config: service_config,
    });
    let router = routes::create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("🚀 Server running on {}", addr);
    if let Err(e) = axum::serve(listener, router).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
