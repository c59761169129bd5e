pub mod config;
pub mod controllers;
pub mod dto;
pub mod routes;
pub mod utils;

use config::ServiceConfig;

#[derive(Clone, Default, Debug)]
pub struct ServiceState {
    pub config: ServiceConfig,
}
