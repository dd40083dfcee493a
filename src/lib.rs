use std::sync::Arc;

use services::design_validation::DesignValidator;

pub mod client;
pub mod config;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<DesignValidator>,
}
