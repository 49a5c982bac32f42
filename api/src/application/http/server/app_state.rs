use std::sync::Arc;

use ecocanteen_core::application::EcoCanteenService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: EcoCanteenService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: EcoCanteenService) -> Self {
        Self { args, service }
    }
}
