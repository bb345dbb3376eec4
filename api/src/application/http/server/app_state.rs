use std::sync::Arc;

use menucraft_core::application::MenucraftService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenucraftService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenucraftService) -> Self {
        Self { args, service }
    }
}
