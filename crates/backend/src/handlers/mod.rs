use std::sync::Arc;

use crate::shared::fixtures::FixtureStore;

pub mod doctype;
pub mod routing;

#[derive(Clone)]
pub struct AppState {
    pub fixtures: Arc<FixtureStore>,
}

impl AppState {
    pub fn new(fixtures: FixtureStore) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
        }
    }
}
