use std::sync::Arc;

use snip_core::LinkStore;
use snip_generator::Generator;

/// Shared handles used by every request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn LinkStore>,
    generator: Arc<dyn Generator>,
}

impl AppState {
    pub fn new(store: Arc<dyn LinkStore>, generator: Arc<dyn Generator>) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &dyn LinkStore {
        self.store.as_ref()
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }
}
