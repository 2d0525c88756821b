use std::sync::Arc;

use shortcut_store::UrlStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<UrlStore>,
}

impl AppState {
    pub fn new(store: Arc<UrlStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &UrlStore {
        &self.store
    }
}
