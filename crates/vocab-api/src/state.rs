use vocab_db::Store;

use crate::config::Environment;

/// Shared router state. The store is constructed by the entry point and
/// injected here; nothing else is shared between requests.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub store: Store,
    pub environment: Environment,
}

impl ApiState {
    pub const fn new(store: Store, environment: Environment) -> Self {
        Self { store, environment }
    }
}
