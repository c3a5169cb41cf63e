use std::sync::Arc;

use storage::{RosterStore, services::organizer::OrganizePolicy};

/// Shared handler state: the injected store and the configured ordering policy.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RosterStore>,
    organize_policy: OrganizePolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn RosterStore>, organize_policy: OrganizePolicy) -> Self {
        Self {
            store,
            organize_policy,
        }
    }

    pub fn store(&self) -> &dyn RosterStore {
        self.store.as_ref()
    }

    pub fn organize_policy(&self) -> OrganizePolicy {
        self.organize_policy
    }
}
