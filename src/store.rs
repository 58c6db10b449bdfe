//! Rendered Application State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only snapshot for views; only the dispatch loop writes to it.

use leptos::prelude::*;
use reactive_stores::Store;
use skill_core::{SkillRow, SkillStore};

/// Snapshot of the skill collection
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Skills with their editor state, in display order
    pub rows: Vec<SkillRow>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy the owned collection into the reactive snapshot
pub fn store_publish(store: &AppStore, skills: &SkillStore) {
    *store.rows().write() = skills.rows().to_vec();
}
