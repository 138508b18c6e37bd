//! Shell State Store
//!
//! Uses Leptos reactive_stores for the canonical record.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Record;

/// Page-lifetime shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    /// Last applied record
    pub record: Record,
    /// Number of times Apply replaced the record
    pub revision: u32,
}

impl ShellState {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

/// Get the shell store from context
pub fn use_shell_store() -> ShellStore {
    expect_context::<ShellStore>()
}

/// Replace the canonical record wholesale
pub fn store_apply_record(store: &ShellStore, record: Record) {
    *store.record().write() = record;
    *store.revision().write() += 1;
}
