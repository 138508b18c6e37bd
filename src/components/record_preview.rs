//! Record Preview Component
//!
//! Read-only JSON view of the last applied record.

use leptos::prelude::*;

use crate::store::{use_shell_store, ShellStateStoreFields};

#[component]
pub fn RecordPreview(indent: usize) -> impl IntoView {
    let store = use_shell_store();

    let rendered = move || match store.record().read().to_pretty_json(indent) {
        Ok(text) => text,
        Err(err) => {
            log::error!("failed to render record: {}", err);
            err.to_string()
        }
    };

    view! {
        <div class="record-preview">
            <p class="revision">{move || format!("Applied {} times", store.revision().get())}</p>
            <pre class="record-json">{rendered}</pre>
        </div>
    }
}
