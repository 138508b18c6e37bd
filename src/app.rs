//! Record Editor App
//!
//! Application shell: owns the canonical record and applies the form to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{RecordComposer, RecordForm, RecordPreview};
use crate::config::AppConfig;
use crate::store::{store_apply_record, ShellState, ShellStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let json_indent = config.json_indent;
    let store = Store::new(ShellState::new(config.initial_record));
    provide_context(store);

    // Composer currently on screen, replaced on every apply
    let composer = StoredValue::new_local(None::<RecordComposer>);

    let editor = move || {
        let instance = RecordComposer::new(store.record().get());
        composer.set_value(Some(instance.clone()));
        view! { <RecordForm composer=instance /> }
    };

    let apply = move |_| {
        let Some(next) = composer.with_value(|c| c.as_ref().map(RecordComposer::value)) else {
            return;
        };
        log::info!(
            "apply revision {}: {} list rows, include_list={}",
            store.revision().get_untracked() + 1,
            next.some_list.len(),
            next.include_list
        );
        store_apply_record(&store, next);
    };

    view! {
        <div class="container">
            <h1>"Record Editor"</h1>

            {editor}

            <button class="apply-btn" on:click=apply>"Apply"</button>

            <RecordPreview indent=json_indent />
        </div>
    }
}
