//! Text Field Component
//!
//! Single-line text input read on demand.

use leptos::html;
use leptos::prelude::*;

use crate::form::resolve_text;

/// Text editor state: the seed value plus a handle to the live input
#[derive(Clone)]
pub struct TextFieldEditor {
    initial: String,
    input: NodeRef<html::Input>,
}

impl TextFieldEditor {
    pub fn new(initial: String) -> Self {
        Self {
            initial,
            input: NodeRef::new(),
        }
    }

    /// Live text, or the seed value if the input is unmounted or empty
    pub fn value(&self) -> String {
        resolve_text(&self.initial, self.input.get_untracked().map(|el| el.value()))
    }
}

#[component]
pub fn TextField(
    editor: TextFieldEditor,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="text"
                class="field-input"
                value=editor.initial.clone()
                node_ref=editor.input
            />
        </label>
    }
}
