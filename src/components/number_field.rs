//! Number Field Component

use leptos::html;
use leptos::prelude::*;

use crate::form::resolve_number;

#[derive(Clone, Copy)]
pub struct NumberFieldEditor {
    initial: i64,
    input: NodeRef<html::Input>,
}

impl NumberFieldEditor {
    pub fn new(initial: i64) -> Self {
        Self {
            initial,
            input: NodeRef::new(),
        }
    }

    /// Live number, or the seed value if unmounted, empty, or unparseable
    pub fn value(&self) -> i64 {
        resolve_number(self.initial, self.input.get_untracked().map(|el| el.value()))
    }
}

#[component]
pub fn NumberField(
    editor: NumberFieldEditor,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="number"
                class="field-input"
                value=editor.initial.to_string()
                node_ref=editor.input
            />
        </label>
    }
}
