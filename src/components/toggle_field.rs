//! Toggle Field Component
//!
//! Checkbox that keeps its own state and also reports every change upward.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ToggleEditor {
    initial: bool,
    checked: RwSignal<bool>,
}

impl ToggleEditor {
    pub fn new(initial: bool) -> Self {
        Self {
            initial,
            checked: RwSignal::new(initial),
        }
    }

    /// Latest checkbox state
    pub fn value(&self) -> bool {
        self.checked.get_untracked()
    }

    pub fn set(&self, checked: bool) {
        self.checked.set(checked);
    }
}

/// Checkbox bound to a [`ToggleEditor`]
///
/// # Arguments
/// * `on_change` - Called synchronously with the new state after the editor is updated
#[component]
pub fn ToggleField(
    editor: ToggleEditor,
    #[prop(into)] label: String,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="field toggle-field">
            <input
                type="checkbox"
                checked=editor.initial
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    editor.set(checked);
                    on_change.run(checked);
                }
            />
            <span class="field-label">{label}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_value_follows_latest_set() {
        Owner::new().with(|| {
            let toggle = ToggleEditor::new(true);
            assert!(toggle.value());
            toggle.set(false);
            assert!(!toggle.value());
            toggle.set(true);
            assert!(toggle.value());
        });
    }
}
