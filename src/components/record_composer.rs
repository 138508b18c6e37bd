//! Record Composer Component
//!
//! Combines the field editors and the list editor into one record form.

use leptos::prelude::*;

use crate::components::list_editor::{ListEditor, ListField};
use crate::components::number_field::{NumberField, NumberFieldEditor};
use crate::components::text_field::{TextField, TextFieldEditor};
use crate::components::toggle_field::{ToggleEditor, ToggleField};
use crate::form::FormValues;
use crate::models::Record;

/// One editing session over a record
///
/// Each sub-editor owns its state; [`RecordComposer::value`] pulls from all of
/// them. A new composer starts from scratch, discarding unapplied edits.
#[derive(Clone)]
pub struct RecordComposer {
    title: TextFieldEditor,
    number: NumberFieldEditor,
    include_list: ToggleEditor,
    list: ListEditor,
    /// Last value pushed by the toggle
    list_visible: RwSignal<bool>,
}

impl RecordComposer {
    pub fn new(record: Record) -> Self {
        Self {
            title: TextFieldEditor::new(record.title),
            number: NumberFieldEditor::new(record.some_number),
            include_list: ToggleEditor::new(record.include_list),
            list: ListEditor::new(record.some_list),
            list_visible: RwSignal::new(record.include_list),
        }
    }

    /// Record built from the editors' current values
    pub fn value(&self) -> Record {
        FormValues {
            title: self.title.value(),
            some_number: self.number.value(),
            include_list: self.include_list.value(),
            some_list: self.list.value(),
        }
        .into_record()
    }
}

#[component]
pub fn RecordForm(composer: RecordComposer) -> impl IntoView {
    let list = composer.list;
    let list_visible = composer.list_visible;

    view! {
        <div class="record-form">
            <TextField editor=composer.title label="title" />
            <NumberField editor=composer.number label="Some number" />
            <ToggleField
                editor=composer.include_list
                label="Include List"
                on_change=move |checked: bool| list_visible.set(checked)
            />
            // Hiding the table leaves the list editor's rows intact
            <Show when=move || list_visible.get()>
                <ListField editor=list />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::ListItem;
    use leptos::reactive::owner::Owner;

    fn make_item(text: &str) -> ListItem {
        ListItem {
            some_string: text.to_string(),
            some_number: Some(1),
            some_boolean: false,
            some_optional: None,
        }
    }

    #[test]
    fn test_untouched_value_matches_record() {
        Owner::new().with(|| {
            let record = AppConfig::default().initial_record;
            let composer = RecordComposer::new(record.clone());
            assert_eq!(composer.value(), record);
        });
    }

    #[test]
    fn test_untouched_value_drops_excluded_list() {
        Owner::new().with(|| {
            let record = Record {
                title: "t".to_string(),
                some_number: 3,
                include_list: false,
                some_list: vec![make_item("hidden")],
            };
            let composer = RecordComposer::new(record.clone());
            assert_eq!(composer.value(), Record { some_list: vec![], ..record });
            assert_eq!(composer.list.value().len(), 1);
        });
    }

    #[test]
    fn test_live_toggle_gates_list() {
        Owner::new().with(|| {
            let composer = RecordComposer::new(AppConfig::default().initial_record);
            composer.list.add(make_item("added"));

            composer.include_list.set(false);
            let off = composer.value();
            assert!(!off.include_list);
            assert!(off.some_list.is_empty());

            composer.include_list.set(true);
            let on = composer.value();
            assert!(on.include_list);
            let names: Vec<_> = on.some_list.iter().map(|i| i.some_string.as_str()).collect();
            assert_eq!(names, vec!["initialString", "added"]);
        });
    }

    #[test]
    fn test_deleting_every_row_gives_empty_list() {
        Owner::new().with(|| {
            let composer = RecordComposer::new(AppConfig::default().initial_record);
            composer.list.add(make_item("added"));
            composer.list.delete(0);
            composer.list.delete(0);
            let result = composer.value();
            assert!(result.include_list);
            assert!(result.some_list.is_empty());
        });
    }
}
