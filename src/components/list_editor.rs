//! List Editor Component
//!
//! Table of editable rows with per-row Edit/Delete and an add row below.

use leptos::html;
use leptos::prelude::*;

use crate::list::{ItemInputs, ItemList, ListItemPatch};
use crate::models::ListItem;

/// Reactive handle over the list rows
#[derive(Clone, Copy)]
pub struct ListEditor {
    items: RwSignal<ItemList>,
}

impl ListEditor {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            items: RwSignal::new(ItemList::new(items)),
        }
    }

    pub fn add(&self, item: ListItem) {
        log::debug!("add row {:?}", item);
        self.items.update(|list| list.add(item));
    }

    pub fn edit(&self, index: usize, patch: ListItemPatch) {
        log::debug!("edit row {}: {:?}", index, patch);
        self.items.update(|list| list.edit(index, patch));
    }

    pub fn delete(&self, index: usize) {
        log::debug!("delete row {}", index);
        self.items.update(|list| list.delete(index));
    }

    /// Current rows, in mutation order
    pub fn value(&self) -> Vec<ListItem> {
        self.items.with_untracked(ItemList::snapshot)
    }
}

/// Handles to the four inputs of one row
#[derive(Clone, Copy)]
struct RowInputs {
    number: NodeRef<html::Input>,
    string: NodeRef<html::Input>,
    boolean: NodeRef<html::Input>,
    optional: NodeRef<html::Input>,
}

impl RowInputs {
    fn new() -> Self {
        Self {
            number: NodeRef::new(),
            string: NodeRef::new(),
            boolean: NodeRef::new(),
            optional: NodeRef::new(),
        }
    }

    /// `None` unless all four inputs are mounted
    fn read(&self) -> Option<ItemInputs> {
        let number = self.number.get_untracked()?;
        let string = self.string.get_untracked()?;
        let boolean = self.boolean.get_untracked()?;
        let optional = self.optional.get_untracked()?;
        Some(ItemInputs {
            number: number.value(),
            string: string.value(),
            boolean: boolean.checked(),
            optional: optional.value(),
        })
    }
}

#[component]
pub fn ListField(editor: ListEditor) -> impl IntoView {
    view! {
        <div class="list-editor">
            <table class="list-table">
                <thead>
                    <tr>
                        <th>"Some Number"</th>
                        <th>"Some String"</th>
                        <th>"Some Boolean"</th>
                        <th>"Some Optional"</th>
                        <th>"Buttons"</th>
                    </tr>
                </thead>
                <tbody>
                    // Rows are keyed by position only
                    {move || editor.items.with(|list| {
                        list.items()
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, item)| view! { <ListRow editor=editor index=index item=item /> })
                            .collect_view()
                    })}
                </tbody>
            </table>
            <AddRow editor=editor />
        </div>
    }
}

#[component]
fn ListRow(editor: ListEditor, index: usize, item: ListItem) -> impl IntoView {
    let inputs = RowInputs::new();
    let number = item.some_number.map(|n| n.to_string()).unwrap_or_default();
    let optional = item.some_optional.unwrap_or_default();

    view! {
        <tr class="list-row">
            <td>
                <input type="number" class="cell-input" value=number node_ref=inputs.number />
            </td>
            <td>
                <input type="text" class="cell-input" value=item.some_string node_ref=inputs.string />
            </td>
            <td class="cell-center">
                <input type="checkbox" checked=item.some_boolean node_ref=inputs.boolean />
            </td>
            <td>
                <input type="text" class="cell-input" value=optional node_ref=inputs.optional />
            </td>
            <td class="row-buttons">
                <button
                    class="edit-btn"
                    on:click=move |_| {
                        if let Some(values) = inputs.read() {
                            editor.edit(index, values.to_patch());
                        }
                    }
                >
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| editor.delete(index)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AddRow(editor: ListEditor) -> impl IntoView {
    let inputs = RowInputs::new();

    let on_add = move |_| {
        if let Some(values) = inputs.read() {
            editor.add(values.to_new_item());
        }
    };

    view! {
        <div class="add-row">
            <input type="number" placeholder="number" node_ref=inputs.number />
            <input type="text" placeholder="string" node_ref=inputs.string />
            <label class="add-row-boolean">
                <input type="checkbox" node_ref=inputs.boolean />
                "Boolean"
            </label>
            <input type="text" placeholder="optional" node_ref=inputs.optional />
            <button class="add-btn" on:click=on_add>"Add"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn make_item(text: &str, number: i64) -> ListItem {
        ListItem {
            some_string: text.to_string(),
            some_number: Some(number),
            some_boolean: false,
            some_optional: None,
        }
    }

    fn strings(editor: &ListEditor) -> Vec<String> {
        editor.value().into_iter().map(|i| i.some_string).collect()
    }

    #[test]
    fn test_add_edit_delete() {
        Owner::new().with(|| {
            let editor = ListEditor::new(vec![make_item("a", 1)]);
            editor.add(make_item("b", 2));
            editor.add(make_item("c", 3));
            assert_eq!(strings(&editor), vec!["a", "b", "c"]);

            editor.edit(1, ListItemPatch { some_string: Some("x".to_string()), ..Default::default() });
            assert_eq!(strings(&editor), vec!["a", "x", "c"]);
            assert_eq!(editor.value()[1].some_number, Some(2));

            editor.delete(0);
            assert_eq!(strings(&editor), vec!["x", "c"]);
            assert_eq!(editor.value()[0].some_number, Some(2));
        });
    }

    #[test]
    fn test_row_edit_stores_sentinel() {
        Owner::new().with(|| {
            let editor = ListEditor::new(vec![make_item("a", 1)]);
            let inputs = ItemInputs {
                number: "abc".to_string(),
                string: "x".to_string(),
                boolean: true,
                optional: String::new(),
            };
            editor.edit(0, inputs.to_patch());

            let rows = editor.value();
            assert_eq!(rows[0].some_string, "x");
            assert_eq!(rows[0].some_number, None);
        });
    }

    #[test]
    fn test_value_is_a_snapshot() {
        Owner::new().with(|| {
            let editor = ListEditor::new(vec![make_item("a", 1)]);
            let before = editor.value();
            editor.delete(0);
            assert_eq!(before.len(), 1);
            assert!(editor.value().is_empty());
        });
    }
}
