//! List Editing
//!
//! Positional add/edit/delete over the record's list rows.
//!
//! Indices come from the editor's own rendering loop, so no operation checks
//! bounds up front. An index past the end simply matches nothing.

use crate::models::ListItem;
use crate::parse::parse_int;

/// Partial row used by [`ItemList::edit`]
///
/// A `None` field keeps the existing value. `some_number: Some(None)` and
/// `some_optional: Some(None)` overwrite with the sentinel / absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItemPatch {
    pub some_string: Option<String>,
    pub some_number: Option<Option<i64>>,
    pub some_boolean: Option<bool>,
    pub some_optional: Option<Option<String>>,
}

impl ListItem {
    /// Shallow merge: every field present in `patch` replaces ours
    pub fn apply(&mut self, patch: ListItemPatch) {
        if let Some(some_string) = patch.some_string {
            self.some_string = some_string;
        }
        if let Some(some_number) = patch.some_number {
            self.some_number = some_number;
        }
        if let Some(some_boolean) = patch.some_boolean {
            self.some_boolean = some_boolean;
        }
        if let Some(some_optional) = patch.some_optional {
            self.some_optional = some_optional;
        }
    }
}

/// Raw values read from one row of list inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInputs {
    pub number: String,
    pub string: String,
    pub boolean: bool,
    pub optional: String,
}

impl ItemInputs {
    /// Build a new row for Add.
    ///
    /// An unparseable number becomes the sentinel and an empty optional
    /// becomes absent.
    pub fn to_new_item(&self) -> ListItem {
        ListItem {
            some_string: self.string.clone(),
            some_number: self.parsed_number(),
            some_boolean: self.boolean,
            some_optional: (!self.optional.is_empty()).then(|| self.optional.clone()),
        }
    }

    /// Build a patch for Edit.
    ///
    /// Every field is supplied. An unparseable number overwrites the existing
    /// one with the same sentinel Add uses, so both render as `null`; the
    /// JavaScript editor this replaces dropped the key on Edit instead. An
    /// empty optional is kept as `""`.
    pub fn to_patch(&self) -> ListItemPatch {
        ListItemPatch {
            some_string: Some(self.string.clone()),
            some_number: Some(self.parsed_number()),
            some_boolean: Some(self.boolean),
            some_optional: Some(Some(self.optional.clone())),
        }
    }

    fn parsed_number(&self) -> Option<i64> {
        match parse_int(&self.number) {
            Ok(n) => Some(n),
            Err(err) => {
                log::debug!("list number input rejected ({}), storing sentinel", err);
                None
            }
        }
    }
}

/// Ordered list of rows, addressed by position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<ListItem>,
}

impl ItemList {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }

    /// Append to the end
    pub fn add(&mut self, item: ListItem) {
        self.items.push(item);
    }

    /// Merge `patch` into the row at `index`
    pub fn edit(&mut self, index: usize, patch: ListItemPatch) {
        if let Some(item) = self.items.get_mut(index) {
            item.apply(patch);
        }
    }

    /// Remove the row at `index`; later rows shift down by one
    pub fn delete(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Copy of the current rows
    pub fn snapshot(&self) -> Vec<ListItem> {
        self.items.clone()
    }
}
