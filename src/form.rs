//! Form Resolution
//!
//! DOM-independent rules for turning live input values into a record.

use crate::models::{ListItem, Record};
use crate::parse::parse_int;

/// Current text of a field, or `initial` if unmounted or empty
pub fn resolve_text(initial: &str, live: Option<String>) -> String {
    match live {
        Some(value) if !value.is_empty() => value,
        _ => initial.to_string(),
    }
}

/// Current number of a field, or `initial` if unmounted or unparseable
pub fn resolve_number(initial: i64, live: Option<String>) -> i64 {
    let Some(value) = live else {
        return initial;
    };
    match parse_int(&value) {
        Ok(n) => n,
        Err(err) => {
            log::debug!("number input rejected ({}), keeping {}", err, initial);
            initial
        }
    }
}

/// Values collected from every editor at confirmation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub some_number: i64,
    pub include_list: bool,
    pub some_list: Vec<ListItem>,
}

impl FormValues {
    /// Build the output record; the list is dropped unless `include_list`
    pub fn into_record(self) -> Record {
        Record {
            title: self.title,
            some_number: self.some_number,
            include_list: self.include_list,
            some_list: if self.include_list { self.some_list } else { Vec::new() },
        }
    }
}
