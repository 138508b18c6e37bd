//! App Configuration
//!
//! Startup values. There are no runtime sources; everything is hardcoded.

use log::LevelFilter;

use crate::models::{ListItem, Record};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Record shown when the page loads
    pub initial_record: Record,
    /// Spaces per level in the JSON display
    pub json_indent: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_record: Record {
                title: "initialTitle".to_string(),
                some_number: 0,
                include_list: true,
                some_list: vec![ListItem {
                    some_string: "initialString".to_string(),
                    some_number: Some(0),
                    some_boolean: false,
                    some_optional: None,
                }],
            },
            json_indent: 4,
            log_level: LevelFilter::Debug,
        }
    }
}
