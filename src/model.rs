//! Data model for scraped documentation — format-agnostic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Documentation for a single API symbol.
///
/// Field order is part of the MessagePack wire format: records are encoded
/// as positional arrays, so consumers index them as
/// `[HelpLink, Description, Remarks, Parameters, Fields, ReturnValue]`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiDetails {
    pub help_link: Option<String>,
    /// Brief description
    pub description: Option<String>,
    /// Detailed description
    pub remarks: Option<String>,
    /// Function parameters by name
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    /// Struct fields or enum values by name
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    pub return_value: Option<String>,
}

impl ApiDetails {
    /// Overwrite the description unless `text` is blank.
    pub fn set_description(&mut self, text: String) {
        if !text.trim().is_empty() {
            self.description = Some(text);
        }
    }

    /// Overwrite the remarks unless `text` is blank.
    pub fn set_remarks(&mut self, text: String) {
        if !text.trim().is_empty() {
            self.remarks = Some(text);
        }
    }

    /// Record a field description. Blank text is dropped; an existing entry
    /// with the same name is replaced.
    pub fn set_field(&mut self, name: &str, text: String) {
        if !text.trim().is_empty() {
            self.fields.insert(name.to_string(), text);
        }
    }

    pub fn set_parameter(&mut self, name: &str, text: String) {
        if !name.is_empty() && !text.trim().is_empty() {
            self.parameters.insert(name.to_string(), text);
        }
    }

    pub fn set_return_value(&mut self, text: String) {
        if !text.trim().is_empty() {
            self.return_value = Some(text);
        }
    }
}

/// The result table: one [`ApiDetails`] per resolved symbol name, sorted by
/// name so serialization is deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiTable {
    entries: BTreeMap<String, ApiDetails>,
}

impl ApiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record for `name`, inserting an empty one on first use.
    pub fn get_or_create(&mut self, name: &str) -> &mut ApiDetails {
        self.entries.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&ApiDetails> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ApiDetails)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}
