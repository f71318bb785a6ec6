//! Symbol name resolution — native names to the keys used by the bindings.

use crate::remap::RemapTable;

/// Type-name prefix stripped when no explicit rule applies.
pub const DEFAULT_STRIP_PREFIX: &str = "ai";

/// Resolves native names against the remap table.
#[derive(Debug, Clone)]
pub struct NameResolver<'a> {
    remap: &'a RemapTable,
    strip_prefix: &'a str,
}

impl<'a> NameResolver<'a> {
    pub fn new(remap: &'a RemapTable, strip_prefix: &'a str) -> Self {
        Self {
            remap,
            strip_prefix,
        }
    }

    /// Structs, unions, enums and typedefs.
    ///
    /// An explicit rule wins. Otherwise `aiScene` → `Scene`, but `ai` and
    /// `aim` stay as they are: the prefix is only stripped before an
    /// uppercase letter.
    pub fn type_name(&self, name: &str) -> String {
        if let Some(mapped) = self.remap.get(name) {
            return mapped.to_string();
        }

        if !self.strip_prefix.is_empty() {
            if let Some(rest) = name.strip_prefix(self.strip_prefix) {
                if rest.chars().next().is_some_and(char::is_uppercase) {
                    return rest.to_string();
                }
            }
        }

        name.to_string()
    }

    /// Enum values: explicit rules only.
    pub fn enum_member_name(&self, name: &str) -> String {
        self.remap.get(name).unwrap_or(name).to_string()
    }

    /// Functions keep their native entry-point name.
    pub fn function_name(&self, name: &str) -> String {
        name.to_string()
    }
}
