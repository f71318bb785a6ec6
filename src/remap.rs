//! `.rsp` remap rule loader — line-by-line section state machine.
//!
//! Rule files are response files shared with the binding generator. Only the
//! `--remap` section matters here:
//!
//! ```text
//! # comment
//! --remap
//! aiReturn=Result
//! aiScene=Scene
//! --with-attribute
//! ignored=because-not-in-remap
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Exact-match rename table: native symbol name → public-facing name.
#[derive(Debug, Default, Clone)]
pub struct RemapTable {
    rules: HashMap<String, String>,
}

impl RemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rules.insert(from.into(), to.into());
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Add every rule found in `input`. Later rules overwrite earlier ones.
    /// Returns the number of rule lines read.
    pub fn parse_rules(&mut self, input: &str) -> usize {
        let mut in_remap = false;
        let mut count = 0;

        for raw in input.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Any `--option` switches section; only `--remap` opens ours
            if line.starts_with("--") {
                in_remap = line == "--remap";
                continue;
            }

            if !in_remap {
                continue;
            }

            // `old=new`; a leading '=' has no key and is skipped
            if let Some(eq) = line.find('=').filter(|&i| i > 0) {
                let from = line[..eq].trim();
                let to = line[eq + 1..].trim();
                self.insert(from, to);
                count += 1;
            }
        }

        count
    }

    /// Load rules from each file in order. Missing or unreadable files are
    /// reported and skipped.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Self {
        let mut table = Self::new();
        for path in files {
            let path = path.as_ref();
            if !path.is_file() {
                warn!("rsp file not found: {}", path.display());
                continue;
            }
            match fs::read_to_string(path) {
                Ok(content) => {
                    let count = table.parse_rules(&content);
                    info!("loaded {} remap rules from {}", count, path.display());
                }
                Err(e) => warn!("skipping {}: {}", path.display(), e),
            }
        }
        info!("loaded {} remap rules", table.len());
        table
    }
}
