//! Driver: enumerate Doxygen XML files and feed them through the extractors.

use crate::doxygen;
use crate::error::ScrapeError;
use crate::extract::Extractor;
use crate::model::ApiTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Help link attached to every record unless overridden.
pub const DEFAULT_HELP_LINK: &str = "https://assimp-docs.readthedocs.io/en/latest/";

/// Doxygen output files that carry no compound documentation.
const SKIPPED_FILES: &[&str] = &["index.xml", "Doxyfile.xml", "combine.xslt"];

/// Counters for one directory run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
    pub entities: usize,
}

/// List the `*.xml` files of `dir` in sorted order, minus Doxygen's
/// index and configuration files.
pub fn xml_files(dir: &Path) -> Result<Vec<PathBuf>, ScrapeError> {
    let pattern = format!(
        "{}/*.xml",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("skipping {}: {}", e.path().display(), e.error());
                None
            }
        })
        .filter(|p| p.is_file())
        .filter(|p| !is_skipped(p))
        .collect();
    files.sort();
    Ok(files)
}

fn is_skipped(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| SKIPPED_FILES.contains(&name))
}

/// Parse one XML file and merge its entities into `table`.
///
/// The file is parsed in full before extraction starts, so an error leaves
/// `table` untouched.
pub fn scrape_file(
    path: &Path,
    extractor: &Extractor<'_>,
    table: &mut ApiTable,
) -> Result<usize, ScrapeError> {
    let content = fs::read_to_string(path).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = doxygen::parse(&content)?;
    Ok(extractor.extract_document(&root, table))
}

/// Scrape every XML file in `dir`. Per-file failures are logged and skipped.
pub fn scrape_dir(
    dir: &Path,
    extractor: &Extractor<'_>,
    table: &mut ApiTable,
) -> Result<Summary, ScrapeError> {
    let mut summary = Summary::default();

    for path in xml_files(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("processing {}", name);

        match scrape_file(&path, extractor, table) {
            Ok(count) => {
                summary.processed += 1;
                summary.entities += count;
            }
            Err(e) => {
                warn!("failed to process {}: {}", name, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
