//! Discovery of resource files under the input directories.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks input roots and collects `.json` files.
#[derive(Debug, Clone)]
pub struct ResourceScanner {
    roots: Vec<PathBuf>,
}

impl ResourceScanner {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Every `.json` file below the roots, root by root, in file-name order.
    ///
    /// Roots that are not directories are skipped. Symbolic links are
    /// followed; link cycles are logged and skipped.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for root in &self.roots {
            if !root.is_dir() {
                tracing::debug!("Skipping missing input directory {}", root.display());
                continue;
            }

            let before = files.len();
            for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!("Cannot read entry under {}: {}", root.display(), e);
                        continue;
                    }
                };

                if entry.file_type().is_file() && is_json(entry.path()) {
                    files.push(entry.into_path());
                }
            }

            tracing::debug!(
                "Found {} JSON files under {}",
                files.len() - before,
                root.display()
            );
        }

        files
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
