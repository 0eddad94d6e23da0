//! Directory inventory for author-facing diagnostics

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What was found in one content directory
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryReport {
    pub exists: bool,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markdown_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reports for the site's content directories, keyed by their path relative to the project root
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub project_root: PathBuf,
    pub directories: IndexMap<String, DirectoryReport>,
}

impl Inventory {
    pub fn scan(project_root: &Path, dirs: &[&Path]) -> Self {
        let directories = dirs
            .iter()
            .map(|dir| {
                let key = dir
                    .strip_prefix(project_root)
                    .unwrap_or(dir)
                    .to_string_lossy()
                    .to_string();
                (key, scan_dir(dir))
            })
            .collect();

        Self {
            project_root: project_root.to_path_buf(),
            directories,
        }
    }

    /// Total markdown files across all scanned directories
    pub fn markdown_count(&self) -> usize {
        self.directories
            .values()
            .map(|d| d.markdown_files.len())
            .sum()
    }
}

fn scan_dir(dir: &Path) -> DirectoryReport {
    let mut report = DirectoryReport {
        exists: dir.is_dir(),
        path: dir.to_path_buf(),
        files: Vec::new(),
        markdown_files: Vec::new(),
        error: None,
    };

    if !report.exists {
        return report;
    }

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let name = entry.file_name().to_string_lossy().to_string();
                if name.ends_with(".md") {
                    report.markdown_files.push(name.clone());
                }
                report.files.push(name);
            }
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", dir, e);
                report.error = Some(e.to_string());
                break;
            }
        }
    }

    report
}
