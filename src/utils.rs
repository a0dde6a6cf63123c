/*!
 * Utility functions for projdump
 */

use std::path::{Component, Path};

use chrono::Local;

/// Directory names never descended into by the inventory walk
pub const INVENTORY_PRUNE: &[&str] = &["node_modules", ".git", "build"];

/// Names excluded from the frontend tree documentation
pub const FRONTEND_TREE_EXCLUDE: &[&str] = &["node_modules", "build", ".git"];

/// Names excluded from the backend tree documentation. `build` stays visible here.
pub const BACKEND_TREE_EXCLUDE: &[&str] = &["node_modules", ".git"];

/// Suffixes whose content is embedded in the tree documentation
pub const DOCUMENTED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".json", ".css", ".html", ".env", ".md",
];

/// Suffixes recognized as frontend components
pub const COMPONENT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".tsx"];

/// Suffixes recognized as backend routes and models
pub const BACKEND_EXTENSIONS: &[&str] = &[".js"];

/// Package manifest file name
pub const MANIFEST_NAME: &str = "package.json";

/// Whether `name` ends with one of `suffixes` (case-sensitive)
pub fn has_extension(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix))
}

/// Whether one of the directory segments of `path` is exactly `segment`.
///
/// The final component is treated as the file name and never matches.
pub fn has_dir_segment(path: &Path, segment: &str) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };

    parent
        .components()
        .any(|c| matches!(c, Component::Normal(s) if s == segment))
}

/// Local generation timestamp, e.g. `2024-05-01 13:45:12.004211`
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
