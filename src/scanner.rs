/*!
 * Inventory walk: classifies files of a project tree by path and extension
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::ensure;
use crate::error::{ProjDumpError, Result};
use crate::types::{
    BackendSection, Category, FileEntry, FrontendSection, Manifest, PackageInfo, ProjectKind,
    ProjectReport,
};
use crate::utils::{
    has_dir_segment, has_extension, timestamp, BACKEND_EXTENSIONS, COMPONENT_EXTENSIONS,
    INVENTORY_PRUNE, MANIFEST_NAME,
};

/// Classify a file by its name and the directory segments of its full path.
///
/// A file may fall into several categories, or none.
pub fn classify(kind: ProjectKind, path: &Path) -> Vec<Category> {
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let mut categories = Vec::new();

    if file_name == MANIFEST_NAME {
        categories.push(Category::Manifest);
    }

    match kind {
        ProjectKind::Frontend => {
            if has_extension(&file_name, COMPONENT_EXTENSIONS) && has_dir_segment(path, "components")
            {
                categories.push(Category::Component);
            }
        }
        ProjectKind::Backend => {
            if has_extension(&file_name, BACKEND_EXTENSIONS) {
                if has_dir_segment(path, "routes") {
                    categories.push(Category::Route);
                }
                if has_dir_segment(path, "models") {
                    categories.push(Category::Model);
                }
            }
        }
    }

    categories
}

/// Everything collected from one tree before it is shaped into a section
#[derive(Debug, Default)]
struct Collected {
    package_info: PackageInfo,
    components: Vec<FileEntry>,
    routes: Vec<FileEntry>,
    models: Vec<FileEntry>,
}

/// Builds a [`ProjectReport`] from a frontend and a backend tree
pub struct InventoryScanner {
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl InventoryScanner {
    /// Create a new scanner
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self { progress }
    }

    /// Walk both roots and assemble the report
    pub fn build_inventory(&self, frontend_root: &Path, backend_root: &Path) -> Result<ProjectReport> {
        let timestamp = timestamp();

        let frontend = self.scan_project(frontend_root, ProjectKind::Frontend)?;
        let backend = self.scan_project(backend_root, ProjectKind::Backend)?;

        info!(
            components = frontend.components.len(),
            routes = backend.routes.len(),
            models = backend.models.len(),
            "inventory complete"
        );

        Ok(ProjectReport {
            timestamp,
            frontend: FrontendSection {
                path: frontend_root.to_string_lossy().to_string(),
                package_info: frontend.package_info,
                components: frontend.components,
                ..FrontendSection::default()
            },
            backend: BackendSection {
                path: backend_root.to_string_lossy().to_string(),
                package_info: backend.package_info,
                routes: backend.routes,
                models: backend.models,
                ..BackendSection::default()
            },
        })
    }

    /// Walk a single project root
    fn scan_project(&self, root: &Path, kind: ProjectKind) -> Result<Collected> {
        ensure!(
            root.is_dir(),
            PathNotFound,
            "{:?} root is not a directory: {}",
            kind,
            root.display()
        );

        self.progress.set_prefix(match kind {
            ProjectKind::Frontend => "📦 Frontend",
            ProjectKind::Backend => "📦 Backend",
        });
        info!(root = %root.display(), ?kind, "scanning project");

        let mut collected = Collected::default();
        self.scan_directory(root, &PathBuf::new(), kind, &mut collected)?;
        Ok(collected)
    }

    /// Process the files of `abs_path`, then descend into its subdirectories
    fn scan_directory(
        &self,
        abs_path: &Path,
        rel_path: &Path,
        kind: ProjectKind,
        collected: &mut Collected,
    ) -> Result<()> {
        let entries: Vec<DirEntry> = WalkDir::new(abs_path)
            .max_depth(1)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", abs_path.display(), e);
                    None
                }
            })
            .collect();

        // Split into directories and files, keeping listing order
        let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| {
            e.file_type().is_dir() || (e.path_is_symlink() && e.path().is_dir())
        });

        for entry in &files {
            self.process_file(entry.path(), &rel_path.join(entry.file_name()), kind, collected)?;
        }

        // Prune before descending so excluded trees are never read
        for entry in dirs {
            let pruned = entry
                .file_name()
                .to_str()
                .is_some_and(|name| INVENTORY_PRUNE.contains(&name));
            if pruned || entry.path_is_symlink() {
                debug!("Not descending into {}", entry.path().display());
                continue;
            }

            self.scan_directory(entry.path(), &rel_path.join(entry.file_name()), kind, collected)?;
        }

        Ok(())
    }

    /// Classify one file and record whatever it contributes
    fn process_file(
        &self,
        abs_path: &Path,
        rel_path: &Path,
        kind: ProjectKind,
        collected: &mut Collected,
    ) -> Result<()> {
        self.progress.inc(1);

        let file_name = abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.progress
            .set_message(format!("Current file: {}", file_name));

        for category in classify(kind, abs_path) {
            debug!(path = %rel_path.display(), ?category, "classified");

            match category {
                Category::Manifest => {
                    collected.package_info = read_manifest(abs_path)?;
                }
                Category::Component => collected.components.push(file_entry(abs_path, rel_path)),
                Category::Route => collected.routes.push(file_entry(abs_path, rel_path)),
                Category::Model => collected.models.push(file_entry(abs_path, rel_path)),
            }
        }

        Ok(())
    }
}

/// Parse a manifest; any failure is fatal for the run
fn read_manifest(path: &Path) -> Result<PackageInfo> {
    let manifest_error = |reason: String| ProjDumpError::Manifest {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| manifest_error(e.to_string()))?;
    let manifest: Manifest =
        serde_json::from_str(&text).map_err(|e| manifest_error(e.to_string()))?;

    debug!("Package info taken from {}", path.display());
    Ok(manifest.into())
}

/// Capture a file's text, recording read failures in place of the content
fn file_entry(abs_path: &Path, rel_path: &Path) -> FileEntry {
    let content = match fs::read_to_string(abs_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", abs_path.display(), e);
            format!("Error reading file: {}", e)
        }
    };

    FileEntry {
        name: abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
        path: rel_path.to_string_lossy().to_string(),
        content,
    }
}
