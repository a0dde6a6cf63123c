/*!
 * Core types and data structures for projdump
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which half of the project pair a tree belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// UI project; contributes components
    Frontend,
    /// Server project; contributes routes and models
    Backend,
}

/// Classification assigned to a file found during the inventory walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `package.json`
    Manifest,
    /// Frontend UI component
    Component,
    /// Backend route handler
    Route,
    /// Backend data model
    Model,
}

/// Package descriptor taken from the last manifest seen in a tree.
///
/// Values are copied from the manifest as-is, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Package name
    pub name: Option<Value>,
    /// Package version
    pub version: Option<Value>,
    /// Runtime dependencies, name to version spec
    pub dependencies: BTreeMap<String, Value>,
    /// Development dependencies, name to version spec
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, Value>,
}

/// The subset of `package.json` projdump cares about
#[derive(Debug, Deserialize)]
pub(crate) struct Manifest {
    name: Option<Value>,
    version: Option<Value>,
    dependencies: Option<BTreeMap<String, Value>>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Option<BTreeMap<String, Value>>,
}

impl From<Manifest> for PackageInfo {
    fn from(manifest: Manifest) -> Self {
        Self {
            name: manifest.name,
            version: manifest.version,
            dependencies: manifest.dependencies.unwrap_or_default(),
            dev_dependencies: manifest.dev_dependencies.unwrap_or_default(),
        }
    }
}

/// A classified source file and its captured text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// Path relative to the project root, OS-native separators
    pub path: String,
    /// File content, or an `Error reading file: ...` message
    pub content: String,
}

/// Always-empty placeholder object kept for output compatibility
pub type Placeholder = BTreeMap<String, Value>;

/// Inventory of the frontend tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrontendSection {
    /// Root the section was built from
    pub path: String,
    /// Package descriptor
    pub package_info: PackageInfo,
    /// Not populated
    pub dependencies: Placeholder,
    /// Not populated
    pub structure: Placeholder,
    /// Files under a `components` directory
    pub components: Vec<FileEntry>,
    /// Not populated
    pub routes: Vec<FileEntry>,
    /// Not populated
    pub services: Vec<FileEntry>,
}

/// Inventory of the backend tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct BackendSection {
    /// Root the section was built from
    pub path: String,
    /// Package descriptor
    pub package_info: PackageInfo,
    /// Not populated
    pub dependencies: Placeholder,
    /// Not populated
    pub structure: Placeholder,
    /// Files under a `routes` directory
    pub routes: Vec<FileEntry>,
    /// Files under a `models` directory
    pub models: Vec<FileEntry>,
    /// Not populated
    pub controllers: Vec<FileEntry>,
    /// Not populated
    pub middleware: Vec<FileEntry>,
}

/// Top-level inventory record written as JSON
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    /// Local generation time
    pub timestamp: String,
    /// Frontend inventory
    pub frontend: FrontendSection,
    /// Backend inventory
    pub backend: BackendSection,
}
