/*!
 * projdump - Inventory and document a frontend/backend project pair
 *
 * This library walks two project trees and produces a JSON inventory of
 * manifests, components, routes and models, a plain-text summary of that
 * inventory, and an indented text dump of both trees with file contents.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Config, Mode};
pub use error::{ProjDumpError, Result};
pub use report::{
    render_summary, summary_path_for, write_inventory, write_summary, ReportFormat, Reporter,
    RunReport,
};
pub use scanner::{classify, InventoryScanner};
pub use types::{
    BackendSection, Category, FileEntry, FrontendSection, PackageInfo, ProjectKind, ProjectReport,
};
pub use writer::{TreeMarkers, TreeWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
