/*!
 * Configuration handling for projdump
 */

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::error::Result;
use crate::report::summary_path_for;
use crate::writer::TreeMarkers;
use crate::{ensure, error};

/// Which artifacts a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Inventory JSON, its summary, and the tree documentation (default)
    #[default]
    All,
    /// Inventory JSON and summary only
    Inventory,
    /// Tree documentation only
    Tree,
}

impl Mode {
    /// Whether the inventory pipeline runs
    pub fn inventory(self) -> bool {
        matches!(self, Mode::All | Mode::Inventory)
    }

    /// Whether the tree documentation pipeline runs
    pub fn tree(self) -> bool {
        matches!(self, Mode::All | Mode::Tree)
    }
}

/// Command-line arguments for projdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inventory and document a frontend/backend project pair",
    long_about = "Walks a frontend and a backend project, writes a JSON inventory of manifests, components, routes and models with a plain-text summary, and a recursive text dump of both trees with embedded file contents."
)]
pub struct Args {
    /// Frontend project root
    #[clap(env = "PROJDUMP_FRONTEND", required_unless_present = "generate")]
    pub frontend: Option<String>,

    /// Backend project root
    #[clap(env = "PROJDUMP_BACKEND", required_unless_present = "generate")]
    pub backend: Option<String>,

    /// Inventory JSON file; the summary is written next to it as <stem>_summary.txt
    #[clap(long, default_value = "project_analysis.json")]
    pub inventory_file: String,

    /// Tree documentation file
    #[clap(long, default_value = "project_documentation.txt")]
    pub docs_file: String,

    /// Which artifacts to produce
    #[clap(long, value_enum, default_value_t = Mode::default())]
    pub mode: Mode,

    /// Use [D]/[F] instead of emoji markers in the tree documentation
    #[clap(long)]
    pub ascii_markers: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Frontend project root
    pub frontend_root: PathBuf,

    /// Backend project root
    pub backend_root: PathBuf,

    /// Inventory JSON path
    pub inventory_file: PathBuf,

    /// Summary path, derived from the inventory path
    pub summary_file: PathBuf,

    /// Tree documentation path
    pub docs_file: PathBuf,

    /// Artifacts to produce
    pub mode: Mode,

    /// Tree documentation glyphs
    pub markers: TreeMarkers,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let frontend = args
            .frontend
            .ok_or_else(|| error!(Config, "frontend root is required"))?;
        let backend = args
            .backend
            .ok_or_else(|| error!(Config, "backend root is required"))?;
        let inventory_file = PathBuf::from(args.inventory_file);

        Ok(Self {
            frontend_root: PathBuf::from(frontend),
            backend_root: PathBuf::from(backend),
            summary_file: summary_path_for(&inventory_file),
            inventory_file,
            docs_file: PathBuf::from(args.docs_file),
            mode: args.mode,
            markers: if args.ascii_markers {
                TreeMarkers::ascii()
            } else {
                TreeMarkers::default()
            },
        })
    }

    /// Files this configuration writes, in the order they are produced
    pub fn outputs(&self) -> Vec<&Path> {
        let mut outputs = Vec::new();
        if self.mode.inventory() {
            outputs.push(self.inventory_file.as_path());
            outputs.push(self.summary_file.as_path());
        }
        if self.mode.tree() {
            outputs.push(self.docs_file.as_path());
        }
        outputs
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (label, root) in [("Frontend", &self.frontend_root), ("Backend", &self.backend_root)] {
            ensure!(
                root.is_dir(),
                PathNotFound,
                "{} root directory not found: {}",
                label,
                root.display()
            );
        }

        let outputs = self.outputs();
        for (i, path) in outputs.iter().enumerate() {
            // Check if output file directory exists
            if let Some(parent) = path.parent() {
                ensure!(
                    parent.as_os_str().is_empty() || parent.exists(),
                    PathNotFound,
                    "Output directory not found: {}",
                    parent.display()
                );
            }

            ensure!(
                !outputs[..i].contains(path),
                InvalidArgument,
                "Output file used twice: {}",
                path.display()
            );
        }

        Ok(())
    }
}
