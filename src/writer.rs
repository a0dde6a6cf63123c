/*!
 * Tree documentation writer for projdump
 */

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ProjDumpError, Result};
use crate::utils::{
    has_extension, timestamp, BACKEND_TREE_EXCLUDE, DOCUMENTED_EXTENSIONS, FRONTEND_TREE_EXCLUDE,
};

const HEADER_RULE: usize = 50;
const FILE_RULE: usize = 40;

/// Glyphs placed in front of directory and file lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeMarkers {
    /// Directory marker
    pub directory: &'static str,
    /// File marker
    pub file: &'static str,
}

impl Default for TreeMarkers {
    fn default() -> Self {
        Self {
            directory: "📁",
            file: "📄",
        }
    }
}

impl TreeMarkers {
    /// Plain markers for terminals and tools that mangle emoji
    pub fn ascii() -> Self {
        Self {
            directory: "[D]",
            file: "[F]",
        }
    }
}

/// Whether a child name is in the exclude set. Non-UTF-8 names never match.
fn is_excluded(name: &OsStr, exclude: &[&str]) -> bool {
    name.to_str().is_some_and(|name| exclude.contains(&name))
}

/// Directories and links to directories
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Writes an indented, content-annotated dump of a directory tree
pub struct TreeWriter {
    markers: TreeMarkers,
}

impl TreeWriter {
    /// Create a new tree writer
    pub fn new(markers: TreeMarkers) -> Self {
        Self { markers }
    }

    /// Document both project roots into `output_file`
    pub fn create_project_documentation(
        &self,
        frontend_root: &Path,
        backend_root: &Path,
        output_file: &Path,
    ) -> Result<()> {
        let file = File::create(output_file).map_err(|source| ProjDumpError::Output {
            path: output_file.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "Project Documentation")?;
        writeln!(writer, "{}", "=".repeat(HEADER_RULE))?;
        writeln!(writer, "Generated on: {}\n", timestamp())?;

        info!(root = %frontend_root.display(), "documenting frontend tree");
        writeln!(writer, "\nFRONTEND STRUCTURE")?;
        writeln!(writer, "{}", "=".repeat(HEADER_RULE))?;
        self.document_tree(frontend_root, &mut writer, FRONTEND_TREE_EXCLUDE, "")?;

        info!(root = %backend_root.display(), "documenting backend tree");
        writeln!(writer, "\n\nBACKEND STRUCTURE")?;
        writeln!(writer, "{}", "=".repeat(HEADER_RULE))?;
        self.document_tree(backend_root, &mut writer, BACKEND_TREE_EXCLUDE, "")?;

        writer.flush()?;
        Ok(())
    }

    /// Recursively document `root`: sorted directories first, then sorted files.
    ///
    /// Listing and read failures are written in-band and never abort the walk;
    /// only failures of `writer` itself are returned.
    pub fn document_tree<W: Write>(
        &self,
        root: &Path,
        writer: &mut W,
        exclude: &[&str],
        indent: &str,
    ) -> io::Result<()> {
        // Sorted byte-wise by name; names are never round-tripped through UTF-8
        let entries = match WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<std::result::Result<Vec<DirEntry>, _>>()
        {
            Ok(entries) => entries,
            Err(e) => {
                let e = io::Error::from(e);
                warn!("Failed to list {}: {}", root.display(), e);
                writeln!(writer, "{}Error reading directory {}: {}", indent, root.display(), e)?;
                return Ok(());
            }
        };

        let (dirs, files): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .filter(|e| !is_excluded(e.file_name(), exclude))
            .partition(is_directory);

        let child_indent = format!("{}  ", indent);
        for entry in &dirs {
            let dir_name = entry.file_name().to_string_lossy();
            writeln!(writer, "\n{}{} {}/", indent, self.markers.directory, dir_name)?;

            // Linked directories are listed but not followed
            if entry.path_is_symlink() {
                debug!("Not following linked directory {}", entry.path().display());
                continue;
            }
            self.document_tree(entry.path(), writer, exclude, &child_indent)?;
        }

        for entry in &files {
            let file_name = entry.file_name().to_string_lossy();
            writeln!(writer, "{}{} {}", indent, self.markers.file, file_name)?;

            if has_extension(&file_name, DOCUMENTED_EXTENSIONS) {
                self.write_content(entry.path(), &file_name, writer, indent)?;
            }
        }

        Ok(())
    }

    /// Embed one file as a fenced block tagged with its extension
    fn write_content<W: Write>(
        &self,
        path: &Path,
        file_name: &str,
        writer: &mut W,
        indent: &str,
    ) -> io::Result<()> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return writeln!(writer, "{}Error reading file: {}", indent, e);
            }
        };

        // Dotfiles such as `.env` have no extension and get an untagged fence
        let language = Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();

        writeln!(writer, "{}{}", indent, "=".repeat(FILE_RULE))?;
        writeln!(writer, "{}File: {}", indent, file_name)?;
        writeln!(writer, "{}Content:", indent)?;
        writeln!(writer, "{}```{}", indent, language)?;
        writer.write_all(content.as_bytes())?;
        writeln!(writer, "\n{}```", indent)?;

        Ok(())
    }
}
