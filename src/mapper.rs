//! Name-to-path mapping
//!
//! Turns a template name plus a separator substring into a relative
//! filesystem path and the ordered list of ancestor directories that
//! must exist before the file can be written. This is a pure function
//! of its inputs; no filesystem access happens here.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A planned filesystem location for one exported template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPlan {
    /// Directories below the base that must exist, root-to-leaf
    pub ancestor_dirs: Vec<PathBuf>,
    /// Full path of the file to write, always ending in `.html`
    pub file_path: PathBuf,
}

/// Map a template name onto a filesystem path.
///
/// The name is split on every occurrence of `separator`; each segment
/// becomes one path component under `base_dir`, and the final segment
/// gains an `.html` extension. A name of `a_b_c` with separator `_`
/// maps to `base/a/b/c.html` with ancestors `[base/a, base/a/b]`.
///
/// Names that would produce an empty or unsafe path component are
/// rejected: empty names, leading/trailing/consecutive separators, and
/// segments that are `.` or `..` or contain a platform path separator.
pub fn map_name_to_path(name: &str, separator: &str, base_dir: &Path) -> Result<PathPlan> {
    if separator.is_empty() {
        return Err(Error::config("Separator must not be empty"));
    }

    if name.is_empty() {
        return Err(Error::invalid_template_name(name, "name is empty"));
    }

    let segments: Vec<&str> = name.split(separator).collect();

    for segment in &segments {
        validate_segment(name, segment)?;
    }

    let (leaf, dirs) = match segments.split_last() {
        Some(parts) => parts,
        None => return Err(Error::invalid_template_name(name, "name is empty")),
    };

    let mut current = base_dir.to_path_buf();
    let mut ancestor_dirs = Vec::with_capacity(dirs.len());

    for segment in dirs {
        current.push(segment);
        ancestor_dirs.push(current.clone());
    }

    let file_path = current.join(format!("{leaf}.html"));

    Ok(PathPlan {
        ancestor_dirs,
        file_path,
    })
}

fn validate_segment(name: &str, segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::invalid_template_name(
            name,
            "splitting on the separator produces an empty path component",
        ));
    }

    if segment == "." || segment == ".." {
        return Err(Error::invalid_template_name(
            name,
            format!("path component '{segment}' would escape the target directory"),
        ));
    }

    if segment.contains('/') || segment.contains('\\') {
        return Err(Error::invalid_template_name(
            name,
            format!("path component '{segment}' contains a path separator"),
        ));
    }

    Ok(())
}
