//! Toolkit location and documentation-root resolution.
//!
//! This module resolves where the external toolkit lives on the host: the
//! binary directory is found by scanning the process search path, and the
//! task documentation directory comes from an environment variable or an
//! explicit override.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

/// Substring that identifies the toolkit's entry in the search path
pub const TOOLKIT_PATH_MARKER: &str = "miriad";

/// Environment variable naming the task documentation directory
pub const DOC_ROOT_ENV: &str = "MIRPDOC";

/// File name of the toolkit's help binary
pub const HELP_BINARY: &str = "mirhelp";

/// A located toolkit installation: where its binaries and task
/// documentation files live.
#[derive(Debug, Clone)]
pub struct Toolkit {
    pub bin_dir: PathBuf,
    pub doc_root: PathBuf,
}

impl Toolkit {
    /// Locates the toolkit from the process environment.
    ///
    /// The binary directory is the first `$PATH` entry containing
    /// [`TOOLKIT_PATH_MARKER`]. The documentation root is taken from the
    /// override argument if given (with `~` expanded), otherwise from the
    /// [`DOC_ROOT_ENV`] environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if no search path entry matches the marker, or if
    /// no documentation root is configured.
    pub fn locate(doc_root_arg: &Option<String>) -> Result<Self> {
        let entries = search_path_entries();
        let bin_dir = find_bin_dir(&entries)?;
        let doc_root = get_doc_root(doc_root_arg)?;
        debug!("Toolkit binary directory: `{}`", bin_dir.display());
        debug!("Documentation root: `{}`", doc_root.display());
        Ok(Self { bin_dir, doc_root })
    }

    /// Full path of the toolkit's help binary.
    #[must_use]
    pub fn help_binary(&self) -> PathBuf {
        self.bin_dir.join(HELP_BINARY)
    }
}

/// Splits the process `$PATH` into its entries.
#[must_use]
pub fn search_path_entries() -> Vec<String> {
    match env::var_os("PATH") {
        Some(path) => env::split_paths(&path)
            .map(|entry| entry.to_string_lossy().into_owned())
            .collect(),
        None => Vec::new(),
    }
}

/// Finds the toolkit binary directory among search path entries.
///
/// The first entry whose path string contains [`TOOLKIT_PATH_MARKER`] is
/// taken as the binary directory.
///
/// # Errors
///
/// Returns [`Error::ToolkitNotFound`] carrying the searched entries if no
/// entry matches.
pub fn find_bin_dir(entries: &[String]) -> Result<PathBuf> {
    entries
        .iter()
        .find(|entry| entry.contains(TOOLKIT_PATH_MARKER))
        .map(PathBuf::from)
        .ok_or_else(|| Error::ToolkitNotFound {
            searched: entries.to_vec(),
        })
}

/// Resolves the task documentation directory.
///
/// If an override is provided, uses that path with shell expansions like
/// `~` resolved. Otherwise reads the [`DOC_ROOT_ENV`] environment variable.
///
/// # Errors
///
/// Returns [`Error::DocRootUnset`] if neither an override nor the
/// environment variable is available.
pub fn get_doc_root(doc_root_arg: &Option<String>) -> Result<PathBuf> {
    if let Some(doc_root) = doc_root_arg {
        return Ok(PathBuf::from(shellexpand::tilde(doc_root).to_string()));
    }

    match env::var(DOC_ROOT_ENV) {
        Ok(doc_root) => Ok(PathBuf::from(doc_root)),
        Err(_) => Err(Error::DocRootUnset(DOC_ROOT_ENV.to_string())),
    }
}
