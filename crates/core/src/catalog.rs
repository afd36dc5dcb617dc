//! Task catalog discovery.
//!
//! The toolkit's own help binary knows which tasks are installed; this
//! module runs its `tasks` listing once and parses the output into the
//! process-wide set of valid task names.

use std::process::Command;
use std::sync::OnceLock;

use indexmap::IndexSet;
use log::debug;

use crate::config::Toolkit;
use crate::error::{Error, Result};

static GLOBAL_CATALOG: OnceLock<TaskCatalog> = OnceLock::new();

/// The discovered set of valid task names.
///
/// Immutable after construction. Order is incidental but preserved for
/// display.
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    names: IndexSet<String>,
}

impl TaskCatalog {
    /// Builds a catalog from an explicit list of names.
    ///
    /// This is the injection point for tests and embedders that do not
    /// have a toolkit installation to discover from.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Discovers the catalog by running the toolkit's task listing.
    ///
    /// Invokes `mirhelp tasks` in the toolkit binary directory and parses
    /// its output with [`parse_task_listing`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::HelpListing`] if the help binary cannot be spawned
    /// or exits with a non-zero status. Callers treat this as an
    /// unrecoverable environment misconfiguration.
    pub fn discover(toolkit: &Toolkit) -> Result<Self> {
        let help_binary = toolkit.help_binary();
        let output = Command::new(&help_binary)
            .arg("tasks")
            .output()
            .map_err(|e| {
                Error::help_listing(help_binary.display().to_string(), e.to_string())
            })?;

        if !output.status.success() {
            return Err(Error::help_listing(
                help_binary.display().to_string(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let catalog = Self::from_names(parse_task_listing(&listing));
        debug!("Discovered {} tasks", catalog.len());
        Ok(catalog)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Returns the process-wide catalog, discovering it on first use.
///
/// Discovery runs at most once per process; later calls return the cached
/// catalog without touching the toolkit again.
///
/// # Errors
///
/// Returns the discovery error if the first initialization fails. A failed
/// discovery is not cached, so a later call may retry.
pub fn global(toolkit: &Toolkit) -> Result<&'static TaskCatalog> {
    if let Some(catalog) = GLOBAL_CATALOG.get() {
        return Ok(catalog);
    }

    let discovered = TaskCatalog::discover(toolkit)?;
    Ok(GLOBAL_CATALOG.get_or_init(|| discovered))
}

/// Extracts task names from the help binary's `tasks` listing.
///
/// Task names sit strictly between the second and third blank lines of the
/// listing; everything around them is heading and footer text. The lines in
/// that window are whitespace-separated columns of names.
///
/// A listing with fewer than three blank lines yields an empty catalog.
#[must_use]
pub fn parse_task_listing(listing: &str) -> Vec<String> {
    let lines: Vec<&str> = listing.lines().collect();
    let blank_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| line.is_empty().then_some(index))
        .collect();

    let (Some(&start), Some(&end)) = (blank_indices.get(1), blank_indices.get(2)) else {
        return Vec::new();
    };

    lines[start..end]
        .iter()
        .flat_map(|line| line.split_whitespace())
        .map(ToString::to_string)
        .collect()
}
