//! Mirtask Core Library
//!
//! This crate provides the core functionality for mirtask, a thin wrapper
//! around the MIRIAD radio-astronomy toolkit that discovers the installed
//! tasks, introspects their declared parameters from the toolkit's `.doc`
//! files, and runs them as subprocesses with `name=value` arguments.
//!
//! # Key Features
//!
//! - **Toolkit Location**: Find the toolkit binary directory on `$PATH` and
//!   the documentation root from the environment
//! - **Task Catalog**: Discover the set of valid task names from the
//!   toolkit's own help listing
//! - **Parameter Discovery**: Parse a task's declared parameters from its
//!   documentation file
//! - **Command Construction**: Build `name=value` argument lists from the
//!   parameter values a caller has set
//! - **Execution**: Run tasks as blocking subprocesses with captured output
//! - **Error Handling**: Typed errors for all failure modes, so the
//!   embedding application decides what is fatal
//!
//! # Examples
//!
//! Running a task against a discovered toolkit:
//!
//! ```no_run
//! use mirtask_core::catalog::TaskCatalog;
//! use mirtask_core::config::Toolkit;
//! use mirtask_core::task::Task;
//!
//! let toolkit = Toolkit::locate(&None)?;
//! let catalog = TaskCatalog::discover(&toolkit)?;
//!
//! let mut task = Task::new("invert", &catalog, &toolkit.doc_root)?;
//! task.set("map", "output.map");
//! let result = task.run()?;
//! println!("{}", result.stdout);
//! # Ok::<(), mirtask_core::error::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod doc_file;
pub mod error;
pub mod execution;
pub mod task;
