//! Mirtask CLI Library
//!
//! This crate provides the command-line interface for mirtask, a thin
//! wrapper around the MIRIAD radio-astronomy toolkit. It handles argument
//! parsing, parameter input, interactive prompting and the execution
//! workflow around the core library.
//!
//! # Key Features
//!
//! - **Direct Execution**: Run a task with `-p name=value` parameters
//! - **Interactive Mode**: Prompt for every parameter before running
//! - **Input Display**: Show a task's parameters and current values
//! - **Task Listing**: Print the discovered task catalog
//! - **Per-task Help**: Surface the toolkit's own help text
//!
//! # Examples
//!
//! The CLI binary (`mirt`) can be used in several ways:
//!
//! ```bash
//! # Run a task with parameters
//! mirt invert -p vis=source.uv -p map=source.map
//!
//! # Prompt for every parameter, then confirm and run
//! mirt invert --interactive
//!
//! # Show the task's parameters and current values
//! mirt invert --show-inputs
//!
//! # Show the toolkit's help for a task
//! mirt invert --task-help
//!
//! # List every installed task
//! mirt --list-tasks
//!
//! # Print the command that would run, without running it
//! mirt invert -p vis=source.uv --dry-run
//! ```

pub mod cli_args;
pub mod interactive;
pub mod parameters;
