//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `mirt`
//! binary using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the mirt CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use mirtask_cli::cli_args::Args;
///
/// let args = Args::parse_from(["mirt", "invert", "-p", "vis=source.uv"]);
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Name of the toolkit task to invoke.
    ///
    /// Must be one of the tasks the toolkit's own listing reports.
    #[arg(num_args(1), required_unless_present = "list_tasks")]
    pub task: Option<String>,

    /// Parameter values in the format name=value.
    ///
    /// Multiple parameters can be provided with repeated `-p` flags.
    /// Each name must be one of the task's declared parameters.
    ///
    /// # Examples
    /// ```bash
    /// mirt invert -p vis=source.uv -p map=source.map
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// Prompt for every parameter value before running.
    ///
    /// Blank input leaves a parameter unchanged; values given with `-p`
    /// are shown as the starting state.
    #[arg(long, short = 'i', action)]
    pub interactive: bool,

    /// Print the built command without executing it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Print the task's parameters and current values, then exit.
    #[arg(long, short = 's', action)]
    pub show_inputs: bool,

    /// Show the toolkit's own help text for the task, then exit.
    #[arg(long, short = 'H', action)]
    pub task_help: bool,

    /// List every task in the catalog, then exit.
    #[arg(long, short = 'l', action)]
    pub list_tasks: bool,

    /// Directory containing the task documentation files.
    ///
    /// If not provided, the `MIRPDOC` environment variable is used.
    #[arg(long)]
    pub doc_root: Option<String>,
}
