use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use mirtask_core::catalog::{self, TaskCatalog};
use mirtask_core::config::Toolkit;
use mirtask_core::error::{Error, Result};
use mirtask_core::execution::CommandOutcome;
use mirtask_core::task::Task;

use crate::cli_args::Args;

mod cli_args;
mod interactive;
mod parameters;

/// Task names per row when listing the catalog
const LISTING_COLUMNS: usize = 6;

fn execute() -> Result<()> {
    let args = Args::parse();

    // Environment misconfiguration surfaces here and aborts the whole run:
    // without the toolkit there is nothing this tool can do.
    let toolkit = Toolkit::locate(&args.doc_root)?;
    let catalog = catalog::global(&toolkit)?;

    if args.list_tasks {
        print_task_listing(catalog);
        return Ok(());
    }

    // clap guarantees a task name whenever --list-tasks is absent
    let Some(task_name) = args.task.as_deref() else {
        return Ok(());
    };

    let mut task = Task::new(task_name, catalog, &toolkit.doc_root)?;

    if args.task_help {
        print_outcome(&task.run_help(&toolkit)?);
        return Ok(());
    }

    parameters::apply_command_line(&mut task, &args.parameters)?;

    if args.interactive {
        interactive::fill_parameter_values(&mut task)?;
    }

    if args.show_inputs {
        print!("{task}");
        return Ok(());
    }

    let command = match task.build_command() {
        Ok(command) => command,
        Err(Error::NoParametersSet) => {
            // Not a crash: show the input view so the user can see what is
            // missing, and leave with a clean status.
            warn!("No parameters set for `{}`", task.name());
            println!("Error: More inputs required before running command");
            print!("{task}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if args.dry_run {
        println!("{}", command.iter().join(" "));
        return Ok(());
    }

    if args.interactive && !interactive::confirm_command_should_run()? {
        info!("Command execution cancelled by user");
        return Ok(());
    }

    println!("Running task...");
    let result = task.run()?;

    println!("Stdout response:");
    println!("{}", result.stdout);
    if result.error {
        println!("An error occurred during execution:");
        if let Some(stderr) = &result.stderr {
            println!("{stderr}");
        }
    }

    Ok(())
}

fn print_task_listing(catalog: &TaskCatalog) {
    let width = catalog.names().map(str::len).max().unwrap_or(0);
    for row in &catalog.names().chunks(LISTING_COLUMNS) {
        println!("{}", row.map(|name| format!("{name:<width$}")).join("  "));
    }
}

fn print_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Stdout(stdout) => println!("{stdout}"),
        CommandOutcome::Failed { code, stderr } => {
            if let Some(stderr) = stderr {
                eprintln!("{stderr}");
            }
            match code {
                Some(code) => eprintln!("Help command failed with exit code {code}"),
                None => eprintln!("Help command was terminated by a signal"),
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
