//! Interactive parameter entry.
//!
//! A blocking, line-oriented prompt loop over a task's parameters, plus the
//! run confirmation prompt. There is no cancellation beyond end-of-input.

use std::io::{stdin, stdout, Write};

use mirtask_core::error::{Error, Result};
use mirtask_core::task::Task;

/// Prompts the user for every parameter value, in declared order.
///
/// The full input view is printed first as a reference. A non-empty
/// response sets that parameter's value; a blank response leaves it
/// untouched. End-of-input ends the loop with the remaining parameters
/// unchanged.
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn fill_parameter_values(task: &mut Task) -> Result<()> {
    println!("Interactive mode");
    println!("Set of all available inputs for this task as reference:");
    print!("{task}");
    println!("Now running through each parameter; blank input leaves a value unchanged.");

    let width = task.longest_parameter_len();
    let names: Vec<String> = task.parameter_names().to_vec();

    for name in names {
        let pad = " ".repeat(width - name.len());
        print!("{name}{pad} =  ");
        stdout().flush().map_err(Error::Stdio)?;

        let mut input = String::new();
        if stdin().read_line(&mut input).map_err(Error::Stdio)? == 0 {
            break;
        }

        let value = input.trim();
        if !value.is_empty() {
            task.set(&name, value);
        }
    }

    Ok(())
}

/// Confirms with the user whether the command should be run.
///
/// An empty response counts as yes. End-of-input counts as no.
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn confirm_command_should_run() -> Result<bool> {
    loop {
        print!("Are you sure you want to run? ([Y]es/[n]o): ");
        stdout().flush().map_err(Error::Stdio)?;

        let mut input = String::new();
        if stdin().read_line(&mut input).map_err(Error::Stdio)? == 0 {
            return Ok(false);
        }

        let lowercase_input = input.trim().to_lowercase();

        if lowercase_input.as_str() == "y" || lowercase_input.is_empty() {
            return Ok(true);
        }

        if lowercase_input.as_str() == "n" {
            return Ok(false);
        }
    }
}
