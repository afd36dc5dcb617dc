use log::debug;
use mirtask_core::error::{Error, Result};
use mirtask_core::task::Task;

/// Splits a `name=value` token into name and value.
///
/// The value may itself contain `=` characters; only the first one
/// separates.
///
/// # Errors
///
/// Returns [`Error::ParameterFormat`] if the token has no `=`.
pub fn parse_assignment(token: &str) -> Result<(&str, &str)> {
    token
        .split_once('=')
        .ok_or_else(|| Error::ParameterFormat(token.to_string()))
}

/// Applies command-line `name=value` tokens to the task.
///
/// Tokens are applied in order, so a later token for the same name wins.
///
/// # Errors
///
/// Returns [`Error::ParameterFormat`] for a malformed token, or
/// [`Error::UnknownParameter`] when a name is not one of the task's
/// declared parameters.
pub fn apply_command_line(task: &mut Task, parameters: &[String]) -> Result<()> {
    for token in parameters {
        let (name, value) = parse_assignment(token)?;

        if !task.parameter_names().iter().any(|declared| declared == name) {
            return Err(Error::UnknownParameter(
                name.to_string(),
                task.name().to_string(),
            ));
        }

        debug!("Setting `{name}` from the command line");
        task.set(name, value);
    }

    Ok(())
}
