//! The task invocation context.
//!
//! A [`Task`] ties together one valid task name, the parameter names its
//! documentation file declares, and the values the caller has set so far.
//! It builds the `name=value` argument list and runs the task binary.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::catalog::TaskCatalog;
use crate::config::Toolkit;
use crate::doc_file;
use crate::error::{Error, Result};
use crate::execution::{self, CommandOutcome, ExecutionResult};

/// Width of the `Task:` label, for aligning the header with parameter rows
const TASK_LABEL_WIDTH: usize = 5;

/// One invocation context for a named external tool.
///
/// Parameter names are fixed at construction; values are set, unset and
/// cleared freely by the owning caller. Nothing is shared between `Task`
/// instances except the catalog they were checked against.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    parameter_names: Vec<String>,
    values: HashMap<String, String>,
    longest_name: usize,
    executed: bool,
    last_result: Option<ExecutionResult>,
}

impl Task {
    /// Creates a task, validating the name and loading its parameters.
    ///
    /// The name must be a member of the catalog. On success the task's
    /// documentation file is read for its declared parameter names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTask`] if the name is not in the catalog,
    /// or an I/O error if the documentation file is missing or unreadable.
    pub fn new(name: &str, catalog: &TaskCatalog, doc_root: &Path) -> Result<Self> {
        if !catalog.contains(name) {
            return Err(Error::UnknownTask(name.to_string()));
        }

        let parameter_names = doc_file::read_parameter_names(doc_root, name)?;
        let longest_name = parameter_names.iter().map(String::len).max().unwrap_or(0);

        Ok(Self {
            name: name.to_string(),
            parameter_names,
            values: HashMap::new(),
            longest_name,
            executed: false,
            last_result: None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter names, in documentation file order.
    #[must_use]
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// Length of the longest parameter name, for aligned display.
    #[must_use]
    pub fn longest_parameter_len(&self) -> usize {
        self.longest_name
    }

    /// Stores a value for a parameter.
    ///
    /// Every legal parameter name is stored under its literal key,
    /// including `in`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// The stored value, or the empty string when unset. Never fails.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Whether a value has been explicitly set for this parameter.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Removes a previously set value; no-op when absent.
    pub fn unset(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Removes all set values for this task's declared parameters.
    pub fn clear(&mut self) {
        for name in &self.parameter_names {
            self.values.remove(name);
        }
    }

    /// Builds the `name=value` argument tokens for the currently set
    /// parameters, in declared parameter order. Unset parameters are
    /// omitted entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParametersSet`] when no parameter has a value.
    /// The task remains usable; callers render the input view and carry on.
    pub fn build_parameter_args(&self) -> Result<Vec<String>> {
        let args: Vec<String> = self
            .parameter_names
            .iter()
            .filter(|name| self.is_set(name))
            .map(|name| format!("{name}={}", self.get(name)))
            .collect();

        if args.is_empty() {
            return Err(Error::NoParametersSet);
        }

        Ok(args)
    }

    /// The full command list: the task name followed by its argument
    /// tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParametersSet`] when no parameter has a value.
    pub fn build_command(&self) -> Result<Vec<String>> {
        let mut command = vec![self.name.clone()];
        command.extend(self.build_parameter_args()?);
        Ok(command)
    }

    /// Builds the command and runs the task binary, capturing its output.
    ///
    /// Marks the task as executed and stores the result, which stays
    /// available through [`Task::last_result`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParametersSet`] when nothing is set, or a
    /// subprocess error if the task binary cannot be spawned. A task that
    /// runs but writes to stderr is reported through the result's error
    /// flag, not as an `Err`.
    pub fn run(&mut self) -> Result<ExecutionResult> {
        let args = self.build_parameter_args()?;
        let result = execution::run_task(&self.name, &args)?;
        self.executed = true;
        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Runs the toolkit's help for this task as a one-off subprocess.
    ///
    /// Does not touch parameter values or the executed flag.
    ///
    /// # Errors
    ///
    /// Returns a subprocess error if the help binary cannot be spawned.
    pub fn run_help(&self, toolkit: &Toolkit) -> Result<CommandOutcome> {
        execution::run_generic(&toolkit.help_binary(), [self.name.as_str()])
    }

    /// Whether the external command has been run at least once.
    #[must_use]
    pub fn was_executed(&self) -> bool {
        self.executed
    }

    /// The most recent execution's captured output, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<&ExecutionResult> {
        self.last_result.as_ref()
    }
}

impl Display for Task {
    /// Renders the parameter-input view: the task name, then one
    /// `name = value` row per parameter with the `=` column aligned on the
    /// longest name. Unset parameters show an empty value.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let pad = " ".repeat(self.longest_name.saturating_sub(TASK_LABEL_WIDTH));
        writeln!(formatter, "Task:{pad}{}", self.name)?;

        for name in &self.parameter_names {
            let pad = " ".repeat(self.longest_name - name.len());
            writeln!(formatter, "{name}{pad} =  {}", self.get(name))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::{tempdir, TempDir};

    fn doc_root_with(taskname: &str, parameters: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        let mut f = File::create(dir.path().join(format!("{taskname}.doc"))).unwrap();
        writeln!(f, "%N {taskname}").unwrap();
        for parameter in parameters {
            writeln!(f, "%A {parameter}").unwrap();
            writeln!(f, "Description of {parameter}.").unwrap();
        }
        dir
    }

    fn test_task() -> (Task, TempDir) {
        let catalog = TaskCatalog::from_names(["invert"]);
        let dir = doc_root_with("invert", &["in", "out", "options"]);
        let task = Task::new("invert", &catalog, dir.path()).unwrap();
        (task, dir)
    }

    #[test]
    fn test_new_unknown_task() {
        let catalog = TaskCatalog::from_names(["clean"]);
        let dir = tempdir().unwrap();
        let result = Task::new("invert", &catalog, dir.path());
        assert!(matches!(result, Err(Error::UnknownTask(_))));
    }

    #[test]
    fn test_new_missing_doc_file() {
        let catalog = TaskCatalog::from_names(["invert"]);
        let dir = tempdir().unwrap();
        let result = Task::new("invert", &catalog, dir.path());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_parameter_names_in_declared_order() {
        let (task, _dir) = test_task();
        assert_eq!(task.parameter_names(), ["in", "out", "options"]);
        assert_eq!(task.longest_parameter_len(), 7);
    }

    #[test]
    fn test_set_get_round_trip() {
        let (mut task, _dir) = test_task();
        task.set("out", "foo.map");
        assert_eq!(task.get("out"), "foo.map");
        assert!(task.is_set("out"));
    }

    #[test]
    fn test_set_get_round_trip_for_in() {
        // `in` is a legal parameter name and stores under its literal key.
        let (mut task, _dir) = test_task();
        task.set("in", "data.uv");
        assert_eq!(task.get("in"), "data.uv");
        assert!(task.is_set("in"));
        task.unset("in");
        assert!(!task.is_set("in"));
        assert_eq!(task.get("in"), "");
    }

    #[test]
    fn test_get_unset_is_empty_string() {
        let (task, _dir) = test_task();
        assert_eq!(task.get("out"), "");
        assert!(!task.is_set("out"));
    }

    #[test]
    fn test_unset_is_noop_when_absent() {
        let (mut task, _dir) = test_task();
        task.unset("out");
        assert!(!task.is_set("out"));
    }

    #[test]
    fn test_clear_removes_all_declared_values() {
        let (mut task, _dir) = test_task();
        task.set("in", "a");
        task.set("out", "b");
        task.clear();
        assert!(!task.is_set("in"));
        assert!(!task.is_set("out"));
    }

    #[test]
    fn test_build_command_omits_unset_parameters() {
        let (mut task, _dir) = test_task();
        task.set("out", "foo");
        let command = task.build_command().unwrap();
        assert_eq!(command, vec!["invert", "out=foo"]);
    }

    #[test]
    fn test_build_command_declared_order_not_set_order() {
        let (mut task, _dir) = test_task();
        task.set("options", "mfs");
        task.set("in", "data.uv");
        let command = task.build_command().unwrap();
        assert_eq!(command, vec!["invert", "in=data.uv", "options=mfs"]);
    }

    #[test]
    fn test_build_command_with_nothing_set() {
        let (task, _dir) = test_task();
        let result = task.build_command();
        assert!(matches!(result, Err(Error::NoParametersSet)));
    }

    #[test]
    fn test_run_with_nothing_set_leaves_task_usable() {
        let (mut task, _dir) = test_task();
        assert!(matches!(task.run(), Err(Error::NoParametersSet)));
        assert!(!task.was_executed());
        assert!(task.last_result().is_none());

        task.set("out", "foo");
        assert!(task.build_command().is_ok());
    }

    #[test]
    fn test_run_captures_output() {
        // `echo` stands in for a task binary resolved via the search path.
        let catalog = TaskCatalog::from_names(["echo"]);
        let dir = doc_root_with("echo", &["in", "out"]);
        let mut task = Task::new("echo", &catalog, dir.path()).unwrap();
        task.set("in", "data.uv");

        let result = task.run().unwrap();
        assert_eq!(result.stdout, "in=data.uv\n");
        assert!(!result.error);

        assert!(task.was_executed());
        assert!(task.last_result().is_some());
    }

    #[test]
    fn test_display_aligns_value_column() {
        let (mut task, _dir) = test_task();
        task.set("in", "data.uv");
        let view = task.to_string();
        assert_eq!(
            view,
            "Task:  invert\n\
             in      =  data.uv\n\
             out     =  \n\
             options =  \n"
        );
    }
}
