//! Task documentation file parsing.
//!
//! Each task ships a `<taskname>.doc` text file in the documentation
//! directory. Among other content, it declares the task's parameters: one
//! per line, introduced by the marker `%A ` with the rest of the line being
//! the parameter name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Marker that introduces a parameter declaration in a doc file
const PARAMETER_MARKER: &str = "%A ";

fn get_reader(file_description: &str, path: &Path) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.display().to_string(),
            e,
        )),
    }
}

/// Path of a task's documentation file under the doc root.
#[must_use]
pub fn doc_path(doc_root: &Path, taskname: &str) -> PathBuf {
    doc_root.join(format!("{taskname}.doc"))
}

/// Reads the declared parameter names for a task, in file order.
///
/// Every line beginning with `%A ` contributes the remainder of the line,
/// unmodified, as a parameter name. All other lines are ignored.
///
/// # Errors
///
/// Returns an error if the documentation file is missing or unreadable
/// (the documentation directory or file is misnamed).
pub fn read_parameter_names(doc_root: &Path, taskname: &str) -> Result<Vec<String>> {
    let path = doc_path(doc_root, taskname);
    let reader = BufReader::new(get_reader("task documentation", &path)?);

    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| {
            Error::io_error(
                "task documentation".to_string(),
                path.display().to_string(),
                e,
            )
        })?;

        if let Some(name) = line.strip_prefix(PARAMETER_MARKER) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_doc(dir: &Path, taskname: &str, content: &str) {
        let mut f = File::create(doc_path(dir, taskname)).unwrap();
        write!(f, "{content}").unwrap();
    }

    #[test]
    fn test_read_parameter_names_in_file_order() {
        let dir = tempdir().unwrap();
        write_doc(
            dir.path(),
            "invert",
            "%N invert\n\
             Some prose describing the task.\n\
             %A vis\n\
             The input visibility file.\n\
             %A map\n\
             %A imsize\n\
             More prose.\n",
        );

        let names = read_parameter_names(dir.path(), "invert").unwrap();
        assert_eq!(names, vec!["vis", "map", "imsize"]);
    }

    #[test]
    fn test_read_parameter_names_ignores_non_marker_lines() {
        let dir = tempdir().unwrap();
        write_doc(
            dir.path(),
            "clean",
            "No markers here.\n%B not-a-parameter\n%Amissing-space\n",
        );

        let names = read_parameter_names(dir.path(), "clean").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_read_parameter_names_takes_rest_of_line_verbatim() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "maths", "%A exp,mask\n");

        let names = read_parameter_names(dir.path(), "maths").unwrap();
        assert_eq!(names, vec!["exp,mask"]);
    }

    #[test]
    fn test_read_parameter_names_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_parameter_names(dir.path(), "nonexistent");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_doc_path_layout() {
        let path = doc_path(Path::new("/opt/miriad/doc"), "uvcat");
        assert_eq!(path, PathBuf::from("/opt/miriad/doc/uvcat.doc"));
    }
}
