use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{}` is not in the valid list of tasks", _0)]
    UnknownTask(String),

    #[error(
        "Unable to find the toolkit binary directory. Check that it is in the $PATH env variable correctly: {:?}",
        .searched
    )]
    ToolkitNotFound { searched: Vec<String> },

    #[error("Unable to find or call the toolkit help binary at `{}`: {}", .path, .detail)]
    HelpListing { path: String, detail: String },

    #[error("The documentation directory is not configured. Check that ${} is set.", _0)]
    DocRootUnset(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("More inputs are required before running the command.")]
    NoParametersSet,

    #[error("Parameter `{}` is not in `name=value` format", _0)]
    ParameterFormat(String),

    #[error("`{}` is not a parameter of task `{}`", _0, _1)]
    UnknownParameter(String, String),

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn help_listing(path: String, detail: String) -> Self {
        Self::HelpListing { path, detail }
    }
}
