use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The user aborted an interactive menu. Never shown to the user.
    #[error("Operation was cancelled by the user.")]
    Cancelled,

    #[error("Terminal error: {}", _0)]
    Terminal(#[from] std::io::Error),

    #[error("Could not start `{}`: {}", .command, .original)]
    Spawn {
        command: String,
        original: std::io::Error,
    },

    #[error("The sub process exited with non-success code {}.", describe_exit_code(.0))]
    SubProcessExit(Option<i32>),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid category: name may not be empty")]
    EmptyCategoryName,

    #[error("Invalid command in category `{}`: command text may not be empty", .0)]
    EmptyCommandText(String),

    #[error("Invalid short call: short call may not be empty")]
    EmptyShortCall,

    #[error("Invalid short call `{}`: short call may not contain whitespace", .0)]
    ShortCallWithWhitespace(String),

    #[error("Invalid short call `{}`: it is reserved for a built-in action", .0)]
    ReservedShortCall(String),

    #[error("Found a non-unique short call: `{}`", .0)]
    NonUniqueShortCall(String),

    #[error("No command found with short call `{}`, run [help] to see usage", .0)]
    ShortCallNotFound(String),
}

fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "(signal)".to_string(),
    }
}

impl Error {
    pub fn spawn_error(command: String, original: std::io::Error) -> Self {
        Self::Spawn { command, original }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
