use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Display is just the key so callers can name the variable in their own
    // context without re-parsing a sentence.
    #[error("{}", .0)]
    MissingVariable(String),

    #[error("{}", .0)]
    FlagParse(#[from] clap::Error),

    #[error("Error expanding path `{}`: {}", .path, .original)]
    Expansion {
        path: String,
        original: shellexpand::LookupError<std::env::VarError>,
    },

    #[error("Error splitting path `{}` into shell fields: {}", .path, .original)]
    FieldSplit {
        path: String,
        original: shell_words::ParseError,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn missing_variable(key: &str) -> Self {
        Self::MissingVariable(key.to_string())
    }

    pub fn expansion_error(
        path: String,
        original: shellexpand::LookupError<std::env::VarError>,
    ) -> Self {
        Self::Expansion { path, original }
    }

    pub fn field_split_error(path: String, original: shell_words::ParseError) -> Self {
        Self::FieldSplit { path, original }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
