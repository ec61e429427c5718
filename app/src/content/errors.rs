use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    IO {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse `{path}': {error}")]
    Deserialize { error: String, path: PathBuf },

    #[error("Duplicate {kind} `{key}' in the content catalog")]
    Duplicate { kind: &'static str, key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
