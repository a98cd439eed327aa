use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum PathError {
    #[error("join needs at least one path fragment")]
    EmptyJoin,
    #[error("UnknownDialectError {{ name = {name} }}")]
    UnknownDialect { name: String },
    #[error("failed to query the current directory: {0}")]
    CurrentDir(#[from] io::Error),
    #[error("current directory is not valid UTF-8: {}", path.display())]
    NonUtf8CurrentDir { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, PathError>;
