//! POSIX and Windows path strings, manipulated without touching the
//! filesystem.
//!
//! Every operation exists twice: as a method on [`Dialect`], which names the
//! syntax explicitly, and as a free function here, which uses
//! [`Dialect::host`].
//!
//! ```
//! use dialect_path::Dialect;
//!
//! assert_eq!(Dialect::Windows.normalize(r"C:\WINDOWS\SYSTEM32\.."), r"C:\WINDOWS");
//! assert_eq!(
//!     Dialect::Posix.relative_path_in("/home/bob/.local/lib", "/home/bob/.local/include", "/"),
//!     "../include"
//! );
//! ```

pub mod cwd;
mod dialect;
mod error;
mod join;
mod name;
mod normalize;
pub mod posix;
mod relative;
mod token;
#[cfg(feature = "url")]
mod url;
pub mod windows;

#[cfg(feature = "url")]
use ::url::Url;

pub use dialect::Dialect;
pub use error::{PathError, Result};
pub use token::{tokenize, PathToken, TokenStream};

#[cfg(feature = "url")]
pub use crate::url::PathToUrlError;

pub fn is_absolute<P: AsRef<str>>(path: P) -> bool {
    Dialect::host().is_absolute(path)
}

pub fn normalize<P: AsRef<str>>(path: P) -> String {
    Dialect::host().normalize(path)
}

pub fn join<I>(fragments: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Dialect::host().join(fragments)
}

pub fn absolute_path<P: AsRef<str>>(path: P) -> Result<String> {
    Dialect::host().absolute_path(path)
}

pub fn split_components(path: &str) -> Vec<&str> {
    Dialect::host().split_components(path)
}

pub fn relative_path<S: AsRef<str>, T: AsRef<str>>(source: S, target: T) -> Result<String> {
    Dialect::host().relative_path(source, target)
}

pub fn basename(path: &str) -> &str {
    Dialect::host().basename(path)
}

pub fn dirname(path: &str) -> &str {
    Dialect::host().dirname(path)
}

pub fn extension(path: &str) -> Option<&str> {
    Dialect::host().extension(path)
}

#[cfg(feature = "url")]
pub fn to_file_url<P: AsRef<str>>(path: P) -> std::result::Result<Url, PathToUrlError> {
    Dialect::host().to_file_url(path)
}
