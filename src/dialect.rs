use std::{fmt, str::FromStr};

use nom::IResult;

#[cfg(feature = "url")]
use ::url::Url;

#[cfg(feature = "url")]
use crate::url::{path_to_file_url, PathToUrlError};
use crate::{
    cwd,
    error::{PathError, Result},
    join, name, normalize,
    posix::{is_posix_absolute, is_posix_sep, parse_posix_lead},
    relative,
    windows::{is_windows_absolute, is_windows_sep, parse_windows_lead},
};

/// Which path syntax a string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Posix,
    Windows,
}

impl Dialect {
    /// The dialect of the platform this crate was built for.
    pub fn host() -> Dialect {
        if cfg!(windows) {
            Dialect::Windows
        } else {
            Dialect::Posix
        }
    }

    /// The separator used when the crate writes paths.
    pub fn separator(self) -> char {
        match self {
            Dialect::Posix => '/',
            Dialect::Windows => '\\',
        }
    }

    /// [`separator`](Self::separator) as a string slice.
    pub fn separator_str(self) -> &'static str {
        match self {
            Dialect::Posix => "/",
            Dialect::Windows => r"\",
        }
    }

    /// Separator between entries of a `PATH`-style list.
    pub fn delimiter(self) -> char {
        match self {
            Dialect::Posix => ':',
            Dialect::Windows => ';',
        }
    }

    /// Every character accepted as a separator when reading paths.
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Dialect::Posix => is_posix_sep(c),
            Dialect::Windows => is_windows_sep(c),
        }
    }

    pub(crate) fn parse_lead(self, path: &str) -> IResult<&str, &str> {
        match self {
            Dialect::Posix => parse_posix_lead(path),
            Dialect::Windows => parse_windows_lead(path),
        }
    }

    /// POSIX: starts with `/`. Windows: starts with `<letter>:<sep>`; a bare
    /// `C:` or a bare leading separator is not absolute.
    pub fn is_absolute<P: AsRef<str>>(self, path: P) -> bool {
        self._is_absolute(path.as_ref())
    }

    fn _is_absolute(self, path: &str) -> bool {
        match self {
            Dialect::Posix => is_posix_absolute(path),
            Dialect::Windows => is_windows_absolute(path),
        }
    }

    /// Drops `.` segments and every `..` that has a real component to cancel.
    /// An empty result becomes `"."`.
    pub fn normalize<P: AsRef<str>>(self, path: P) -> String {
        normalize::normalize(path.as_ref(), self)
    }

    /// Joins one or more fragments with [`separator`](Self::separator) and
    /// normalizes the result.
    ///
    /// An empty leading fragment keeps the result rooted, and a trailing empty
    /// fragment keeps a trailing separator:
    ///
    /// ```
    /// use dialect_path::Dialect;
    ///
    /// assert_eq!(Dialect::Posix.join(["", "tmp"]).unwrap(), "/tmp");
    /// assert_eq!(Dialect::Windows.join(["C:", ""]).unwrap(), r"C:\");
    /// ```
    ///
    /// # Errors
    ///
    /// [`PathError::EmptyJoin`] if `fragments` yields nothing.
    pub fn join<I>(self, fragments: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        join::join(fragments, self)
    }

    /// Resolves `path` against [`cwd::current_dir`] unless it is already
    /// absolute. The working directory is only queried for relative paths.
    pub fn absolute_path<P: AsRef<str>>(self, path: P) -> Result<String> {
        self._absolute_path(path.as_ref())
    }

    fn _absolute_path(self, path: &str) -> Result<String> {
        if self.is_absolute(path) {
            return Ok(self.normalize(path));
        }
        Ok(join::absolute_path_in(path, &cwd::current_dir()?, self))
    }

    /// Like [`absolute_path`](Self::absolute_path) with an explicit working
    /// directory.
    pub fn absolute_path_in<P: AsRef<str>, C: AsRef<str>>(self, path: P, cwd: C) -> String {
        join::absolute_path_in(path.as_ref(), cwd.as_ref(), self)
    }

    /// Splits on [`separator`](Self::separator) only, without collapsing
    /// anything. `/tmp` gives `["", "tmp"]`.
    pub fn split_components(self, path: &str) -> Vec<&str> {
        relative::split_components(path, self)
    }

    /// The `..`-prefixed walk from `source` to `target`.
    ///
    /// Both sides are made absolute first. A trailing separator after a
    /// non-root component does not change the result.
    pub fn relative_path<S: AsRef<str>, T: AsRef<str>>(self, source: S, target: T) -> Result<String> {
        let (source, target) = (source.as_ref(), target.as_ref());
        if self.is_absolute(source) && self.is_absolute(target) {
            // Neither side reads the working directory.
            return Ok(relative::relative_path_in(source, target, "", self));
        }
        Ok(relative::relative_path_in(source, target, &cwd::current_dir()?, self))
    }

    /// Like [`relative_path`](Self::relative_path) with an explicit working
    /// directory.
    pub fn relative_path_in<S, T, C>(self, source: S, target: T, cwd: C) -> String
    where
        S: AsRef<str>,
        T: AsRef<str>,
        C: AsRef<str>,
    {
        relative::relative_path_in(source.as_ref(), target.as_ref(), cwd.as_ref(), self)
    }

    /// The text after the last separator.
    pub fn basename(self, path: &str) -> &str {
        name::basename(path, self)
    }

    /// The text up to and including the last separator, or `./` (`.\`) when
    /// there is none.
    pub fn dirname(self, path: &str) -> &str {
        name::dirname(path, self)
    }

    /// The file name's suffix from its last `.`, dot included.
    pub fn extension(self, path: &str) -> Option<&str> {
        name::extension(path, self)
    }

    /// A `file://` URL for an absolute path.
    #[cfg(feature = "url")]
    pub fn to_file_url<P: AsRef<str>>(self, path: P) -> std::result::Result<Url, PathToUrlError> {
        path_to_file_url(path.as_ref(), self)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::host()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Posix => "posix",
            Dialect::Windows => "windows",
        })
    }
}

impl FromStr for Dialect {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Dialect::Posix),
            "windows" | "win32" | "win" => Ok(Dialect::Windows),
            _ => Err(PathError::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}
