use std::borrow::Cow;

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::{
    token::{tokenize, PathToken},
    windows::parse_drive,
    Dialect,
};

const URL_FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');
const URL_PATH: &AsciiSet = &URL_FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');
const URL_PATH_SEGMENT: &AsciiSet = &URL_PATH.add(b'/').add(b'%');
// `file` is a special scheme: a literal `\` in a POSIX name would read as a
// separator.
const POSIX_PATH_SEGMENT: &AsciiSet = &URL_PATH_SEGMENT.add(b'\\');

#[derive(thiserror::Error, Debug)]
pub enum PathToUrlError {
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error("PathNotAbsoluteError {{ path = {path} }}")]
    PathNotAbsoluteError { path: Cow<'static, str> },
    #[error("UnresolvedParentError {{ path = {path} }}")]
    UnresolvedParentError { path: Cow<'static, str> },
}

pub(crate) fn path_to_file_url(path: &str, dialect: Dialect) -> Result<Url, PathToUrlError> {
    if !dialect.is_absolute(path) {
        return Err(PathToUrlError::PathNotAbsoluteError {
            path: Cow::Owned(path.to_string()),
        });
    }
    let normalized = dialect.normalize(path);
    let mut serialization = "file://".to_owned();

    if dialect == Dialect::Windows {
        if let Ok((_, drive)) = parse_drive(&normalized) {
            serialization.push('/');
            serialization.push(drive.to_ascii_uppercase());
            serialization.push(':');
        }
    }

    let segment_set = match dialect {
        Dialect::Posix => POSIX_PATH_SEGMENT,
        Dialect::Windows => URL_PATH_SEGMENT,
    };
    let mut empty = true;
    for token in tokenize(&normalized, dialect) {
        let component = match token {
            PathToken::Lead(_) => continue,
            PathToken::Component("..") => {
                return Err(PathToUrlError::UnresolvedParentError {
                    path: Cow::Owned(path.to_string()),
                });
            }
            PathToken::Component(component) => component,
        };
        empty = false;
        serialization.push('/');
        serialization.extend(percent_encode(component.as_bytes(), segment_set));
    }

    // The root, and a windows drive letter, must end with a slash.
    if empty {
        serialization.push('/');
    }

    Ok(Url::parse(&serialization)?)
}
