use crate::Dialect;

fn last_separator(path: &str, dialect: Dialect) -> Option<usize> {
    path.rfind(|c: char| dialect.is_separator(c))
}

pub fn basename(path: &str, dialect: Dialect) -> &str {
    match last_separator(path, dialect) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Everything up to and including the last separator.
pub fn dirname(path: &str, dialect: Dialect) -> &str {
    match last_separator(path, dialect) {
        Some(i) => &path[..=i],
        None => match dialect {
            Dialect::Posix => "./",
            Dialect::Windows => r".\",
        },
    }
}

/// The suffix from the last `.` of the file name, dot included. Dot-files
/// such as `.bashrc` and names ending in a bare `.` have none.
pub fn extension(path: &str, dialect: Dialect) -> Option<&str> {
    let dot = path.rfind(|c: char| c == '.' || dialect.is_separator(c))?;
    if !path[dot..].starts_with('.') {
        return None;
    }
    let name_start = last_separator(&path[..dot], dialect).map_or(0, |i| i + 1);
    match &path[dot..] {
        _ if dot == name_start => None,
        "." => None,
        ext => Some(ext),
    }
}
