use crate::{
    error::{PathError, Result},
    normalize::normalize,
    Dialect,
};

/// Glues fragments with the dialect separator and normalizes. An empty
/// iterator normalizes the empty string, i.e. `"."`.
pub(crate) fn join_fragments<I>(fragments: I, dialect: Dialect) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            joined.push(dialect.separator());
        }
        joined.push_str(fragment.as_ref());
    }
    normalize(&joined, dialect)
}

pub fn join<I>(fragments: I, dialect: Dialect) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut fragments = fragments.into_iter().peekable();
    if fragments.peek().is_none() {
        return Err(PathError::EmptyJoin);
    }
    Ok(join_fragments(fragments, dialect))
}

pub fn absolute_path_in(path: &str, cwd: &str, dialect: Dialect) -> String {
    if dialect.is_absolute(path) {
        normalize(path, dialect)
    } else {
        join_fragments([cwd, path], dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join(["", "tmp"], Dialect::Posix).unwrap(), "/tmp");
        assert_eq!(join(["a/b", "../c"], Dialect::Posix).unwrap(), "a/c");
        assert_eq!(join(["a/", "/b"], Dialect::Posix).unwrap(), "a/b");
        assert_eq!(join(["x/./"], Dialect::Posix).unwrap(), "x/");
        assert_eq!(join(["C:", ""], Dialect::Windows).unwrap(), r"C:\");
        assert_eq!(
            join([r"C:\Users", "me", "..", "you"], Dialect::Windows).unwrap(),
            r"C:\Users\you"
        );
        assert_eq!(join(vec![String::from("a"), String::from("b")], Dialect::Windows).unwrap(), r"a\b");
    }

    #[test]
    fn test_join_without_fragments() {
        let none: [&str; 0] = [];
        assert!(matches!(join(none, Dialect::Posix), Err(PathError::EmptyJoin)));
        assert_eq!(join_fragments(none, Dialect::Posix), ".");
    }

    #[test]
    fn test_absolute_path_in() {
        assert_eq!(absolute_path_in("/etc/./hosts", "/home", Dialect::Posix), "/etc/hosts");
        assert_eq!(absolute_path_in("../lib", "/usr/bin", Dialect::Posix), "/usr/lib");
        assert_eq!(absolute_path_in("", "/srv", Dialect::Posix), "/srv/");
        assert_eq!(
            absolute_path_in(r"C:\Temp\..", r"D:\work", Dialect::Windows),
            r"C:\"
        );
        assert_eq!(
            absolute_path_in(r"src\lib.rs", r"D:\work", Dialect::Windows),
            r"D:\work\src\lib.rs"
        );
        assert_eq!(
            absolute_path_in(r"C:notes", r"D:\work", Dialect::Windows),
            r"D:\work\C:notes"
        );
    }
}
