use crate::{
    token::{tokenize, PathToken},
    Dialect,
};

/// Single-pass `.`/`..` collapsing.
///
/// `depth` counts the real components at the tail of `stack` that a later
/// `..` may still cancel. While `depth > 0` the top of `stack` is a real
/// component, so a `..` can pop without inspecting what it removes.
#[derive(Debug, Default)]
struct Normalizer<'a> {
    lead: Option<&'a str>,
    stack: Vec<&'a str>,
    depth: usize,
}

impl<'a> Normalizer<'a> {
    fn feed(&mut self, token: PathToken<'a>) {
        match token {
            PathToken::Lead(lead) => self.lead = Some(lead),
            PathToken::Component(".") => {}
            PathToken::Component("..") if self.depth == 0 => self.stack.push(".."),
            PathToken::Component("..") => {
                self.depth -= 1;
                self.stack.pop();
            }
            PathToken::Component(component) => {
                self.depth += 1;
                self.stack.push(component);
            }
        }
    }

    fn finish(self, dialect: Dialect) -> String {
        let mut out = self.lead.unwrap_or_default().to_owned();
        out.push_str(&self.stack.join(dialect.separator_str()));
        if out.is_empty() {
            ".".to_owned()
        } else {
            out
        }
    }
}

pub fn normalize(path: &str, dialect: Dialect) -> String {
    let mut normalizer = Normalizer::default();
    for token in tokenize(path, dialect) {
        normalizer.feed(token);
    }
    normalizer.finish(dialect)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalize_posix() {
        let posix = |p: &str| normalize(p, Dialect::Posix);
        assert_eq!(posix(""), ".");
        assert_eq!(posix("."), ".");
        assert_eq!(posix("./"), ".");
        assert_eq!(posix("/"), "/");
        assert_eq!(posix("//"), "/");
        assert_eq!(posix("/tmp/../usr/local/../bin"), "/usr/bin");
        assert_eq!(posix("a/b/../.."), ".");
        assert_eq!(posix("a/b/../../.."), "..");
        assert_eq!(posix("../../a/./b"), "../../a/b");
        assert_eq!(posix("a/./b/"), "a/b/");
        assert_eq!(posix("a/b/.."), "a");
        assert_eq!(posix("/.."), "/..");
    }

    #[test]
    fn test_normalize_windows() {
        let windows = |p: &str| normalize(p, Dialect::Windows);
        assert_eq!(windows(r"C:\WINDOWS\SYSTEM32\.."), r"C:\WINDOWS");
        assert_eq!(
            windows(r"C:\WINDOWS\SYSTEM32\..\SYSTEM32"),
            r"C:\WINDOWS\SYSTEM32"
        );
        assert_eq!(windows("C:/Users/./me/"), r"C:/Users\me\");
        assert_eq!(windows(r"C:foo\..\bar"), "bar");
        assert_eq!(windows(r"C:\"), r"C:\");
        assert_eq!(windows("C:"), "C:");
        assert_eq!(windows(r"\a\b\..\c"), r"\a\c");
        assert_eq!(windows(r"a/b\c"), r"a\b\c");
    }

    fn component() -> impl Strategy<Value = PathToken<'static>> {
        prop_oneof![
            Just(PathToken::Component(".")),
            Just(PathToken::Component("..")),
            Just(PathToken::Component("a")),
            Just(PathToken::Component("b")),
            Just(PathToken::Component("")),
        ]
    }

    proptest! {
        #[test]
        fn cancel_depth_tracks_real_components(
            tokens in prop::collection::vec(component(), 0..32)
        ) {
            let mut normalizer = Normalizer::default();
            for token in tokens {
                if token == PathToken::Component("..") && normalizer.depth > 0 {
                    let top = normalizer.stack.last().copied();
                    prop_assert!(top.is_some_and(|c| c != ".." && c != "."));
                }
                normalizer.feed(token);
                prop_assert!(normalizer.depth <= normalizer.stack.len());
                let unresolved = normalizer.stack.len() - normalizer.depth;
                prop_assert!(normalizer.stack[..unresolved].iter().all(|c| *c == ".."));
                prop_assert!(normalizer.stack[unresolved..].iter().all(|c| *c != ".." && *c != "."));
            }
        }
    }
}
