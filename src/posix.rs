use nom::{bytes::complete::tag, error::context, IResult, Parser};

pub fn is_posix_sep(c: char) -> bool {
    c == '/'
}

/// A single `/`. Any further separators belong to the first boundary.
pub fn parse_posix_lead(path: &str) -> IResult<&str, &str> {
    context("posix lead", tag("/")).parse(path)
}

pub fn is_posix_absolute(path: &str) -> bool {
    path.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posix_lead() {
        assert_eq!(parse_posix_lead("/tmp"), Ok(("tmp", "/")));
        assert_eq!(parse_posix_lead("//tmp"), Ok(("/tmp", "/")));
        assert!(parse_posix_lead("tmp").is_err());
        assert!(parse_posix_lead(r"\tmp").is_err());
    }

    #[test]
    fn test_is_posix_absolute() {
        assert!(is_posix_absolute("/"));
        assert!(!is_posix_absolute("."));
        assert!(!is_posix_absolute(""));
        assert!(!is_posix_absolute(r"C:\"));
    }
}
