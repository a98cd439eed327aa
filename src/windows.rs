use nom::{
    bytes::complete::take_while1,
    character::complete::{self, satisfy},
    combinator::{opt, recognize},
    error::context,
    sequence::pair,
    AsChar, IResult, Parser,
};

pub fn is_windows_sep(c: char) -> bool {
    c == '\\' || c == '/'
}

pub fn parse_drive(path: &str) -> IResult<&str, char> {
    context("drive", satisfy(|c: char| c.is_alpha())).parse(path)
}

pub fn parse_drive_exact(path: &str) -> IResult<&str, char> {
    context("drive_exact", pair(parse_drive, complete::char(':')))
        .parse(path)
        .map(|(path, (drive, _))| (path, drive))
}

/// Matches `[letter ':'] sep+`. A drive designator that is not followed by a
/// separator (`C:foo`) is drive-relative and yields no lead.
pub fn parse_windows_lead(path: &str) -> IResult<&str, &str> {
    context(
        "windows lead",
        recognize(pair(opt(parse_drive_exact), take_while1(is_windows_sep))),
    )
    .parse(path)
}

/// `<letter>:<sep>` at the start. A bare `C:` or a bare leading separator is
/// relative to some current directory and does not count.
pub fn is_windows_absolute(path: &str) -> bool {
    pair(parse_drive_exact, satisfy(is_windows_sep))
        .parse(path)
        .is_ok()
}
