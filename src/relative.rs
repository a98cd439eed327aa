use std::{borrow::Cow, iter};

use crate::{
    join::{absolute_path_in, join_fragments},
    windows::parse_drive_exact,
    Dialect,
};

/// Literal split on the canonical separator. No run collapsing, no lead
/// detection, no `.`/`..` handling.
pub fn split_components(path: &str, dialect: Dialect) -> Vec<&str> {
    path.split(dialect.separator()).collect()
}

// Normalization keeps a lead verbatim, so `c:/` and `C:\` must be brought to
// one spelling before components are compared. Drive letters compare
// case-insensitively and come out upper-cased.
fn with_canonical_lead(path: &str, dialect: Dialect) -> Cow<'_, str> {
    let Ok((rest, lead)) = dialect.parse_lead(path) else {
        return Cow::Borrowed(path);
    };
    let mut canonical = match parse_drive_exact(lead) {
        Ok((_, drive)) if dialect == Dialect::Windows => {
            format!("{}:", drive.to_ascii_uppercase())
        }
        _ => String::new(),
    };
    canonical.push(dialect.separator());
    canonical.push_str(rest);
    Cow::Owned(canonical)
}

// A trailing separator adds an empty component that is not a directory
// level. The source never keeps it. The target keeps it only when it marks
// the root itself (`/` or `C:\`), so walking up to a root ends in a separator.
fn comparable_components(path: &str, keep_root_marker: bool, dialect: Dialect) -> Vec<&str> {
    let mut components = split_components(path, dialect);
    let min_len = if keep_root_marker { 2 } else { 1 };
    if components.len() > min_len && components.last() == Some(&"") {
        components.pop();
    }
    components
}

pub fn relative_path_in(source: &str, target: &str, cwd: &str, dialect: Dialect) -> String {
    let source = absolute_path_in(source, cwd, dialect);
    let source = with_canonical_lead(&source, dialect);
    let target = absolute_path_in(target, cwd, dialect);
    let target = with_canonical_lead(&target, dialect);
    let source_components = comparable_components(&source, false, dialect);
    let target_components = comparable_components(&target, true, dialect);

    let common = source_components
        .iter()
        .zip(&target_components)
        .take_while(|(s, t)| s == t)
        .count();
    log::trace!(
        "relative path from {source:?} to {target:?}: {common} shared components"
    );

    let up_walk = iter::repeat("..").take(source_components.len() - common);
    let down_walk = target_components[common..].iter().copied();
    join_fragments(up_walk.chain(down_walk), dialect)
}
