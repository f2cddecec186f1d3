//! Order-preserving filters over column name lists.

/// Items of `slice` not named in `exclude`, in their original order.
#[must_use]
pub fn remove_excluded<'a, S: AsRef<str>>(slice: &'a [S], exclude: &[&str]) -> Vec<&'a str> {
    slice
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !exclude.contains(item))
        .collect()
}

/// Items of `slice` named in `include`, in `slice`'s order (not `include`'s).
#[must_use]
pub fn keep_included<'a, S: AsRef<str>>(slice: &'a [S], include: &[&str]) -> Vec<&'a str> {
    slice
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| include.contains(item))
        .collect()
}
