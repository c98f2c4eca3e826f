//! Case-insensitive substring filtering.

/// An option that passed the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
}

/// Keep the labels that contain `query`, ignoring case, in their original order.
///
/// An empty query matches everything.
pub fn substring_filter<S: AsRef<str>>(query: &str, labels: &[S]) -> Vec<FilterMatch> {
    let needle = query.to_lowercase();

    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| needle.is_empty() || label.as_ref().to_lowercase().contains(&needle))
        .map(|(index, _)| FilterMatch { index })
        .collect()
}
