//! Request types for editing tasks.

/// A single edit to a task's content.
///
/// Edits never touch the task status and are not subject to day gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEdit {
    /// Replace the title verbatim
    Title(String),
    /// Replace the description verbatim
    Description(String),
    /// Replace the resource list from newline-delimited raw text
    ResourceUrls(String),
}

impl TaskEdit {
    /// Name of the edited field, as used on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            TaskEdit::Title(_) => "title",
            TaskEdit::Description(_) => "description",
            TaskEdit::ResourceUrls(_) => "resourceUrls",
        }
    }
}

/// Splits newline-delimited text into resource URLs.
///
/// Each line is trimmed and blank lines are dropped; the remaining order is
/// preserved. No URL validation is performed.
///
/// # Examples
///
/// ```rust
/// use learnify_core::models::requests::parse_resource_urls;
///
/// assert_eq!(parse_resource_urls("a\n\nb\n "), vec!["a", "b"]);
/// ```
pub fn parse_resource_urls(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
