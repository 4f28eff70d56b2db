//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::CourseSummary;

/// Newtype wrapper for displaying the user's course list.
///
/// # Examples
///
/// ```rust
/// use learnify_core::display::CourseSummaries;
///
/// let courses = CourseSummaries(vec![]);
/// assert!(courses.to_string().contains("You haven't created any courses yet."));
/// ```
pub struct CourseSummaries(pub Vec<CourseSummary>);

impl CourseSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of courses in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the courses.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseSummary> {
        self.0.iter()
    }
}

impl IntoIterator for CourseSummaries {
    type Item = CourseSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CourseSummaries {
    type Item = &'a CourseSummary;
    type IntoIter = std::slice::Iter<'a, CourseSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CourseSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "You haven't created any courses yet.")
        } else {
            for course in &self.0 {
                write!(f, "{course}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str, progress: f64) -> CourseSummary {
        CourseSummary {
            id: id.to_string(),
            name: name.to_string(),
            start_date: "2024-03-01".parse().expect("valid date"),
            number_of_days: 7,
            preferred_learning_style: vec!["visual".to_string(), "auditory".to_string()],
            progress,
        }
    }

    #[test]
    fn test_course_summaries_display() {
        let courses = CourseSummaries(vec![
            summary("c1", "Rust", 42.4),
            summary("c2", "Go", 100.0),
        ]);
        let output = courses.to_string();

        assert!(output.contains("## Rust (ID: c1)"));
        assert!(output.contains("## Go (ID: c2)"));
        assert!(output.contains("- **Starts**: 2024-03-01"));
        assert!(output.contains("- **Duration**: 7 Days Course"));
        assert!(output.contains("- **Learning Style**: visual, auditory"));
        assert!(output.contains("- **Progress**: 42%"));
        assert!(output.contains("- **Progress**: 100%"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_course_summaries_empty() {
        let output = CourseSummaries(vec![]).to_string();
        assert_eq!(output, "You haven't created any courses yet.\n");
    }
}
