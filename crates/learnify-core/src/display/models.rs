//! Display implementations for domain models.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Status icons for task completion
//! - 1-based day and task positions, matching what the CLI accepts

use std::fmt;

use crate::models::{CoursePlan, CourseSummary, Progress, Task, TaskStatus, UserProfile};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tasks ({}%)",
            self.completed_tasks,
            self.total_tasks,
            self.percent()
        )
    }
}

impl fmt::Display for CoursePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- Course ID: {}", self.id)?;
        writeln!(f, "- Start Date: {}", self.start_date)?;
        writeln!(f, "- Duration: {} Days Course", self.number_of_days)?;
        writeln!(
            f,
            "- Learning Style: {}",
            self.preferred_learning_style.join(", ")
        )?;
        writeln!(f, "- Progress: {}", Progress::from(self))?;

        if self.study_plan.is_empty() {
            writeln!(f, "\nNo days in this plan.")?;
            return Ok(());
        }

        for (day_index, day) in self.study_plan.iter().enumerate() {
            writeln!(f, "\n## {}. {}", day_index + 1, day.day)?;
            writeln!(f)?;
            if day.tasks.is_empty() {
                writeln!(f, "No tasks for this day.")?;
            }
            for (task_index, task) in day.tasks.iter().enumerate() {
                task.fmt_task(f, Some(task_index + 1))?;
            }
        }

        Ok(())
    }
}

impl Task {
    /// Format the task, optionally prefixed with its position in the day.
    fn fmt_task(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        match position {
            Some(position) => writeln!(
                f,
                "### {position}. {} ({})",
                self.title,
                self.status.with_icon()
            )?,
            None => writeln!(f, "### {} ({})", self.title, self.status.with_icon())?,
        }
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if !self.resource_urls.is_empty() {
            writeln!(f, "#### Resources")?;
            writeln!(f)?;
            for url in &self.resource_urls {
                writeln!(f, "- {url}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_task(f, None)
    }
}

impl fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Starts**: {}", self.start_date)?;
        writeln!(f, "- **Duration**: {} Days Course", self.number_of_days)?;
        if !self.preferred_learning_style.is_empty() {
            writeln!(
                f,
                "- **Learning Style**: {}",
                self.preferred_learning_style.join(", ")
            )?;
        }
        writeln!(f, "- **Progress**: {:.0}%", self.progress)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(no name)"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;
        writeln!(f, "- Email: {}", self.email)?;
        if !self.profile.is_empty() {
            writeln!(f, "- Picture: {}", self.profile)?;
        }

        if !self.bio.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.bio)?;
        }

        Ok(())
    }
}
