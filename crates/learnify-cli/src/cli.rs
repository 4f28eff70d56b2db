//! Command definitions and handlers for the Learnify CLI
//!
//! Argument structures carry the clap derives and convert into the
//! interface-agnostic parameter types of `learnify_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session handlers → Renderer
//! ```
//!
//! Day and task positions are typed 1-based, the way they are displayed by
//! `course show`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use learnify_core::{
    display::OperationStatus,
    params::{CourseId, EditTask, Login, TaskPosition, UpdateProfile, UploadPicture},
    Session,
};
use log::info;

use crate::renderer::TerminalRenderer;

/// Course commands
#[derive(Subcommand)]
pub enum CourseCommands {
    /// List your courses with their progress
    #[command(alias = "ls")]
    List,
    /// Show a course with all days and tasks
    Show(ShowCourseArgs),
}

/// Task commands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Mark a task completed, or pending again
    Toggle(TaskPositionArgs),
    /// Change a task's title, description or resources
    Edit(EditTaskArgs),
}

/// Profile commands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your profile
    Show,
    /// Update name, bio or picture URL
    Update(UpdateProfileArgs),
    /// Upload an image and use it as your profile picture
    UploadPicture(UploadPictureArgs),
}

/// Show details of a specific course
#[derive(Args)]
pub struct ShowCourseArgs {
    /// ID of the course to display
    pub id: String,
}

impl From<ShowCourseArgs> for CourseId {
    fn from(val: ShowCourseArgs) -> Self {
        CourseId { id: val.id }
    }
}

/// Address a task by course, day and position
#[derive(Args)]
pub struct TaskPositionArgs {
    /// ID of the course
    pub course_id: String,
    /// Day number, starting at 1
    pub day: usize,
    /// Task number within the day, starting at 1
    pub task: usize,
}

impl From<TaskPositionArgs> for TaskPosition {
    fn from(val: TaskPositionArgs) -> Self {
        TaskPosition {
            course_id: val.course_id,
            day: val.day,
            task: val.task,
        }
    }
}

/// Edit the content of a task
///
/// Edits are allowed on any day, including days that cannot be checked off
/// yet. The task status is left unchanged.
#[derive(Args)]
pub struct EditTaskArgs {
    #[command(flatten)]
    pub position: TaskPositionArgs,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New resource URLs, one per line. Blank lines are ignored
    #[arg(short, long)]
    pub resources: Option<String>,
}

impl From<EditTaskArgs> for EditTask {
    fn from(val: EditTaskArgs) -> Self {
        EditTask {
            position: val.position.into(),
            title: val.title,
            description: val.description,
            resources: val.resources,
        }
    }
}

/// Update profile fields; omitted fields keep their value
#[derive(Args)]
pub struct UpdateProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,
    /// New biography
    #[arg(long)]
    pub bio: Option<String>,
    /// URL of an already hosted profile picture
    #[arg(long)]
    pub picture_url: Option<String>,
}

impl From<UpdateProfileArgs> for UpdateProfile {
    fn from(val: UpdateProfileArgs) -> Self {
        UpdateProfile {
            name: val.name,
            bio: val.bio,
            picture_url: val.picture_url,
        }
    }
}

/// Upload a profile picture
#[derive(Args)]
pub struct UploadPictureArgs {
    /// Image file to upload
    pub file: PathBuf,
}

impl From<UploadPictureArgs> for UploadPicture {
    fn from(val: UploadPictureArgs) -> Self {
        UploadPicture { path: val.file }
    }
}

/// Runs commands against a session and renders the results.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub async fn handle_course_command(self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::List => self.list_courses().await,
            CourseCommands::Show(args) => {
                let params: CourseId = args.into();
                let plan = self
                    .session
                    .show_course(&params)
                    .await
                    .with_context(|| format!("Failed to load course {}", params.id))?;
                self.renderer.render(&plan.to_string())
            }
        }
    }

    pub async fn handle_task_command(self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Toggle(args) => {
                let result = self
                    .session
                    .toggle_task(&args.into())
                    .await
                    .context("Failed to toggle task")?;
                if !result.is_saved() {
                    info!("Toggle was blocked by an incomplete earlier day");
                }
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Edit(args) => {
                let result = self
                    .session
                    .edit_task(&args.into())
                    .await
                    .context("Failed to edit task")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_profile_command(self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Show => {
                let profile = self
                    .session
                    .show_profile()
                    .await
                    .context("Failed to load profile")?;
                self.renderer.render(&profile.to_string())
            }
            ProfileCommands::Update(args) => {
                let result = self
                    .session
                    .update_profile(&args.into())
                    .await
                    .context("Failed to update profile")?;
                self.renderer.render(&result.to_string())
            }
            ProfileCommands::UploadPicture(args) => {
                let result = self
                    .session
                    .upload_picture(&args.into())
                    .await
                    .context("Failed to upload image")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn list_courses(self) -> Result<()> {
        let courses = self
            .session
            .list_courses()
            .await
            .context("Failed to load courses")?;
        self.renderer.render(&courses.to_string())
    }

    pub async fn login(mut self, token: Option<String>, api_url: Option<String>) -> Result<()> {
        let token = token.context("No token given, pass --token <TOKEN> or set LEARNIFY_TOKEN")?;
        self.session
            .login(&Login { token, api_url })
            .await
            .context("Failed to save credentials")?;
        let status = OperationStatus::success(format!(
            "Logged in to {}",
            self.session.context().api_url
        ));
        self.renderer.render(&status.to_string())
    }

    pub async fn logout(mut self) -> Result<()> {
        let removed = self
            .session
            .logout()
            .await
            .context("Failed to clear credentials")?;
        let status = if removed {
            OperationStatus::success("Logged out")
        } else {
            OperationStatus::notice("Not logged in")
        };
        self.renderer.render(&status.to_string())
    }
}
