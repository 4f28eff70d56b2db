use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CourseCommands, ProfileCommands, TaskCommands};

/// Command-line client for Learnify course study plans
///
/// Learnify organizes a course into days of tasks. Tasks of a day can only be
/// checked off once every earlier day is complete. Courses are stored by the
/// Learnify API; this client keeps only the login token and API URL locally.
#[derive(Parser)]
#[command(version, about, name = "learnify")]
pub struct Args {
    /// Base URL of the Learnify API. Defaults to the URL saved by `login`, or
    /// http://localhost:8081/api
    #[arg(long, global = true, env = "LEARNIFY_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token. Defaults to the token saved by `login`
    #[arg(long, global = true, env = "LEARNIFY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the session file. Defaults to
    /// $XDG_DATA_HOME/learnify/session.db
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Learnify CLI
///
/// Running without a command lists your courses.
#[derive(Subcommand)]
pub enum Commands {
    /// Save the token given with --token (and --api-url, if any) for later runs
    Login,
    /// Forget the saved token
    Logout,
    /// Browse courses
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Toggle or edit tasks of a course
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show or update your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}
