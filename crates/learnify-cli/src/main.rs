//! Learnify CLI Application
//!
//! Command-line client for Learnify course study plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use learnify_core::SessionBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        token,
        session_file,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_store_path(session_file)
        .with_api_url(api_url.clone())
        .with_token(token.clone())
        .build()
        .await
        .context("Failed to initialize session")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(session, renderer);

    info!("Learnify started");

    match command {
        Some(Login) => cli.login(token, api_url).await,
        Some(Logout) => cli.logout().await,
        Some(Course { command }) => cli.handle_course_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        None => cli.list_courses().await,
    }
}
