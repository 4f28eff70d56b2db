//! Terminal rendering for markdown output
//!
//! Rich output renders headers, bold text and status lines with colors using
//! termimad. Plain output prints the markdown unchanged.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

const HEADER: &str = "\x1b[34m";
const NOTICE: &str = "\x1b[33m";
const SUCCESS: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if !self.rich_enabled {
            return write!(stdout, "{markdown}").context("Failed to write output");
        }

        for line in markdown.lines() {
            let written = match line_color(line) {
                // Headers keep their hashes so day and task numbers stay visible
                Some(color) => writeln!(stdout, "{color}{line}{RESET}"),
                None => writeln!(stdout, "{}", self.skin.inline(line)),
            };
            written.context("Failed to write output")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn line_color(line: &str) -> Option<&'static str> {
    if line.starts_with('#') {
        Some(HEADER)
    } else if line.starts_with("Notice:") {
        Some(NOTICE)
    } else if line.starts_with("Success:") || line.starts_with("Task marked as") {
        Some(SUCCESS)
    } else {
        None
    }
}
