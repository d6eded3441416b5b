//! User-feedback collaborator: messages, the confirmation prompt, and the
//! deletion progress bar. Behind a trait so the orchestrators can be tested
//! without a terminal.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

pub trait Reporter {
    /// Show a one-line status message.
    fn message(&self, text: &str);

    /// Show `message` and return the user's raw response line.
    fn prompt(&self, message: &str) -> Result<String>;

    /// Start a progress bar over `total` steps.
    fn progress(&self, total: u64) -> Box<dyn ProgressHandle>;
}

pub trait ProgressHandle {
    fn tick(&self);
    fn finish(&self, message: &str);
}

/// The real reporter: colored output, dialoguer prompt, indicatif bar.
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn message(&self, text: &str) {
        println!("{}", text.bold());
    }

    fn prompt(&self, message: &str) -> Result<String> {
        println!("{}", message.bright_red().bold());
        let answer: String = Input::new()
            .with_prompt("[Y/n]")
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn progress(&self, total: u64) -> Box<dyn ProgressHandle> {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("#>-"),
        );
        bar.set_message("Deleting gists...");
        Box::new(TerminalProgress { bar })
    }
}

struct TerminalProgress {
    bar: ProgressBar,
}

impl ProgressHandle for TerminalProgress {
    fn tick(&self) {
        self.bar.inc(1);
    }

    fn finish(&self, message: &str) {
        self.bar.finish_and_clear();
        println!("{}", message.bright_red().bold());
    }
}
