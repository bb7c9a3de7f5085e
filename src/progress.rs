//src/progress.rs

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A stderr spinner in the given colour (`blue`, `green`, ...).
///
/// indicatif hides it when stderr is not a terminal, so piped output stays clean.
pub fn spinner(color: &str, msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let template = format!("{{spinner:.{}}} {{msg}}", color);
    let style = ProgressStyle::default_spinner()
        .tick_strings(TICKS)
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(msg.into());
    spinner
}
