//! Progress bar helpers using indicatif

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for plan execution
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    // Template is a constant; fall back to the default bar if it ever fails to parse
    let bar_style = ProgressStyle::default_bar()
        .template("{msg:40} [{bar:30.cyan/blue}] {pos}/{len}")
        .map(|s| s.progress_chars("█▓▒░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(bar_style);
    pb.set_message(message.to_string());
    pb
}
