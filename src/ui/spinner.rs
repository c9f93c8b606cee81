//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with the given message
///
/// Returns `None` if quiet mode is enabled.
pub fn create_spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Clear the spinner, leaving stdout to the command output
pub fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
}

/// Finish spinner with appropriate message based on results
pub fn finish_spinner_with_status<T>(
    spinner: Option<ProgressBar>,
    results: &[T],
    had_errors: bool,
) {
    if let Some(s) = spinner {
        if had_errors && results.is_empty() {
            s.finish_and_clear();
        } else if had_errors {
            s.finish_with_message("Completed with errors");
        } else {
            s.finish_and_clear();
        }
    }
}
