//! Notification sink
//!
//! Failures are reported to the user as one-line messages. Nothing is
//! reported on success.

use colored::Colorize;

pub trait Notifier {
    fn error(&self, message: &str);
}

/// Prints notifications to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "ERROR".red().bold(), message);
    }
}
