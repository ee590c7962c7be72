//! User-facing notification capability.
//!
//! Gateway failures are announced through a [`Notifier`] before being returned
//! to the caller, so the front end decides how (or whether) to show them.

use crate::ui::colors;
use crossterm::{
    execute,
    style::{Print, ResetColor, SetForegroundColor},
};
use std::io::{Write, stderr};

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints notifications to stderr, highlighted unless `plain` is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier {
    plain: bool,
}

impl TerminalNotifier {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        let mut err = stderr();
        // Nothing sensible to do if stderr itself is gone
        let _ = if self.plain {
            writeln!(err, "! {message}")
        } else {
            execute!(
                err,
                SetForegroundColor(colors::error_fg()),
                Print(format!("! {message}\n")),
                ResetColor
            )
        };
    }
}

/// Drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}
