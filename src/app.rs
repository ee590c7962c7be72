//! Interactive pager
//!
//! Keys:
//! - ←/→ previous and next page (never fetches)
//! - r fetch again; a newer fetch supersedes one still in flight
//! - q or Esc quit

use crate::constants::INPUT_POLL_MS;
use crate::data_fetcher::FootballApi;
use crate::error::AppError;
use crate::notify::Notifier;
use crate::ui::colors::error_fg;
use crate::ui::screen::{FetchOutcome, Screen};
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{Stdout, Write, stdout};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

const HELP_LINE: &str = "←/→ страницы   r обновить   q выход";

/// Keeps the most recent notification for the pager's status line.
#[derive(Debug, Default)]
pub struct StatusLineNotifier {
    last: Mutex<Option<String>>,
}

impl StatusLineNotifier {
    /// Returns and clears the pending message.
    pub fn take(&self) -> Option<String> {
        self.last.lock().ok().and_then(|mut last| last.take())
    }
}

impl Notifier for StatusLineNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut last) = self.last.lock() {
            *last = Some(message.to_string());
        }
    }
}

/// What a key press asks the pager to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    NextPage,
    PreviousPage,
    Refresh,
    Quit,
    None,
}

pub fn action_for_key(code: KeyCode, modifiers: KeyModifiers) -> PagerAction {
    match code {
        KeyCode::Right | KeyCode::PageDown => PagerAction::NextPage,
        KeyCode::Left | KeyCode::PageUp => PagerAction::PreviousPage,
        KeyCode::Char('r') | KeyCode::Char('к') => PagerAction::Refresh,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => PagerAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('й') | KeyCode::Esc => PagerAction::Quit,
        _ => PagerAction::None,
    }
}

/// Raw mode plus alternate screen, restored on drop.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter(title: &str) -> Result<Self, AppError> {
        let mut stdout = stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Nothing left to report to if restoring fails
        let _ = execute!(self.stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn spawn_fetch(
    screen: &mut Screen,
    api: &Arc<FootballApi>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
) {
    match screen.fetch_task(Arc::clone(api)) {
        Some(task) => {
            let tx = tx.clone();
            tokio::spawn(async move {
                // The receiver is gone only after the pager quit
                let _ = tx.send(task.await);
            });
        }
        None => info!("Fetch skipped by filter"),
    }
}

fn draw(
    out: &mut Stdout,
    screen: &Screen,
    plain: bool,
    status: Option<&str>,
) -> Result<(), AppError> {
    let mut buffer = Vec::new();
    screen.render(plain, &mut buffer)?;
    // Raw mode does not translate \n into a carriage return
    let text = String::from_utf8_lossy(&buffer).replace('\n', "\r\n");

    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(text))?;
    if let Some(message) = status {
        if plain {
            queue!(out, Print(format!("! {message}\r\n")))?;
        } else {
            queue!(
                out,
                SetForegroundColor(error_fg()),
                Print(format!("! {message}\r\n")),
                ResetColor
            )?;
        }
    }
    queue!(out, Print("\r\n"), Print(HELP_LINE))?;
    out.flush()?;
    Ok(())
}

/// Runs the pager until the user quits.
///
/// `notifier` must be the same instance the gateway in `api` reports to.
/// `initial_page` is applied once the first fetch has landed.
pub async fn run_interactive(
    mut screen: Screen,
    api: Arc<FootballApi>,
    notifier: Arc<StatusLineNotifier>,
    plain: bool,
    initial_page: usize,
) -> Result<(), AppError> {
    let mut initial_page = Some(initial_page);
    let mut terminal = TerminalGuard::enter(screen.title())?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut status: Option<String> = None;

    spawn_fetch(&mut screen, &api, &tx);
    draw(&mut terminal.stdout, &screen, plain, None)?;

    loop {
        let mut needs_redraw = false;

        while let Ok(outcome) = rx.try_recv() {
            screen.apply(outcome);
            if let Some(page) = initial_page.take() {
                screen.set_page(page);
            }
            needs_redraw = true;
        }
        if let Some(message) = notifier.take() {
            status = Some(message);
            needs_redraw = true;
        }

        if event::poll(Duration::from_millis(INPUT_POLL_MS))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let action = action_for_key(key.code, key.modifiers);
            debug!("Key {:?} -> {:?}", key.code, action);
            match action {
                PagerAction::Quit => break,
                PagerAction::NextPage => screen.next_page(),
                PagerAction::PreviousPage => screen.previous_page(),
                PagerAction::Refresh => {
                    status = None;
                    spawn_fetch(&mut screen, &api, &tx);
                }
                PagerAction::None => {}
            }
            needs_redraw |= action != PagerAction::None;
        }

        if needs_redraw {
            draw(&mut terminal.stdout, &screen, plain, status.as_deref())?;
        }

        // Let spawned fetches progress on a current-thread runtime too
        tokio::task::yield_now().await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let none = KeyModifiers::NONE;
        assert_eq!(action_for_key(KeyCode::Right, none), PagerAction::NextPage);
        assert_eq!(action_for_key(KeyCode::Left, none), PagerAction::PreviousPage);
        assert_eq!(action_for_key(KeyCode::Char('r'), none), PagerAction::Refresh);
        assert_eq!(action_for_key(KeyCode::Char('q'), none), PagerAction::Quit);
        assert_eq!(action_for_key(KeyCode::Esc, none), PagerAction::Quit);
        assert_eq!(action_for_key(KeyCode::Char('x'), none), PagerAction::None);
        assert_eq!(
            action_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            PagerAction::Quit
        );
        assert_eq!(action_for_key(KeyCode::Char('c'), none), PagerAction::None);
    }

    #[test]
    fn test_status_line_notifier_keeps_latest() {
        let notifier = StatusLineNotifier::default();
        assert_eq!(notifier.take(), None);
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.take().as_deref(), Some("second"));
        assert_eq!(notifier.take(), None);
    }
}
