use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use app_logging::{app_debug, app_info, app_warn};
use assistant_core::{update, AppState, GenerationState, Msg, Page, NAV_PAGES};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::effects::EffectRunner;
use crate::picker;
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(100);

/// What the shell keeps outside the pure core: the input mode, the path
/// prompt buffer, the attachment cursor and a transient notice line.
pub struct ShellState {
    pub mode: InputMode,
    pub path_input: String,
    pub attachment_cursor: usize,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    PathPrompt,
}

impl ShellState {
    fn new() -> Self {
        Self {
            mode: InputMode::Browse,
            path_input: String::new(),
            attachment_cursor: 0,
            notice: None,
        }
    }

    fn clamp_cursor(&mut self, state: &AppState) {
        let len = state.session().attachments().len();
        if len == 0 {
            self.attachment_cursor = 0;
        } else if self.attachment_cursor >= len {
            self.attachment_cursor = len - 1;
        }
    }
}

enum KeyOutcome {
    None,
    Redraw,
    Dispatch(Msg),
    Quit,
}

pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut state = AppState::new();
    let mut runner = EffectRunner::new();
    let mut shell = ShellState::new();
    let mut needs_redraw = true;
    let mut should_quit = false;

    app_info!("Shell started on {:?}", state.page());

    while !should_quit {
        if needs_redraw {
            let view = state.view();
            terminal.draw(|f| ui::draw(f, &view, &shell))?;
            needs_redraw = false;
        }

        // Wake early if the generation deadline lands inside the tick.
        let timeout = match runner.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(TICK_RATE),
            None => TICK_RATE,
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(key, &state, &mut shell) {
                        KeyOutcome::Quit => should_quit = true,
                        KeyOutcome::Redraw => needs_redraw = true,
                        KeyOutcome::Dispatch(msg) => {
                            needs_redraw |= dispatch(&mut state, &mut runner, &mut shell, msg);
                        }
                        KeyOutcome::None => {}
                    }
                }
            }
        }

        if let Some(msg) = runner.take_due(Instant::now()) {
            needs_redraw |= dispatch(&mut state, &mut runner, &mut shell, msg);
        }
    }

    // Teardown: never let a scheduled callback fire into a dropped shell.
    runner.cancel();
    app_info!("Shell stopped");
    Ok(())
}

fn dispatch(
    state: &mut AppState,
    runner: &mut EffectRunner,
    shell: &mut ShellState,
    msg: Msg,
) -> bool {
    match &msg {
        Msg::Navigate(path) => app_info!("Navigating to {}", path),
        Msg::FilesPicked(files) => app_info!("Attached {} file(s)", files.len()),
        Msg::AttachmentRemoved(index) => app_debug!("Removing attachment at index {}", index),
        Msg::GenerationFinished => app_info!("Generation finished"),
        _ => {}
    }
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.apply(effects);
    shell.clamp_cursor(state);
    state.consume_dirty()
}

fn handle_key(key: KeyEvent, state: &AppState, shell: &mut ShellState) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    match shell.mode {
        InputMode::PathPrompt => handle_path_prompt_key(key, shell),
        InputMode::Browse => handle_browse_key(key, state, shell),
    }
}

fn handle_path_prompt_key(key: KeyEvent, shell: &mut ShellState) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => {
            shell.mode = InputMode::Browse;
            shell.path_input.clear();
            KeyOutcome::Redraw
        }
        KeyCode::Enter => {
            let entered = std::mem::take(&mut shell.path_input);
            shell.mode = InputMode::Browse;
            match picker::attachment_from_path(&entered) {
                Ok(attachment) => {
                    shell.notice = None;
                    KeyOutcome::Dispatch(Msg::FilesPicked(vec![attachment]))
                }
                Err(err) => {
                    app_warn!("Attachment skipped: {:#}", err);
                    shell.notice = Some(format!("Could not read file: {entered}"));
                    KeyOutcome::Redraw
                }
            }
        }
        KeyCode::Backspace => {
            shell.path_input.pop();
            KeyOutcome::Redraw
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            shell.path_input.push(c);
            KeyOutcome::Redraw
        }
        _ => KeyOutcome::None,
    }
}

fn handle_browse_key(key: KeyEvent, state: &AppState, shell: &mut ShellState) -> KeyOutcome {
    // Chrome-wide navigation first.
    match key.code {
        KeyCode::Tab => return navigate_cycle(state.page(), 1),
        KeyCode::BackTab => return navigate_cycle(state.page(), -1),
        _ => {}
    }

    match state.page() {
        Page::MainApp => handle_main_app_key(key, state, shell),
        Page::Landing => match key.code {
            // The "Start Researching" call to action.
            KeyCode::Enter => KeyOutcome::Dispatch(Msg::Navigate("/app".to_string())),
            KeyCode::Char('q') => KeyOutcome::Quit,
            _ => KeyOutcome::None,
        },
        _ => match key.code {
            KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Esc => KeyOutcome::Dispatch(Msg::Navigate("/".to_string())),
            _ => KeyOutcome::None,
        },
    }
}

fn handle_main_app_key(key: KeyEvent, state: &AppState, shell: &mut ShellState) -> KeyOutcome {
    let session = state.session();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('o') => {
                shell.mode = InputMode::PathPrompt;
                shell.path_input.clear();
                shell.notice = None;
                KeyOutcome::Redraw
            }
            KeyCode::Char('d') => {
                KeyOutcome::Dispatch(Msg::AttachmentRemoved(shell.attachment_cursor))
            }
            KeyCode::Char('r') => {
                // The refresh control exists only on a completed report with
                // the live-update flag set.
                let refresh_visible = session.generation() == GenerationState::Completed
                    && session
                        .results()
                        .map(|r| r.live_update_available)
                        .unwrap_or(false);
                if refresh_visible {
                    app_info!("Refreshing report with latest data");
                    KeyOutcome::Dispatch(Msg::RefreshRequested)
                } else {
                    KeyOutcome::None
                }
            }
            _ => KeyOutcome::None,
        };
    }

    match key.code {
        KeyCode::Enter => KeyOutcome::Dispatch(Msg::GenerateRequested),
        KeyCode::Esc => KeyOutcome::Dispatch(Msg::Navigate("/".to_string())),
        KeyCode::Up => {
            shell.attachment_cursor = shell.attachment_cursor.saturating_sub(1);
            KeyOutcome::Redraw
        }
        KeyCode::Down => {
            let len = session.attachments().len();
            if len > 0 && shell.attachment_cursor + 1 < len {
                shell.attachment_cursor += 1;
            }
            KeyOutcome::Redraw
        }
        KeyCode::Backspace => {
            let mut query = session.query().to_string();
            query.pop();
            KeyOutcome::Dispatch(Msg::QueryChanged(query))
        }
        KeyCode::Char(c) => {
            let mut query = session.query().to_string();
            query.push(c);
            KeyOutcome::Dispatch(Msg::QueryChanged(query))
        }
        _ => KeyOutcome::None,
    }
}

/// Tab order over the chrome pages. Pages outside the sidebar enter the
/// cycle at its first entry.
fn navigate_cycle(current: Page, step: isize) -> KeyOutcome {
    let position = NAV_PAGES.iter().position(|p| *p == current);
    let next = match position {
        Some(index) => {
            let len = NAV_PAGES.len() as isize;
            let target = (index as isize + step).rem_euclid(len) as usize;
            NAV_PAGES[target]
        }
        // From Landing or NotFound, Tab enters the app proper.
        None => NAV_PAGES[0],
    };
    match next.path() {
        Some(path) => KeyOutcome::Dispatch(Msg::Navigate(path.to_string())),
        None => KeyOutcome::None,
    }
}
