//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Routing
//!
//! The core decides what input it wants. While the active frame publishes a
//! `Prompt`, keystrokes go to the `LineInput` and only a completed line
//! reaches `update` (as `SubmitText` or `SubmitInteger`). Otherwise each key
//! is classified as a `Key` (arrows, PgUp/PgDn, Enter, `q`, `y`, `n`, or
//! `Other`) and sent as `Action::Key`. Ctrl+C is `Action::Quit` from anywhere.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on the next terminal event and
//! redraws once per event.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{LineEvent, LineInput, RecordPickerState};
use crate::tui::event::{TuiEvent, classify, next_event};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub line_input: LineInput,
    pub picker: RecordPickerState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            line_input: LineInput::new(),
            picker: RecordPickerState::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset on redraw
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();
    info!(
        "Starting with an empty roster (capacity {}, {:?} ids)",
        app.roster.capacity(),
        app.roster.id_scheme()
    );

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Shutting down, {} students discarded", app.roster.len());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    loop {
        // Sync LineInput props with the active prompt
        if let Some(prompt) = app.nav.prompt() {
            tui.line_input.set_prompt(&prompt);
        }

        terminal.draw(|f| ui::draw_ui(f, app, tui))?;

        let Some(event) = next_event()? else {
            continue;
        };
        let Some(action) = route_event(app, tui, event) else {
            continue;
        };
        if update(app, action) == Effect::Quit {
            return Ok(());
        }
    }
}

/// Turn one terminal event into at most one action.
fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        event if app.nav.prompt().is_some() => match tui.line_input.handle_event(&event)? {
            LineEvent::Text(text) => Some(Action::SubmitText(text)),
            LineEvent::Integer(value) => Some(Action::SubmitInteger(value)),
            LineEvent::Rejected | LineEvent::Edited => None,
        },
        event => {
            let key = classify(&event)?;
            debug!("Classified {:?} as {:?}", event, key);
            Some(Action::Key(key))
        }
    }
}
