//! Interactive clock.
//!
//! The loop owns the [`AppState`]: ticker instants and terminal events become
//! [`Action`]s, each goes through `reduce`, and the next frame comes from
//! `render`. The only side effect is saving the configuration on confirm.

use super::input::{self, Command, HoldRepeat};
use super::theme::Theme;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lifeclock_engine::bar::HEAD;
use lifeclock_engine::screen::bar_row;
use lifeclock_engine::{Action, AppState, Effect, Frame, HEIGHT, TICK_PERIOD, WIDTH, reduce, render};
use lifeclock_runtime::{Clock, ConfigStore, Ticker};
use lifeclock_types::Scale;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Raw mode, alternate screen and mouse capture for as long as it lives
struct TerminalSession;

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

pub struct TuiRenderer {
    store: ConfigStore,
    clock: Arc<dyn Clock>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new(store: ConfigStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn run(mut self) -> Result<()> {
        let mut state = AppState::new(self.store.load(), self.clock.now());
        let mut ticker = Ticker::spawn(self.clock.clone(), TICK_PERIOD)?;

        let session = TerminalSession::enter()?;
        ctrlc::set_handler(move || {
            restore_terminal();
            std::process::exit(0);
        })?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let mut frame = render(&state);
        let mut origin = (0, 0);
        let mut hold: Option<HoldRepeat> = None;
        let mut dirty = true;

        info!(configured = state.is_configured(), "clock running");

        loop {
            if dirty {
                terminal.draw(|f| {
                    let area = f.area();
                    origin = input::grid_origin(area.width, area.height);
                    draw(f, &frame, &self.theme);
                })?;
                dirty = false;
            }

            let mut command = Command::Ignore;
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        command = input::key_command(key, state.is_editing());
                    }
                    Event::Mouse(mouse) => match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            let cell = input::to_grid(mouse.column, mouse.row, origin);
                            command = input::click_command(&frame, cell);
                        }
                        MouseEventKind::Up(MouseButton::Left) => hold = None,
                        _ => {}
                    },
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            match command {
                Command::Quit => break,
                Command::ToggleTheme => {
                    self.theme = self.theme.toggled();
                    debug!(theme = self.theme.name, "theme switched");
                    dirty = true;
                }
                Command::Dispatch(action) => {
                    state = self.dispatch(state, action);
                    dirty = true;
                }
                Command::Hold(step) => {
                    state = self.dispatch(state, Action::Adjust(step));
                    hold = Some(HoldRepeat::press(step, Instant::now()));
                    dirty = true;
                }
                Command::Ignore => {}
            }

            if let Some(repeat) = hold.as_mut() {
                for _ in 0..repeat.due(Instant::now()) {
                    state = self.dispatch(state, Action::Adjust(repeat.step));
                    dirty = true;
                }
            }

            for now in ticker.receiver().try_iter() {
                let (next, _) = reduce(state, Action::Tick(now));
                state = next;
                dirty = true;
            }

            if !state.is_editing() {
                hold = None;
            }
            if dirty {
                frame = render(&state);
            }
        }

        ticker.stop();
        terminal.show_cursor()?;
        drop(session);
        info!("clock stopped");
        Ok(())
    }

    fn dispatch(&self, state: AppState, action: Action) -> AppState {
        debug!(?action, "action");
        let (state, effect) = reduce(state, action);
        if let Some(Effect::Persist(configuration)) = effect {
            self.store.save(&configuration);
        }
        state
    }
}

fn draw(f: &mut ratatui::Frame, frame: &Frame, theme: &Theme) {
    let area = f.area();
    f.render_widget(Block::default().style(theme.base()), area);

    let (x, y) = input::grid_origin(area.width, area.height);
    let grid_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: area.width.saturating_sub(x).min(to_u16(WIDTH)),
        height: area.height.saturating_sub(y).min(to_u16(HEIGHT)),
    };

    let lines: Vec<Line> = frame
        .grid
        .rows()
        .into_iter()
        .enumerate()
        .map(|(row, text)| styled_row(row, text, theme))
        .collect();

    f.render_widget(Paragraph::new(lines).style(theme.base()), grid_area);
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Bar heads take the accent color; everything else is plain text
fn styled_row(row: usize, text: String, theme: &Theme) -> Line<'static> {
    if !Scale::ALL.iter().any(|&scale| bar_row(scale) == row) || !text.contains(HEAD) {
        return Line::from(text);
    }

    let mut spans = Vec::new();
    let mut plain = String::new();
    for ch in text.chars() {
        if ch == HEAD {
            if !plain.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut plain)));
            }
            spans.push(Span::styled(ch.to_string(), theme.highlight()));
        } else {
            plain.push(ch);
        }
    }
    if !plain.is_empty() {
        spans.push(Span::raw(plain));
    }
    Line::from(spans)
}
