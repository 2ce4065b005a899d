use crate::game::Game;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fightgrid_core::{Verdict, GRID_SIZE};
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// Current game
    pub game: Game,
    /// Selected cell as (row, col)
    pub cursor: (usize, usize),
    /// Name being typed for the selected cell
    pub input: String,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Whether the completion message was already shown
    completion_announced: bool,
}

impl App {
    pub fn new(game: Game, theme: Theme) -> Self {
        Self {
            game,
            cursor: (0, 0),
            input: String::new(),
            theme,
            message: None,
            message_timer: 0,
            completion_announced: false,
        }
    }

    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.game.is_completed() && !self.completion_announced {
            self.completion_announced = true;
            let guesses = self.game.guesses();
            self.show_message(&format!(
                "Grid complete in {} {}! Ctrl+N for another",
                guesses,
                if guesses == 1 { "guess" } else { "guesses" }
            ));
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,

            KeyCode::Char('n') if ctrl => self.new_puzzle(),

            // Navigation
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),

            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.reveal(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Delete => {
                let (row, col) = self.cursor;
                if self.game.clear(row, col).is_ok() {
                    self.show_message("Cleared");
                }
            }

            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
        AppAction::Continue
    }

    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let (row, col) = self.cursor;
        let input = std::mem::take(&mut self.input);
        match self.game.submit(row, col, &input) {
            Ok(Verdict::Correct) => self.show_message("Correct!"),
            Ok(_) => self.show_message(&format!("{} doesn't connect these two", input.trim())),
            Err(err) => {
                self.show_message(&err.to_string());
                // keep the text so it can be fixed
                self.input = input;
            }
        }
    }

    fn reveal(&mut self) {
        let (row, col) = self.cursor;
        match self.game.reveal(row, col) {
            Ok(names) if names.is_empty() => self.show_message("No fighter connects this cell"),
            Ok(names) => {
                let shown: Vec<&str> = names.iter().take(5).map(String::as_str).collect();
                let more = names.len().saturating_sub(shown.len());
                let mut msg = format!("Answers: {}", shown.join(", "));
                if more > 0 {
                    msg.push_str(&format!(" (+{} more)", more));
                }
                self.show_message(&msg);
            }
            Err(err) => self.show_message(&err.to_string()),
        }
    }

    fn new_puzzle(&mut self) {
        let seed = rand::random::<u64>();
        match self.game.new_puzzle(seed) {
            Ok(()) => {
                self.cursor = (0, 0);
                self.input.clear();
                self.completion_announced = false;
                self.show_message("New puzzle");
            }
            Err(err) => self.show_message(&err.to_string()),
        }
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max = GRID_SIZE as i32 - 1;
        let row = (self.cursor.0 as i32 + row_delta).clamp(0, max) as usize;
        let col = (self.cursor.1 as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = (row, col);
    }
}
