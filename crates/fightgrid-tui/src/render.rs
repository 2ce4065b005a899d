use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use fightgrid_core::{Verdict, GRID_SIZE};
use std::io::{self, Write};

/// Width of a cell's text, borders excluded
const CELL_WIDTH: usize = 20;
/// Width of the row-anchor column on the left
const LABEL_WIDTH: usize = 20;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, _) = terminal::size()?;
    let theme = &app.theme;

    queue!(
        stdout,
        Hide,
        SetBackgroundColor(theme.bg),
        Clear(ClearType::All)
    )?;

    let grid_width = (LABEL_WIDTH + 1 + GRID_SIZE * (CELL_WIDTH + 1)) as u16;
    let x = if term_width > grid_width { (term_width - grid_width) / 2 } else { 0 };
    let y = 1;

    render_grid(stdout, app, x, y)?;

    let grid_bottom = y + 2 + GRID_SIZE as u16 * 2;
    render_input(stdout, app, x, grid_bottom + 1)?;
    render_info(stdout, app, x, grid_bottom + 3)?;
    render_controls(stdout, app, x, grid_bottom + 5)?;

    if let Some(ref msg) = app.message {
        queue!(
            stdout,
            MoveTo(x, grid_bottom + 8),
            SetForegroundColor(theme.key),
            Print(msg)
        )?;
    }

    queue!(stdout, ResetColor, Show)?;
    stdout.flush()
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let game = &app.game;
    let grid = game.grid();

    // Column anchors
    queue!(stdout, MoveTo(x, y), Print(" ".repeat(LABEL_WIDTH + 1)))?;
    for id in grid.columns() {
        queue!(
            stdout,
            SetForegroundColor(theme.anchor),
            Print(fit(game.label(id), CELL_WIDTH)),
            Print(" ")
        )?;
    }

    let separator = format!(
        "{}+{}",
        " ".repeat(LABEL_WIDTH),
        format!("{}+", "-".repeat(CELL_WIDTH)).repeat(GRID_SIZE)
    );
    queue!(
        stdout,
        MoveTo(x, y + 1),
        SetForegroundColor(theme.border),
        Print(&separator)
    )?;

    for (row, row_id) in grid.rows().iter().enumerate() {
        let line_y = y + 2 + row as u16 * 2;
        queue!(
            stdout,
            MoveTo(x, line_y),
            SetForegroundColor(theme.anchor),
            Print(fit(game.label(row_id), LABEL_WIDTH)),
            SetForegroundColor(theme.border),
            Print("|")
        )?;

        for col in 0..GRID_SIZE {
            let text = grid
                .answer(row, col)
                .map(|id| game.label(id))
                .unwrap_or("");
            let color = match grid.verdict(row, col) {
                Some(Verdict::Correct) => theme.correct,
                Some(Verdict::Incorrect) => theme.incorrect,
                _ => theme.fg,
            };
            let bg = if app.cursor == (row, col) { theme.selected_bg } else { theme.bg };
            queue!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(color),
                Print(fit(text, CELL_WIDTH)),
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;
        }

        queue!(stdout, MoveTo(x, line_y + 1), Print(&separator))?;
    }

    Ok(())
}

fn render_input(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let (row, col) = app.cursor;
    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.info),
        Print(format!("Cell {},{} > ", row + 1, col + 1)),
        SetForegroundColor(app.theme.input),
        Print(&app.input),
        SetForegroundColor(app.theme.key),
        Print("_")
    )?;
    Ok(())
}

fn render_info(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let game = &app.game;
    let info = format!(
        "Correct {}/{}  Guesses {}  Seed {}  Min fights {}  Fighters {}",
        game.grid().correct_count(),
        GRID_SIZE * GRID_SIZE,
        game.guesses(),
        game.seed(),
        game.config().min_degree,
        game.fighter_count()
    );
    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.info),
        Print(info)
    )?;
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let controls: [(&str, &str); 6] = [
        ("Arrows", "move"),
        ("Enter", "submit"),
        ("Tab", "reveal"),
        ("Del", "clear cell"),
        ("Ctrl+N", "new puzzle"),
        ("Esc", "quit"),
    ];
    queue!(stdout, MoveTo(x, y))?;
    for (key, action) in controls {
        queue!(
            stdout,
            SetForegroundColor(app.theme.key),
            Print(key),
            SetForegroundColor(app.theme.info),
            Print(format!(" {}  ", action))
        )?;
    }
    Ok(())
}

/// Pad or truncate to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        format!("{:<width$}", text, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Ali", 5), "Ali  ");
        assert_eq!(fit("Muhammad Ali", 6), "Muham…");
        assert_eq!(fit("", 2), "  ");
        assert_eq!(fit("Ali", 3).chars().count(), 3);
    }
}
