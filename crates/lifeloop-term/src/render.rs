//! Frame and loop-panel drawing.
//!
//! Everything is queued into a generic `io::Write`; the caller flushes.
//! Lines are addressed absolutely, so a frame can be redrawn in place
//! without clearing the screen:
//!
//! ```text
//! 0            ┌────┐
//! 1..=rows     │ ██ │
//! rows + 1     └────┘
//! rows + 2     Generation: N
//! rows + 3     Press ESC to exit
//! rows + 5..   loop panel (when a loop is detected)
//! rows + 10    prompt
//! ```

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use lifeloop_core::{Generation, Grid};
use lifeloop_engine::LoopInfo;

/// Glyph drawn for a live cell.
pub const LIVE_GLYPH: char = '█';

const PANEL_OFFSET: usize = 5;
const PANEL_LINES: usize = 5;
const PROMPT: &str = "Loop detected! Press any key to continue or ESC to exit.";

/// Colour of a live cell with `neighbours` live neighbours.
pub fn neighbour_colour(neighbours: u8) -> Color {
    match neighbours {
        0 | 1 => Color::DarkGrey,
        2 | 3 => Color::Green,
        4 | 5 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Draw the bordered grid and the two status lines.
pub fn draw_frame<W: Write>(out: &mut W, grid: &Grid, generation: Generation) -> io::Result<()> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let rule = "─".repeat(cols);

    queue!(out, MoveTo(0, 0), Print('┌'), Print(&rule), Print('┐'))?;

    let mut row_text = String::with_capacity(cols * LIVE_GLYPH.len_utf8());
    for row in 0..rows {
        queue!(out, MoveTo(0, line(row + 1)), Print('│'))?;
        let mut colour: Option<Color> = None;
        row_text.clear();
        for col in 0..cols {
            let (r, c) = (row as i32, col as i32);
            if !grid.is_alive(r, c) {
                row_text.push(' ');
                continue;
            }
            let wanted = neighbour_colour(grid.count_neighbours(r, c));
            if colour != Some(wanted) {
                flush_run(out, &mut row_text)?;
                queue!(out, SetForegroundColor(wanted))?;
                colour = Some(wanted);
            }
            row_text.push(LIVE_GLYPH);
        }
        flush_run(out, &mut row_text)?;
        if colour.is_some() {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('│'))?;
    }

    queue!(
        out,
        MoveTo(0, line(rows + 1)),
        Print('└'),
        Print(&rule),
        Print('┘'),
        MoveTo(0, line(rows + 2)),
        Print(format!("Generation: {generation}")),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, line(rows + 3)),
        Print("Press ESC to exit"),
    )?;
    Ok(())
}

/// Draw the loop description below a grid of `rows` rows.
pub fn draw_loop_panel<W: Write>(
    out: &mut W,
    rows: usize,
    info: &LoopInfo,
    generation: Generation,
) -> io::Result<()> {
    let top = rows + PANEL_OFFSET;
    let lines = [
        "═══ LOOP DETECTED ═══".to_string(),
        info.kind().to_string(),
        format!("Loop started at generation {}.", info.loop_start_generation),
        format!("Current generation: {generation}"),
        "════════════════════".to_string(),
    ];
    for (i, text) in lines.iter().enumerate() {
        queue!(
            out,
            MoveTo(0, line(top + i)),
            Print(text),
            Clear(ClearType::UntilNewLine)
        )?;
    }
    Ok(())
}

/// Draw the continue-or-exit prompt under the loop panel.
pub fn draw_prompt<W: Write>(out: &mut W, rows: usize) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, line(rows + PANEL_OFFSET + PANEL_LINES)),
        Print(PROMPT),
        Clear(ClearType::UntilNewLine)
    )
}

/// Erase the prompt, leaving the loop panel in place.
pub fn clear_prompt<W: Write>(out: &mut W, rows: usize) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, line(rows + PANEL_OFFSET + PANEL_LINES)),
        Clear(ClearType::CurrentLine)
    )
}

/// Erase the loop panel and the prompt.
pub fn clear_loop_panel<W: Write>(out: &mut W, rows: usize) -> io::Result<()> {
    for i in 0..=PANEL_LINES {
        queue!(
            out,
            MoveTo(0, line(rows + PANEL_OFFSET + i)),
            Clear(ClearType::CurrentLine)
        )?;
    }
    Ok(())
}

fn flush_run<W: Write>(out: &mut W, run: &mut String) -> io::Result<()> {
    if !run.is_empty() {
        queue!(out, Print(&*run))?;
        run.clear();
    }
    Ok(())
}

fn line(y: usize) -> u16 {
    u16::try_from(y).unwrap_or(u16::MAX)
}
