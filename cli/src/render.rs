use std::io::{self, Write};
use std::time::Duration;

use sweeper_core::{CellValue, CellView, Coord, Phase, Session};

use crate::clock::format_elapsed;

const CELL_WIDTH: usize = 3;

fn glyph(cell: CellView, triggered: bool) -> char {
    match (cell.revealed, cell.flagged, cell.value) {
        (true, _, CellValue::Mine) if triggered => 'X',
        (true, _, CellValue::Mine) => '*',
        (true, _, CellValue::Count(0)) => '.',
        (true, _, CellValue::Count(count)) => char::from(b'0' + count),
        (false, true, _) => 'F',
        (false, false, _) => '#',
    }
}

/// Draws the status line and the grid, the grid is hidden while paused.
pub fn render(
    out: &mut impl Write,
    session: &Session,
    elapsed: Duration,
) -> io::Result<()> {
    let board = session.board();
    let snapshot = session.snapshot();

    writeln!(
        out,
        "Mines: {}  Flags: {}  Time: {}  Steps: {}  [{:?}]",
        snapshot.mines_left,
        snapshot.flags_left,
        format_elapsed(elapsed),
        session.steps(),
        session.phase(),
    )?;

    if session.phase() == Phase::Paused {
        return writeln!(out, "-- paused, type `p` to resume --");
    }

    write!(out, "{:>CELL_WIDTH$}", "")?;
    for column in 0..snapshot.size.1 {
        write!(out, "{column:>CELL_WIDTH$}")?;
    }
    writeln!(out)?;

    for (row, cells) in snapshot.rows().enumerate() {
        write!(out, "{row:>CELL_WIDTH$}")?;
        for (column, cell) in cells.enumerate() {
            let coords = (row as Coord, column as Coord);
            let triggered = board.triggered_mine() == Some(coords);
            write!(out, "{:>CELL_WIDTH$}", glyph(cell, triggered))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
