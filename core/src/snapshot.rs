use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a presentation layer draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub cells: Array2<CellView>,
    pub mines_left: i32,
    pub flags_left: CellCount,
    pub status: BoardStatus,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, column)| {
            board.view_unchecked((row as Coord, column as Coord))
        });

        Self {
            size,
            cells,
            mines_left: board.mines_left(),
            flags_left: board.flags_left(),
            status: board.status(),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size).then(|| self.cells[coords.to_nd_index()])
    }

    /// Cells in row-major order, one slice-like iterator per row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn from_board_maps_revealed_and_flagged_cells() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut board = Board::with_layout(layout).unwrap();

        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();

        let snapshot = BoardSnapshot::from_board(&board);

        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.flags_left, 0);
        assert_eq!(snapshot.status, BoardStatus::Playing);
        assert_eq!(
            snapshot.cell((1, 1)).unwrap().visible_value(),
            Some(CellValue::Count(1))
        );
        assert!(snapshot.cell((0, 0)).unwrap().flagged);
        assert_eq!(snapshot.cell((0, 1)).unwrap().visible_value(), None);
        assert_eq!(snapshot.cell((2, 0)), None);
    }

    #[test]
    fn rows_follow_board_shape() {
        let board = Board::construct(3, 5, 2, 0).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);

        let widths: Vec<usize> = snapshot.rows().map(|row| row.count()).collect();
        assert_eq!(widths, [5, 5, 5]);
    }

    #[test]
    fn serializes_for_presentation_layers() {
        let layout = MineLayout::from_mine_coords((1, 3), &[(0, 2)]).unwrap();
        let mut board = Board::with_layout(layout).unwrap();
        board.reveal((0, 0)).unwrap();

        let snapshot = BoardSnapshot::from_board(&board);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, snapshot);
        assert_eq!(parsed.status, BoardStatus::Won);
    }
}
