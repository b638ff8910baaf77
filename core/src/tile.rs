use serde::{Deserialize, Serialize};

/// Content of a cell once the board is populated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// What a presentation layer needs to draw a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    pub value: CellValue,
}

impl CellView {
    /// Value as the player is allowed to see it: only revealed cells show their content.
    pub const fn visible_value(self) -> Option<CellValue> {
        if self.revealed { Some(self.value) } else { None }
    }
}
