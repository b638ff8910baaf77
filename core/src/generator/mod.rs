use crate::*;
pub use random::*;

mod random;

/// Places the mines of a board once the first revealed cell is known.
pub trait MinefieldGenerator {
    /// Builds a layout for `config` where no cell within distance 1 of `anchor` is a mine.
    fn generate(self, config: GameConfig, anchor: Coord2) -> Result<MineLayout>;
}
