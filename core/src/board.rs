use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Terminal status of a board, set once and never cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStatus {
    Playing,
    Won,
    Lost,
}

impl BoardStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardStatus {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    seed: u64,
    values: Array2<CellValue>,
    revealed: Array2<bool>,
    flagged: Array2<bool>,
    mines_left: i32,
    flags_left: CellCount,
    revealed_count: CellCount,
    populated: bool,
    status: BoardStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Empty board, mines are placed by the first reveal using `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let shape = config.size.to_nd_index();
        Ok(Self {
            config,
            seed,
            values: Array2::default(shape),
            revealed: Array2::default(shape),
            flagged: Array2::default(shape),
            mines_left: i32::from(config.mines),
            flags_left: config.mines,
            revealed_count: 0,
            populated: false,
            status: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn construct(rows: Coord, columns: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Self::new(GameConfig::new(rows, columns, mines)?, seed)
    }

    /// Board that is already populated with a fixed layout.
    pub fn with_layout(layout: MineLayout) -> Result<Self> {
        let mut board = Self::new(layout.game_config(), 0)?;
        board.install_layout(&layout);
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Mines not covered by a flag yet. Flags on safe cells do not lower it.
    pub fn mines_left(&self) -> i32 {
        self.mines_left
    }

    pub fn flags_left(&self) -> CellCount {
        self.flags_left
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.revealed[coords.to_nd_index()])
    }

    pub fn is_flagged(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.flagged[coords.to_nd_index()])
    }

    pub fn value_at(&self, coords: Coord2) -> Result<CellValue> {
        let coords = self.validate_coords(coords)?;
        Ok(self.values[coords.to_nd_index()])
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.view_unchecked(coords))
    }

    pub(crate) fn view_unchecked(&self, coords: Coord2) -> CellView {
        let index = coords.to_nd_index();
        CellView {
            revealed: self.revealed[index],
            flagged: self.flagged[index],
            value: self.values[index],
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.config.size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Places the mines keeping the 3x3 block around `anchor` clear.
    pub fn populate(&mut self, anchor: Coord2) -> Result<()> {
        self.populate_with(RandomMinefieldGenerator::new(self.seed), anchor)
    }

    pub fn populate_with<G: MinefieldGenerator>(
        &mut self,
        generator: G,
        anchor: Coord2,
    ) -> Result<()> {
        let anchor = self.validate_coords(anchor)?;
        if self.populated {
            return Err(GameError::AlreadyPopulated);
        }

        let layout = generator.generate(self.config, anchor)?;
        if layout.game_config() != self.config
            || self
                .revealed
                .iter_zone(anchor)
                .any(|pos| layout.contains_mine(pos))
        {
            log::warn!("Generator returned a layout unusable for anchor {:?}", anchor);
            return Err(GameError::InvalidConfiguration);
        }
        self.install_layout(&layout);
        Ok(())
    }

    fn install_layout(&mut self, layout: &MineLayout) {
        self.values = layout.cell_values();
        self.populated = true;

        // flags placed before population are settled against the real layout
        let flagged_mines = self
            .flagged
            .indexed_iter()
            .filter(|&(index, &flagged)| flagged && self.values[index].is_mine())
            .count() as i32;
        self.mines_left = i32::from(self.config.mines) - flagged_mines;
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        if self.revealed[index] {
            return Ok(NoChange);
        }

        let is_mine = self.values[index].is_mine();
        if self.flagged[index] {
            self.flagged[index] = false;
            self.flags_left += 1;
            if is_mine {
                self.mines_left += 1;
            }
        } else {
            if self.flags_left == 0 {
                return Ok(NoChange);
            }
            self.flagged[index] = true;
            self.flags_left -= 1;
            if is_mine {
                self.mines_left -= 1;
            }
        }
        Ok(Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        if self.flagged[index] {
            return Ok(Blocked);
        }
        if self.revealed[index] {
            return Ok(AlreadyRevealed);
        }

        if !self.populated {
            log::debug!("First reveal at {:?}", coords);
            self.populate(coords)?;
        }

        self.revealed[index] = true;
        if self.values[index].is_mine() {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(Detonated);
        }

        self.revealed_count += 1;
        if self.values[index] == CellValue::Count(0) {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.config.safe_cells() {
            self.end_game(true);
        }
        Ok(Safe)
    }

    /// Opens the zero region connected to `start` and its numbered border.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit: VecDeque<_> = self.revealed.iter_neighbors(start).collect();
        log::trace!("Starting flood-fill from {:?}", start);

        while let Some(visit_coords) = to_visit.pop_front() {
            let index = visit_coords.to_nd_index();
            if self.revealed[index] || self.flagged[index] {
                continue;
            }

            let value = self.values[index];
            // cells next to a zero are never mines
            debug_assert!(!value.is_mine());
            self.revealed[index] = true;
            self.revealed_count += 1;
            log::trace!("Flood revealed {:?}, value {:?}", visit_coords, value);

            if value == CellValue::Count(0) {
                to_visit.extend(
                    self.revealed
                        .iter_neighbors(visit_coords)
                        .filter(|pos| !self.revealed[pos.to_nd_index()]),
                );
            }
        }
    }

    /// Marks every mine revealed for the end-of-game display.
    pub fn reveal_all_mines(&mut self) {
        for (index, value) in self.values.indexed_iter() {
            if value.is_mine() {
                self.revealed[index] = true;
            }
        }
    }

    /// Counts flagged cells, always `total_mines() - flags_left()`.
    pub fn flagged_count(&self) -> CellCount {
        self.flagged.iter().filter(|&&flagged| flagged).count() as CellCount
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won {
            BoardStatus::Won
        } else {
            BoardStatus::Lost
        };
        log::debug!(
            "Game ended: {:?}, {} cells revealed",
            self.status,
            self.revealed_count
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
