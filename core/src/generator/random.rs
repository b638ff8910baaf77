use alloc::vec::Vec;

use super::*;

/// Uniformly random placement outside the 3x3 safety zone around the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig, anchor: Coord2) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;
        let size = config.size;
        if !in_bounds(anchor, size) {
            return Err(GameError::OutOfBounds);
        }

        let (rows, columns) = size;
        let mut candidates: Vec<Coord2> = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .filter(|&coords| distance(coords, anchor) > 1)
            .collect();

        let available = candidates.len() as CellCount;
        if available < config.mines {
            log::warn!(
                "Cannot place {} mines around {:?}, only {} cells outside the safety zone",
                config.mines,
                anchor,
                available
            );
            return Err(GameError::InsufficientSpace {
                available,
                requested: config.mines,
            });
        }

        // partial Fisher-Yates: the first `mines` candidates end up as a uniform sample
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mines = usize::from(config.mines);
        for i in 0..mines {
            let j = rng.random_range(i..candidates.len());
            candidates.swap(i, j);
        }

        let layout = MineLayout::from_mine_coords(size, &candidates[..mines])?;
        log::debug!(
            "Placed {} mines on a {}x{} board, anchor {:?}",
            layout.mine_count(),
            rows,
            columns,
            anchor
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_places_mines_in_safety_zone() {
        let config = GameConfig::new(10, 10, 10).unwrap();
        for seed in 0..200 {
            for anchor in [(0, 0), (5, 5), (9, 9), (0, 7)] {
                let layout = RandomMinefieldGenerator::new(seed)
                    .generate(config, anchor)
                    .unwrap();

                assert_eq!(layout.mine_count(), 10);
                assert!(!layout.contains_mine(anchor));
                for pos in NeighborIter::new(anchor, config.size) {
                    assert!(!layout.contains_mine(pos), "seed {seed} anchor {anchor:?}");
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::INTERMEDIATE;
        let a = RandomMinefieldGenerator::new(42).generate(config, (3, 4)).unwrap();
        let b = RandomMinefieldGenerator::new(42).generate(config, (3, 4)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn fills_every_cell_outside_zone_when_exactly_enough_room() {
        // 4x4 with a corner anchor excludes 4 cells, leaving 12
        let config = GameConfig::new(4, 4, 12).unwrap();
        let layout = RandomMinefieldGenerator::new(7).generate(config, (0, 0)).unwrap();

        assert_eq!(layout.mine_count(), 12);
        for pos in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(!layout.contains_mine(pos));
        }
    }

    #[test]
    fn rejects_layout_that_does_not_fit_outside_zone() {
        let config = GameConfig::new(3, 3, 1).unwrap();

        assert_eq!(
            RandomMinefieldGenerator::new(0).generate(config, (1, 1)),
            Err(GameError::InsufficientSpace {
                available: 0,
                requested: 1
            })
        );
    }

    #[test]
    fn rejects_anchor_outside_grid() {
        let config = GameConfig::BEGINNER;

        assert_eq!(
            RandomMinefieldGenerator::new(0).generate(config, (9, 0)),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn every_candidate_cell_gets_picked_across_seeds() {
        // 1x5 strip, anchor at the left end, so cells 2..5 are candidates
        let config = GameConfig::new(1, 5, 1).unwrap();
        let mut hits = [0u32; 5];
        for seed in 0..300 {
            let layout = RandomMinefieldGenerator::new(seed).generate(config, (0, 0)).unwrap();
            for column in 0..5 {
                if layout.contains_mine((0, column)) {
                    hits[usize::from(column)] += 1;
                }
            }
        }

        assert_eq!(hits[0], 0);
        assert_eq!(hits[1], 0);
        assert!(hits[2..].iter().all(|&count| count > 50), "{hits:?}");
    }
}
