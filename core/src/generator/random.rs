use alloc::vec::Vec;
use core::iter;

use rand::{SeedableRng, rngs::SmallRng, seq::index};

use super::*;

/// Generation strategy that keeps the starting tile safe and, when it fits, zero, but other than that is purely
/// random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    start: Coord2,
    start_tile: StartTile,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, start: Coord2, start_tile: StartTile) -> Self {
        Self {
            seed,
            start,
            start_tile,
        }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use StartTile::*;

        let size = config.size();
        let total_cells = config.total_cells();
        let start_zone: Vec<Coord2> = iter::once(self.start)
            .chain(NeighborIter::new(self.start, size))
            .collect();
        // at most 9 cells
        let zone_len = start_zone.len() as CellCount;

        let actual_start_tile = match self.start_tile {
            SimpleSafe => SimpleSafe,
            AlwaysZero if config.mines() + zone_len > total_cells => {
                log::warn!("Cannot make start tile zero, fallback to simple safe");
                SimpleSafe
            }
            AlwaysZero => AlwaysZero,
        };
        let excluded = match actual_start_tile {
            SimpleSafe => &start_zone[..1],
            AlwaysZero => &start_zone[..],
        };

        let candidates: Vec<Coord2> = iter_coords(size)
            .filter(|coords| !excluded.contains(coords))
            .collect();
        let amount = usize::from(config.mines()).min(candidates.len());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut layout = MineLayout::empty(size);
        for i in index::sample(&mut rng, candidates.len(), amount) {
            layout.insert(candidates[i]);
        }

        // double check mine count
        if layout.mine_count() != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines()
            );
        }
        log::debug!(
            "Placed {} mines around start {:?} using {:?}",
            layout.mine_count(),
            self.start,
            actual_start_tile
        );
        layout
    }
}
