use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continue,
    Won,
    Lost,
}

/// Result of a reveal or chord.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    /// Cells that went from hidden to revealed, in no meaningful order.
    pub newly_revealed: BTreeSet<Coord2>,
}

impl RevealResult {
    fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::Continue,
            newly_revealed: BTreeSet::new(),
        }
    }

    pub fn has_update(&self) -> bool {
        !self.newly_revealed.is_empty()
    }
}

impl Board {
    /// Game phase derived from the counters and the triggered mine.
    pub fn state(&self) -> GameState {
        if self.triggered_mine().is_some() {
            GameState::Lost
        } else if self.revealed_count() == self.config().safe_cells() {
            GameState::Won
        } else if self.revealed_count() == 0 {
            GameState::NotStarted
        } else {
            GameState::Playing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.cell(coords).state != CellState::Hidden {
            return Ok(RevealResult::unchanged());
        }

        if self.is_first_click_pending() {
            self.place_mines(coords)?;
        }

        let mut newly_revealed = BTreeSet::new();
        let outcome = if self.cell(coords).has_mine {
            self.reveal_mines(&[coords], &mut newly_revealed)
        } else {
            let mut queued = self.queued_mask();
            self.flood_fill(coords, &mut queued, &mut newly_revealed);
            self.outcome_after_fill()
        };

        Ok(RevealResult {
            outcome,
            newly_revealed,
        })
    }

    /// Reveals the hidden neighbors of a numbered cell whose flags already
    /// account for all of its mines.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.cell(coords);
        if cell.state != CellState::Revealed
            || cell.adjacent_mine_count == 0
            || cell.adjacent_mine_count != self.count_flagged_neighbors(coords)
        {
            return Ok(RevealResult::unchanged());
        }

        let targets: Vec<Coord2> = self
            .iter_neighbors(coords)
            .filter(|&pos| self.cell(pos).state == CellState::Hidden)
            .collect();
        let mines: Vec<Coord2> = targets
            .iter()
            .copied()
            .filter(|&pos| self.cell(pos).has_mine)
            .collect();

        let mut newly_revealed = BTreeSet::new();
        let outcome = if mines.is_empty() {
            // one mask for all targets, a cell queued by an earlier fill is already revealed
            let mut queued = self.queued_mask();
            for target in targets {
                self.flood_fill(target, &mut queued, &mut newly_revealed);
            }
            self.outcome_after_fill()
        } else {
            self.reveal_mines(&mines, &mut newly_revealed)
        };

        Ok(RevealResult {
            outcome,
            newly_revealed,
        })
    }

    fn reveal_mines(
        &mut self,
        mines: &[Coord2],
        newly_revealed: &mut BTreeSet<Coord2>,
    ) -> RevealOutcome {
        for &mine in mines {
            self.cell_mut(mine).state = CellState::Revealed;
            newly_revealed.insert(mine);
        }
        if let Some(&first) = mines.first() {
            self.set_triggered_mine(first);
            log::debug!("Game lost at {:?}", first);
        }
        RevealOutcome::Lost
    }

    fn queued_mask(&self) -> Array2<bool> {
        Array2::default(self.config().size().to_nd_index())
    }

    /// Reveals `start` and, through zero-count cells, everything connected to
    /// it. Uses a work list with a queued mask so each cell is visited once.
    fn flood_fill(
        &mut self,
        start: Coord2,
        queued: &mut Array2<bool>,
        newly_revealed: &mut BTreeSet<Coord2>,
    ) {
        let mut to_visit = VecDeque::from([start]);
        queued[start.to_nd_index()] = true;
        let before = newly_revealed.len();

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.cell_mut(visit_coords);
            if cell.state != CellState::Hidden {
                continue;
            }
            debug_assert!(!cell.has_mine, "flood fill reached a mine");

            cell.state = CellState::Revealed;
            let adjacent_mines = cell.adjacent_mine_count;
            self.record_revealed();
            newly_revealed.insert(visit_coords);

            if adjacent_mines == 0 {
                for pos in self.iter_neighbors(visit_coords) {
                    let seen = &mut queued[pos.to_nd_index()];
                    if !*seen && self.cell(pos).state == CellState::Hidden {
                        *seen = true;
                        to_visit.push_back(pos);
                    }
                }
            }
        }

        log::trace!(
            "Flood fill from {:?} revealed {} cells",
            start,
            newly_revealed.len() - before
        );
    }

    fn outcome_after_fill(&self) -> RevealOutcome {
        if self.revealed_count() == self.config().safe_cells() {
            log::debug!("Game won after revealing {} cells", self.revealed_count());
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        }
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self.cell(pos).state == CellState::Flagged)
            .count() as u8
    }
}
