use ndarray::Array2;

use crate::*;

/// Grid of cells for a single game.
///
/// Mines are placed lazily on the first reveal, so a fresh board holds no
/// solution at all. After placement only per-cell state changes until the game
/// ends.
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    seed: u64,
    start_tile: StartTile,
    revealed_count: CellCount,
    flagged_count: CellCount,
    first_click_pending: bool,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            seed,
            start_tile: StartTile::default(),
            revealed_count: 0,
            flagged_count: 0,
            first_click_pending: true,
            triggered_mine: None,
        }
    }

    pub fn with_start_tile(mut self, start_tile: StartTile) -> Self {
        self.start_tile = start_tile;
        self
    }

    /// Discards the current game and starts over with the same configuration.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(self.config, seed).with_start_tile(self.start_tile);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn start_tile(&self) -> StartTile {
        self.start_tile
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mine counter as shown to the player.
    pub fn flags_left(&self) -> CellCount {
        self.config.mines() - self.flagged_count
    }

    pub fn is_first_click_pending(&self) -> bool {
        self.first_click_pending
    }

    /// The mine that lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.config.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// The up to 8 cells sharing an edge or corner with `coords`.
    pub fn neighbors(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    /// Places mines with the board's seed and start tile policy, keeping
    /// `excluded` clear.
    pub fn place_mines(&mut self, excluded: Coord2) -> Result<()> {
        let excluded = self.validate_coords(excluded)?;
        let generator = RandomMinefieldGenerator::new(self.seed, excluded, self.start_tile);
        self.place_mines_with(generator)
    }

    pub fn place_mines_with<G: MinefieldGenerator>(&mut self, generator: G) -> Result<()> {
        if !self.first_click_pending {
            return Err(GameError::AlreadyInitialized);
        }

        let layout = generator.generate(self.config);
        if layout.size() != self.config.size() {
            return Err(GameError::InvalidConfiguration(
                "mine layout does not match board size",
            ));
        }
        if layout.mine_count() != self.config.mines() {
            return Err(GameError::InvalidConfiguration(
                "mine layout does not match mine count",
            ));
        }

        for coords in iter_coords(self.config.size()) {
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.has_mine = layout.contains_mine(coords);
            cell.adjacent_mine_count = layout.adjacent_mine_count(coords);
        }
        self.first_click_pending = false;
        Ok(())
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        match self.cell(coords).state {
            Hidden if self.flagged_count >= self.config.mines() => {
                Err(GameError::InvalidOperation)
            }
            Hidden => {
                self.cell_mut(coords).state = Flagged;
                self.flagged_count += 1;
                Ok(MarkOutcome::Changed)
            }
            Flagged => Ok(MarkOutcome::NoChange),
            Revealed => Err(GameError::InvalidOperation),
        }
    }

    pub fn unflag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        match self.cell(coords).state {
            Flagged => {
                self.cell_mut(coords).state = Hidden;
                self.flagged_count -= 1;
                Ok(MarkOutcome::Changed)
            }
            Hidden => Ok(MarkOutcome::NoChange),
            Revealed => Err(GameError::InvalidOperation),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        match self.cell(coords).state {
            CellState::Flagged => self.unflag(coords),
            _ => self.flag(coords),
        }
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    /// Views of every cell, indexed by `[row, col]`.
    pub fn snapshot(&self) -> Array2<CellView> {
        let mut views = Array2::default(self.config.size().to_nd_index());
        for coords in iter_coords(self.config.size()) {
            views[coords.to_nd_index()] = self.view_at(coords);
        }
        views
    }

    fn view_at(&self, coords: Coord2) -> CellView {
        let cell = self.cell(coords);

        match self.state() {
            GameState::NotStarted | GameState::Playing => PlayCell::of(cell).into(),
            GameState::Won => match cell.state {
                _ if cell.has_mine => CellView::Flagged,
                CellState::Revealed => CellView::Revealed(cell.adjacent_mine_count),
                CellState::Hidden => CellView::Hidden,
                CellState::Flagged => CellView::IncorrectFlag,
            },
            GameState::Lost => {
                if self.triggered_mine == Some(coords) {
                    return CellView::Exploded;
                }
                match (cell.state, cell.has_mine) {
                    (CellState::Flagged, true) => CellView::Flagged,
                    (CellState::Flagged, false) => CellView::IncorrectFlag,
                    (CellState::Revealed, true) => CellView::Exploded,
                    (CellState::Revealed, false) => CellView::Revealed(cell.adjacent_mine_count),
                    (CellState::Hidden, true) => CellView::Mine,
                    (CellState::Hidden, false) => CellView::Hidden,
                }
            }
        }
    }

    pub(crate) fn cell(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.config.size())
    }

    pub(crate) fn record_revealed(&mut self) {
        self.revealed_count += 1;
    }

    pub(crate) fn set_triggered_mine(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
    }

    pub(crate) fn check_not_finished(&self) -> Result<()> {
        if self.state().is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
