use serde::{Deserialize, Serialize};

/// Player-controlled state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Cell storage owned by [`crate::Board`], never handed out directly.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Cell {
    pub has_mine: bool,
    pub adjacent_mine_count: u8,
    pub state: CellState,
}

/// What a player may see of a cell while the game is still running.
///
/// Has no mine variant: mines only show up in [`CellView`] once the game has
/// ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayCell {
    Hidden,
    Revealed(u8),
    Flagged,
}

impl PlayCell {
    pub(crate) fn of(cell: Cell) -> Self {
        match cell.state {
            CellState::Hidden => Self::Hidden,
            CellState::Revealed => Self::Revealed(cell.adjacent_mine_count),
            CellState::Flagged => Self::Flagged,
        }
    }
}

/// Read-only view of a cell as handed to a UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Flagged,
    /// Mine that was not flagged, only shown after a loss.
    Mine,
    /// The mine whose reveal lost the game.
    Exploded,
    /// Flag placed on a safe cell, only shown after a loss.
    IncorrectFlag,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

impl From<PlayCell> for CellView {
    fn from(other: PlayCell) -> Self {
        match other {
            PlayCell::Hidden => CellView::Hidden,
            PlayCell::Revealed(count) => CellView::Revealed(count),
            PlayCell::Flagged => CellView::Flagged,
        }
    }
}
