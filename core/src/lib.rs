#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Validated board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.mines)
    }
}

impl GameConfig {
    const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(GameError::InvalidConfiguration(
                "board needs at least one row and one column",
            ));
        }
        if mines < 1 {
            return Err(GameError::InvalidConfiguration("at least one mine is required"));
        }
        if mines >= mult(width, height) {
            return Err(GameError::InvalidConfiguration(
                "mine count must leave at least one safe cell",
            ));
        }
        Ok(Self::new_unchecked(width, height, mines))
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// Grid bounds as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Classic presets, `width x height / mines`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 9x9 with 10 mines
    Beginner,
    /// 16x16 with 40 mines
    Intermediate,
    /// 30x16 with 99 mines
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Self::Expert => GameConfig::new_unchecked(30, 16, 99),
        }
    }
}

/// Positions of every mine on a board of a given size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    size: Coord2,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

/// Serialized form of a layout, the stored count is recomputed from the mask.
#[derive(Deserialize)]
struct RawMineLayout {
    size: Coord2,
    mine_mask: Array2<bool>,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let (rows, cols) = raw.size;
        if raw.mine_mask.dim() != (usize::from(rows), usize::from(cols)) {
            return Err(GameError::InvalidConfiguration(
                "mine mask does not match layout size",
            ));
        }

        let mut layout = Self::empty(raw.size);
        for coords in iter_coords(raw.size) {
            if raw.mine_mask[coords.to_nd_index()] {
                layout.insert(coords);
            }
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            size,
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            layout.insert(coords);
        }

        Ok(layout)
    }

    /// Marks `coords` as mined, returns false if it already was.
    pub(crate) fn insert(&mut self, coords: Coord2) -> bool {
        if self[coords] {
            return false;
        }
        self[coords] = true;
        self.mine_count += 1;
        true
    }

    /// Grid bounds as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        NeighborIter::new(coords, self.size)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert!(matches!(
            GameConfig::new(0, 5, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(5, 0, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn config_rejects_bad_mine_counts() {
        assert!(matches!(
            GameConfig::new(3, 3, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn max_sized_board_does_not_overflow_counts() {
        let config = GameConfig::new(255, 255, 1).unwrap();

        assert_eq!(config.total_cells(), 65025);
        assert_eq!(config.safe_cells(), 65024);
    }

    #[test]
    fn presets_are_valid_configs() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Expert,
        ] {
            let preset = difficulty.config();
            let checked = GameConfig::new(preset.width(), preset.height(), preset.mines());
            assert_eq!(checked, Ok(preset));
        }
        assert_eq!(Difficulty::Expert.config().size(), (16, 30));
    }

    #[test]
    fn layout_deduplicates_and_checks_bounds() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((1, 2)));
        assert_eq!(layout.adjacent_mine_count((0, 1)), 2);
        assert_eq!(
            MineLayout::from_mine_coords((2, 3), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn deserialized_config_is_validated() {
        let too_many = serde_json::from_str::<GameConfig>(r#"{"width":3,"height":3,"mines":20}"#);
        assert!(too_many.is_err());
        let no_rows = serde_json::from_str::<GameConfig>(r#"{"width":3,"height":0,"mines":1}"#);
        assert!(no_rows.is_err());

        let json = serde_json::to_string(&Difficulty::Expert.config()).unwrap();
        let config: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, Difficulty::Expert.config());
    }

    #[test]
    fn deserialized_layout_recounts_mines() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2)]).unwrap();
        let mut value = serde_json::to_value(&layout).unwrap();
        value["mine_count"] = serde_json::Value::from(5);

        let restored: MineLayout = serde_json::from_value(value).unwrap();

        assert_eq!(restored.mine_count(), 2);
        assert_eq!(restored, layout);
    }

    #[test]
    fn deserialized_layout_checks_mask_shape() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        let mut value = serde_json::to_value(&layout).unwrap();
        value["size"] = serde_json::to_value((3u8, 3u8)).unwrap();

        assert!(serde_json::from_value::<MineLayout>(value).is_err());
    }
}
