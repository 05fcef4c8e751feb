use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// A fixed layout generates itself, regardless of where the first click lands.
impl MinefieldGenerator for MineLayout {
    fn generate(self, _config: GameConfig) -> MineLayout {
        self
    }
}

/// How much of the first click's surroundings is kept free of mines. The
/// clicked cell itself is always safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTile {
    SimpleSafe,
    AlwaysZero,
}

impl Default for StartTile {
    fn default() -> Self {
        Self::AlwaysZero
    }
}
