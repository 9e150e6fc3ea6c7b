use serde::{Deserialize, Serialize};

/// Single board cell. Owned exclusively by [`Board`](crate::Board); the
/// engine flips `is_visited`, hazard placement flips `is_hazard`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub is_hazard: bool,
    pub is_visited: bool,
}

impl Tile {
    pub const fn new(is_hazard: bool, is_visited: bool) -> Self {
        Self {
            is_hazard,
            is_visited,
        }
    }
}
