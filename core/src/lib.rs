use core::ops::{Index, IndexMut};
use ndarray::Array2;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use player::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
pub mod notation;
mod player;
mod tile;
mod types;

/// Rectangular playing field: a grid of [`Tile`]s indexed by `(row, column)`.
///
/// The shape is fixed at construction; afterwards only the per-tile hazard
/// and visited flags mutate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Creates a `rows` x `columns` board of blank tiles. Both dimensions
    /// are clamped into `1..=MAX_DIM` so that every reachable position has a
    /// notation form, which in turn keeps the engine's position writes
    /// infallible.
    pub fn new(rows: Coord, columns: Coord) -> Self {
        let rows = rows.clamp(1, MAX_DIM);
        let columns = columns.clamp(1, MAX_DIM);
        Self {
            tiles: Array2::default((rows, columns).to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_tiles(&self) -> CellCount {
        self.tiles.len().try_into().unwrap()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.tiles
            .iter()
            .filter(|tile| tile.is_hazard)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    /// Fails with `OutOfRange` when either index is outside the board.
    pub fn get_tile(&self, row: Coord, column: Coord) -> Result<&Tile> {
        self.validate_coords((row, column))
            .map(|coords| &self.tiles[coords.to_nd_index()])
    }

    /// Marks `count` distinct tiles as hazards, drawn uniformly without
    /// replacement over every cell except `exclude` (the player's cell at
    /// placement time).
    ///
    /// Fails with `InvalidArgument` when `count` does not fit on the board,
    /// and with `OutOfRange` when `exclude` is not a board cell. Each draw
    /// picks among the remaining free cells directly, so placement
    /// terminates no matter what the generator produces.
    pub fn place_hazards(
        &mut self,
        count: CellCount,
        exclude: Coord2,
        rng: &mut impl Rng,
    ) -> Result<()> {
        let total = self.total_tiles();
        if count >= total {
            return Err(GameError::InvalidArgument);
        }
        let exclude = self.validate_coords(exclude)?;
        let excluded = (usize::from(exclude.0), usize::from(exclude.1));

        // one cell stays reserved for the player, so count < total always fits
        let mut free = total - 1;
        let mut placed = 0;
        while placed < count {
            let mut place: CellCount = rng.random_range(0..free);
            for (i, (index, tile)) in self.tiles.indexed_iter_mut().enumerate() {
                let i = i as CellCount;
                if tile.is_hazard || index == excluded {
                    place += 1;
                }
                if i == place {
                    tile.is_hazard = true;
                    placed += 1;
                    free -= 1;
                    break;
                }
            }
        }

        log::debug!(
            "placed {} hazards on a {}x{} board",
            placed,
            self.rows(),
            self.columns()
        );
        Ok(())
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, (row, column): Coord2) -> &Self::Output {
        &self.tiles[(row as usize, column as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (row, column): Coord2) -> &mut Self::Output {
        &mut self.tiles[(row as usize, column as usize)]
    }
}
