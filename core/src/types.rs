/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for hazard counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Largest board dimension representable in the two-character position
/// notation (columns A-H, rows 1-8).
pub const MAX_DIM: Coord = 8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
