use crate::{Coord, Coord2, GameError, MAX_DIM, Result};

/// Converts `(row, column)` into notation form, e.g. row 0 column 0 is `"A1"`.
/// The letter is the column (A-H), the digit is the row plus one (1-8).
pub fn to_notation(row: Coord, column: Coord) -> Result<String> {
    if row >= MAX_DIM || column >= MAX_DIM {
        return Err(GameError::OutOfRange);
    }

    let file = (b'A' + column) as char;
    let rank = (b'1' + row) as char;
    Ok(format!("{file}{rank}"))
}

/// Parses notation back into `(row, column)`. The letter is matched
/// case-insensitively; anything that is not exactly two characters inside
/// A-H / 1-8 is rejected.
pub fn from_notation(text: &str) -> Result<Coord2> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(GameError::InvalidFormat);
    };

    let file = file.to_ascii_uppercase();
    let last_file = (b'A' + MAX_DIM - 1) as char;
    let last_rank = (b'1' + MAX_DIM - 1) as char;
    if !('A'..=last_file).contains(&file) || !('1'..=last_rank).contains(&rank) {
        return Err(GameError::InvalidFormat);
    }

    Ok((rank as u8 - b'1', file as u8 - b'A'))
}
