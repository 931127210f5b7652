//! Translation from raw board indices to display coordinates.

use super::super::{Coordinates, GameError, Position};
use tracing::instrument;

/// Converts a raw board index into 1-based row and column.
///
/// `None` stands for "no move played" (the game-start snapshot) and is
/// rejected like any index outside 0-8.
#[instrument]
pub fn index_to_row_col(index: Option<usize>) -> Result<Coordinates, GameError> {
    index
        .and_then(Position::from_index)
        .map(Position::coordinates)
        .ok_or(GameError::OutOfRange {
            index,
            len: Position::ALL.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(
            index_to_row_col(Some(4)),
            Ok(Coordinates { row: 2, col: 2 })
        );
    }

    #[test]
    fn test_index_zero_is_row_one_col_one() {
        assert_eq!(
            index_to_row_col(Some(0)),
            Ok(Coordinates { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_all_indices() {
        for index in 0..9 {
            let coords = index_to_row_col(Some(index)).unwrap();
            assert_eq!((coords.row - 1) * 3 + (coords.col - 1), index);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            index_to_row_col(Some(9)),
            Err(GameError::OutOfRange {
                index: Some(9),
                len: 9
            })
        );
        assert_eq!(
            index_to_row_col(None),
            Err(GameError::OutOfRange { index: None, len: 9 })
        );
    }
}
