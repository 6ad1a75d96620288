use once_cell::sync::Lazy;

use super::{Direction, Square, DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};

/// All eight line directions, orthogonals first.
pub(crate) const ALL_DIRECTIONS: [Direction; 8] = [
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
];

fn targets_from(offsets: &[Direction]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&dir| from.offset(dir, 1))
            .collect()
    })
}

/// On-board knight destinations per square index.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| targets_from(&KNIGHT_OFFSETS));

/// On-board king steps per square index.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| targets_from(&ALL_DIRECTIONS));
