use crate::prelude::*;

use rand::Rng;

impl ScrambleLength {
    pub fn pick(self, rng: &mut impl Rng) -> usize {
        match self {
            ScrambleLength::Fixed(length) => length,
            ScrambleLength::Below(max) => rng.gen_range(0, max),
        }
    }
}

/// Applies `length` uniformly picked raw move ids to `cube`, returning the
/// scrambled cube and the moves applied.
pub fn scramble(rng: &mut impl Rng, cube: Cube, length: usize) -> (Cube, Vec<Move>) {
    let mut moves = Vec::with_capacity(length);
    let cube = (0..length).fold(cube, |cube, _| {
        let index = rng.gen_range(0, Move::COUNT);
        moves.extend(Move::from_index(index));
        cube.apply_index(index)
    });
    (cube, moves)
}
