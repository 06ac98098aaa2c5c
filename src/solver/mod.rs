use crate::prelude::*;

use smallvec::SmallVec;

mod bfs;
pub use bfs::*;

/// Optimal solutions never need more than 14 quarter turns.
pub type Solution = SmallVec<[Move; 16]>;

pub trait Solver<C: CubeLike> {
    fn solve(&self, cube: &C) -> Solution;
}
