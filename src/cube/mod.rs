use crate::prelude::*;

mod facelet;
pub use facelet::{Axis, Color, Facelet, Position, Slot, NUM_SLOTS};

mod hash;
pub use hash::SlotBuildHasher;

mod move_table;
pub use move_table::MoveTable;

mod slot_cube;
pub use slot_cube::SlotCube as Cube;

/// What a solver needs from a cube: the solved configuration, moves, and a
/// solved check. Equality and hashing must agree so states can key a map.
pub trait CubeLike: Sized + Clone + core::fmt::Debug + Eq + core::hash::Hash {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;
    fn is_solved(&self) -> bool;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Down,
    Up,
}

impl Face {
    #[cfg(test)]
    pub fn axis(self) -> Axis {
        match self {
            Face::Front | Face::Back => Axis::X,
            Face::Left | Face::Right => Axis::Y,
            Face::Down | Face::Up => Axis::Z,
        }
    }

    /// Color of this face on a solved cube.
    pub fn color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Green,
            Face::Left => Color::Blue,
            Face::Right => Color::Cyan,
            Face::Down => Color::Magenta,
            Face::Up => Color::Yellow,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Down => 'D',
            Face::Up => 'U',
        }
    }

    #[cfg(test)]
    pub fn same_axis(a: Face, b: Face) -> bool {
        a.axis() == b.axis()
    }
}
