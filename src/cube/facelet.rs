use crate::prelude::*;

use enum_iterator::Sequence;

/// 8 cubelets with 3 facelets each.
pub const NUM_SLOTS: usize = 24;

/// The direction a facelet faces: X is front/back, Y is left/right, Z is
/// down/up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> impl Iterator<Item = Axis> {
        enum_iterator::all()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
}

impl Color {
    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Color {
        match bits {
            0 => Color::Red,
            1 => Color::Green,
            2 => Color::Blue,
            3 => Color::Cyan,
            4 => Color::Magenta,
            5 => Color::Yellow,
            _ => unreachable!("facelets only hold valid colors, got {}", bits),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Cyan => 'C',
            Color::Magenta => 'M',
            Color::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Cubelet coordinates, each 0 or 1: x is front(0)/back(1), y is
/// left(0)/right(1), z is down(0)/up(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
    z: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8, z: u8) -> Position {
        assert!(x < 2 && y < 2 && z < 2);
        Position { x, y, z }
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..2).flat_map(|x| (0..2).flat_map(move |y| (0..2).map(move |z| Position::new(x, y, z))))
    }

    pub fn index(self) -> usize {
        usize::from(self.x << 2 | self.y << 1 | self.z)
    }

    pub fn coord(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn face(self, axis: Axis) -> Face {
        match (axis, self.coord(axis)) {
            (Axis::X, 0) => Face::Front,
            (Axis::X, _) => Face::Back,
            (Axis::Y, 0) => Face::Left,
            (Axis::Y, _) => Face::Right,
            (Axis::Z, 0) => Face::Down,
            (Axis::Z, _) => Face::Up,
        }
    }

    /// The position on the same `axis` face with the other coordinates zeroed.
    pub fn reference(self, axis: Axis) -> Position {
        let keep = |a: Axis| if a == axis { self.coord(a) } else { 0 };
        Position::new(keep(Axis::X), keep(Axis::Y), keep(Axis::Z))
    }
}

/// A fixed (position, axis) location for one facelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    pub fn new(position: Position, axis: Axis) -> Slot {
        Slot((position.index() * 3 + axis.index()) as u8)
    }

    pub fn from_index(index: usize) -> Slot {
        assert!(index < NUM_SLOTS, "slot {} out of range", index);
        Slot(index as u8)
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..NUM_SLOTS).map(Slot::from_index)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn position(self) -> Position {
        let p = self.0 / 3;
        Position::new(p >> 2 & 1, p >> 1 & 1, p & 1)
    }

    pub fn axis(self) -> Axis {
        match self.0 % 3 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }
}

/// `(F)LD` is the front-facing slot of the front-left-down cubelet.
impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let position = self.position();
        for axis in Axis::all() {
            let letter = position.face(axis).letter();
            if axis == self.axis() {
                write!(f, "({})", letter)?;
            } else {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// A facelet's showing color packed with the two colors that identify its
/// cubelet: `primary << 6 | a << 3 | b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facelet(u16);

impl Facelet {
    pub fn new(primary: Color, neighbors: [Color; 2]) -> Facelet {
        Facelet(primary.bits() << 6 | neighbors[0].bits() << 3 | neighbors[1].bits())
    }

    pub fn color(self) -> Color {
        Color::from_bits(self.0 >> 6 & 0x7)
    }

    pub fn neighbors(self) -> [Color; 2] {
        [
            Color::from_bits(self.0 >> 3 & 0x7),
            Color::from_bits(self.0 & 0x7),
        ]
    }

    pub fn id(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b] = self.neighbors();
        write!(f, "{}{}{}", self.color(), a, b)
    }
}
