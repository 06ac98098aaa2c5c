use crate::cube::*;

use enum_iterator::Sequence;

/// One of the six quarter turns. Declaration order is the order moves are
/// tried in during search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence)]
pub enum Move {
    FrontClockwise,
    FrontCounterClockwise,
    DownClockwise,
    DownCounterClockwise,
    LeftClockwise,
    LeftCounterClockwise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Move {
    pub const COUNT: usize = 6;

    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all()
    }

    pub fn clockwise() -> impl Iterator<Item = Move> {
        Move::all().filter(|m| m.direction() == Direction::Clockwise)
    }

    pub fn new(face: Face, direction: Direction) -> Option<Move> {
        use Direction::*;

        let move_ = match (face, direction) {
            (Face::Front, Clockwise) => Move::FrontClockwise,
            (Face::Front, CounterClockwise) => Move::FrontCounterClockwise,
            (Face::Down, Clockwise) => Move::DownClockwise,
            (Face::Down, CounterClockwise) => Move::DownCounterClockwise,
            (Face::Left, Clockwise) => Move::LeftClockwise,
            (Face::Left, CounterClockwise) => Move::LeftCounterClockwise,
            (Face::Back | Face::Right | Face::Up, _) => return None,
        };
        Some(move_)
    }

    pub fn face(self) -> Face {
        match self {
            Move::FrontClockwise | Move::FrontCounterClockwise => Face::Front,
            Move::DownClockwise | Move::DownCounterClockwise => Face::Down,
            Move::LeftClockwise | Move::LeftCounterClockwise => Face::Left,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Move::FrontClockwise | Move::DownClockwise | Move::LeftClockwise => {
                Direction::Clockwise
            }
            Move::FrontCounterClockwise
            | Move::DownCounterClockwise
            | Move::LeftCounterClockwise => Direction::CounterClockwise,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Move> {
        Move::all().nth(index)
    }

    pub fn reverse(self) -> Move {
        match self {
            Move::FrontClockwise => Move::FrontCounterClockwise,
            Move::FrontCounterClockwise => Move::FrontClockwise,
            Move::DownClockwise => Move::DownCounterClockwise,
            Move::DownCounterClockwise => Move::DownClockwise,
            Move::LeftClockwise => Move::LeftCounterClockwise,
            Move::LeftCounterClockwise => Move::LeftClockwise,
        }
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match face_char {
            'F' | 'f' => Face::Front,
            'R' | 'r' => Face::Right,
            'U' | 'u' => Face::Up,
            'L' | 'l' => Face::Left,
            'B' | 'b' => Face::Back,
            'D' | 'd' => Face::Down,
            _ => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') => Direction::CounterClockwise,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} in move {}", c, s));
        }

        Move::new(face, direction)
            .ok_or_else(|| anyhow::anyhow!("Face {} cannot be turned", face_char))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.face().letter())?;
        if self.direction() == Direction::CounterClockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        use rand::Rng;

        Move::from_index(g.gen_range(0, Move::COUNT)).unwrap()
    }
}
