use crate::prelude::*;

lazy_static::lazy_static! {
    static ref MOVE_TABLE: MoveTable = MoveTable::build();
}

/// A clockwise quarter turn: the cubelet at `cycle[i]` moves to
/// `cycle[i + 1]`, and its facelet facing axis `a` ends up facing `axes[a]`.
struct Rotation {
    move_: Move,
    cycle: [Position; 4],
    axes: [Axis; 3],
}

const ROTATIONS: [Rotation; 3] = [
    Rotation {
        move_: Move::FrontClockwise,
        cycle: [
            Position::new(0, 0, 0),
            Position::new(0, 0, 1),
            Position::new(0, 1, 1),
            Position::new(0, 1, 0),
        ],
        axes: [Axis::X, Axis::Z, Axis::Y],
    },
    Rotation {
        move_: Move::DownClockwise,
        cycle: [
            Position::new(0, 0, 0),
            Position::new(0, 1, 0),
            Position::new(1, 1, 0),
            Position::new(1, 0, 0),
        ],
        axes: [Axis::Y, Axis::X, Axis::Z],
    },
    Rotation {
        move_: Move::LeftClockwise,
        cycle: [
            Position::new(0, 0, 0),
            Position::new(0, 0, 1),
            Position::new(1, 0, 1),
            Position::new(1, 0, 0),
        ],
        axes: [Axis::Z, Axis::Y, Axis::X],
    },
];

/// For every move, where each slot's facelet lands: after `m`, the facelet
/// in slot `i` is in `destinations[m][i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTable {
    destinations: [[Slot; NUM_SLOTS]; Move::COUNT],
}

impl MoveTable {
    /// The table shared by every `Cube`, built on first use.
    pub fn global() -> &'static MoveTable {
        &MOVE_TABLE
    }

    pub fn init() {
        lazy_static::initialize(&MOVE_TABLE);
    }

    pub fn build() -> MoveTable {
        let start = Instant::now();
        let identity: [Slot; NUM_SLOTS] = core::array::from_fn(Slot::from_index);
        let mut destinations = [identity; Move::COUNT];

        for rotation in &ROTATIONS {
            let table = &mut destinations[rotation.move_.index()];
            for (i, &from) in rotation.cycle.iter().enumerate() {
                let to = rotation.cycle[(i + 1) % rotation.cycle.len()];
                for axis in Axis::all() {
                    table[Slot::new(from, axis).index()] =
                        Slot::new(to, rotation.axes[axis.index()]);
                }
            }
        }

        for clockwise in Move::clockwise() {
            let forward = destinations[clockwise.index()];
            let inverse = &mut destinations[clockwise.reverse().index()];
            for slot in Slot::all() {
                inverse[forward[slot.index()].index()] = slot;
            }
        }

        log::debug!("Built move table, took {:?}", start.elapsed());
        MoveTable { destinations }
    }

    #[cfg(test)]
    pub fn destination(&self, move_: Move, slot: Slot) -> Slot {
        self.destinations[move_.index()][slot.index()]
    }

    pub fn permute<T: Copy>(&self, move_: Move, slots: &[T; NUM_SLOTS]) -> [T; NUM_SLOTS] {
        let mut result = *slots;
        for (from, to) in self.destinations[move_.index()].iter().enumerate() {
            result[to.index()] = slots[from];
        }
        result
    }
}
