use crate::prelude::*;

/// A cube as the facelet held in each of its 24 slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCube {
    slots: [Facelet; NUM_SLOTS],
}

impl super::CubeLike for SlotCube {
    fn solved() -> SlotCube {
        let mut slots = [Facelet::new(Color::Red, [Color::Red, Color::Red]); NUM_SLOTS];
        for position in Position::all() {
            let colors = [Axis::X, Axis::Y, Axis::Z].map(|axis| position.face(axis).color());
            for axis in Axis::all() {
                let f = axis.index();
                slots[Slot::new(position, axis).index()] =
                    Facelet::new(colors[f], [colors[(f + 1) % 3], colors[(f + 2) % 3]]);
            }
        }
        SlotCube { slots }
    }

    fn apply(self, move_: Move) -> SlotCube {
        self.apply_with(MoveTable::global(), move_)
    }

    fn is_solved(&self) -> bool {
        Slot::all().all(|slot| {
            let reference = Slot::new(slot.position().reference(slot.axis()), slot.axis());
            self.get(slot).color() == self.get(reference).color()
        })
    }
}

impl SlotCube {
    pub fn apply_with(self, table: &MoveTable, move_: Move) -> SlotCube {
        SlotCube {
            slots: table.permute(move_, &self.slots),
        }
    }

    /// Applies a raw move identifier; identifiers that name no move leave the
    /// cube as it is.
    pub fn apply_index(self, index: usize) -> SlotCube {
        match Move::from_index(index) {
            Some(move_) => self.apply(move_),
            None => self,
        }
    }

    pub fn get(&self, slot: Slot) -> Facelet {
        self.slots[slot.index()]
    }

    #[cfg(test)]
    pub fn facelets(&self) -> impl Iterator<Item = Facelet> + '_ {
        self.slots.iter().copied()
    }
}

// Only slot contents go into the hash, in slot order, so `SlotHasher` sees one
// value per slot.
impl core::hash::Hash for SlotCube {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        for facelet in &self.slots {
            state.write_u16(facelet.id());
        }
    }
}

impl std::fmt::Display for SlotCube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for slot in Slot::all() {
            writeln!(f, "[{}] = {}", slot, self.get(slot))?;
        }
        write!(f, "{}", if self.is_solved() { "SOLVED" } else { "UNSOLVED" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_facelets(cube: &Cube) -> Vec<Facelet> {
        let mut facelets = cube.facelets().collect::<Vec<_>>();
        facelets.sort();
        facelets
    }

    #[test]
    fn solved_front_left_down() {
        let cube = Cube::solved();
        let corner = Position::new(0, 0, 0);
        let at = |axis| cube.get(Slot::new(corner, axis)).to_string();
        assert_eq!(at(Axis::X), "RBM");
        assert_eq!(at(Axis::Y), "BMR");
        assert_eq!(at(Axis::Z), "MRB");
    }

    #[test]
    fn solved_facelets_are_unique() {
        let mut facelets = sorted_facelets(&Cube::solved());
        facelets.dedup();
        assert_eq!(facelets.len(), NUM_SLOTS);
    }

    #[test]
    fn every_single_move_unsolves() {
        for m in Move::all() {
            assert!(!Cube::solved().apply(m).is_solved(), "{}", m);
        }
    }

    #[test]
    fn apply_moves_contents_to_destination() {
        let table = MoveTable::global();
        let cube = cube_with_moves("D L'");
        let turned = cube.apply(Move::FrontClockwise);
        for slot in Slot::all() {
            assert_eq!(
                turned.get(table.destination(Move::FrontClockwise, slot)),
                cube.get(slot)
            );
        }
    }

    #[test]
    fn explicit_table_matches_shared_table() {
        let table = MoveTable::build();
        let cube = cube_with_moves("F L D'");
        for m in Move::all() {
            assert_eq!(cube.apply_with(&table, m), cube.apply(m));
        }
    }

    #[test]
    fn out_of_range_move_is_ignored() {
        let cube = cube_with_moves("F D");
        assert_eq!(cube.apply_index(Move::COUNT), cube);
        assert_eq!(cube.apply_index(usize::MAX), cube);
    }

    #[test]
    fn raw_move_matches_move() {
        let cube = cube_with_moves("L");
        for m in Move::all() {
            assert_eq!(cube.apply_index(m.index()), cube.apply(m));
        }
    }

    #[test]
    fn solved_ignores_neighbor_colors() {
        // Both show red on the front face but belong to different cubelets.
        let a = Slot::new(Position::new(0, 0, 0), Axis::X);
        let b = Slot::new(Position::new(0, 1, 0), Axis::X);
        let mut cube = Cube::solved();
        cube.slots.swap(a.index(), b.index());

        assert_ne!(cube, Cube::solved());
        assert!(cube.is_solved());
    }

    #[test]
    fn display_lists_slots() {
        let rendered = Cube::solved().to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), NUM_SLOTS + 1);
        assert_eq!(lines[0], "[(F)LD] = RBM");
        assert_eq!(lines[NUM_SLOTS], "SOLVED");
        assert!(cube_with_moves("F").to_string().ends_with("UNSOLVED"));
    }

    #[quickcheck]
    fn reverse_undoes_move(moves: Vec<Move>, m: Move) -> bool {
        let cube = Cube::solved().apply_all(moves);
        cube.apply(m).apply(m.reverse()) == cube
    }

    #[quickcheck]
    fn four_turns_are_identity(moves: Vec<Move>, m: Move) -> bool {
        let cube = Cube::solved().apply_all(moves);
        cube.apply_all([m; 4]) == cube
    }

    #[quickcheck]
    fn facelets_are_conserved(moves: Vec<Move>) -> bool {
        sorted_facelets(&Cube::solved().apply_all(moves)) == sorted_facelets(&Cube::solved())
    }

    #[quickcheck]
    fn reversed_sequence_solves(moves: Vec<Move>) -> bool {
        let undo = moves.iter().rev().map(|m| m.reverse()).collect::<Vec<_>>();
        Cube::solved().apply_all(moves).apply_all(undo).is_solved()
    }
}
