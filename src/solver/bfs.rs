use crate::prelude::*;

use std::collections::{
    hash_map::{Entry, HashMap},
    VecDeque,
};

/// Breadth-first search over cube states. Every move costs the same, so the
/// first solved state dequeued is a nearest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

/// How a visited state was first reached. `move_` is `None` only for the
/// start state.
struct Parent<C> {
    previous: C,
    move_: Option<Move>,
}

type Parents<C> = HashMap<C, Parent<C>, SlotBuildHasher>;

impl BreadthFirst {
    /// Returns `None` only if no solved state is reachable from `start`.
    pub fn search<C: CubeLike>(&self, start: &C) -> Option<Solution> {
        let begin = Instant::now();
        log::info!("Searching for shortest solution");

        let mut parents = Parents::default();
        parents.insert(
            start.clone(),
            Parent {
                previous: start.clone(),
                move_: None,
            },
        );

        let mut to_expand = VecDeque::new();
        to_expand.push_back((start.clone(), 0_usize));

        let mut depth = 0;
        let destination = loop {
            let (cube, distance) = to_expand.pop_front()?;
            if distance > depth {
                depth = distance;
                log::debug!(
                    "Expanding depth {}, {} states visited",
                    depth,
                    parents.len()
                );
            }

            if cube.is_solved() {
                break cube;
            }

            for m in Move::all() {
                let next = cube.clone().apply(m);
                if let Entry::Vacant(v) = parents.entry(next) {
                    to_expand.push_back((v.key().clone(), distance + 1));
                    v.insert(Parent {
                        previous: cube.clone(),
                        move_: Some(m),
                    });
                }
            }
        };

        let solution = reconstruct(&parents, start, destination);
        log::info!(
            "Found {} move solution, visited {} states, took {:?}",
            solution.len(),
            parents.len(),
            begin.elapsed()
        );
        Some(solution)
    }
}

fn reconstruct<C: CubeLike>(parents: &Parents<C>, start: &C, destination: C) -> Solution {
    let mut solution = Solution::new();
    let mut current = destination;

    while current != *start {
        let parent = match parents.get(&current) {
            Some(p) => p,
            None => panic!("Visited state has no recorded parent: {:?}", current),
        };
        let move_ = match parent.move_ {
            Some(m) => m,
            None => panic!("State other than the start has no move: {:?}", current),
        };
        solution.insert(0, move_);
        current = parent.previous.clone();
    }

    solution
}

impl<C: CubeLike> Solver<C> for BreadthFirst {
    fn solve(&self, cube: &C) -> Solution {
        match self.search(cube) {
            Some(solution) => solution,
            None => unreachable!("Every cube can be solved, but {:?} was not", cube),
        }
    }
}
