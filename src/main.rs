mod config;
mod cube;
mod r#move;
mod scramble;
mod solver;

mod prelude;
use prelude::*;


#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use rand::{rngs::StdRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    simple_logger::SimpleLogger::new()
        .with_level(config.log_level)
        .env()
        .init()?;

    MoveTable::init();

    let cube = Cube::solved();
    println!("Initial cube:\n{}\n", cube);

    let (cube, moves) = match config.scramble {
        ScrambleSource::Given(moves) => (cube.apply_all(moves.iter().copied()), moves),
        ScrambleSource::Random { length, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let length = length.pick(&mut rng);
            scramble(&mut rng, cube, length)
        }
    };
    log::info!("Scramble: {}", Move::format_sequence(&moves));
    println!("Jumbled up cube:\n{}\n", cube);

    let solution = BreadthFirst.solve(&cube);
    let cube = cube.apply_all(solution.iter().copied());
    println!("Solved cube:\n{}\n", cube);
    if !cube.is_solved() {
        anyhow::bail!("Replaying {} did not solve the cube", Move::format_sequence(&solution));
    }

    println!("Solution: {}", Move::format_sequence(&solution));
    println!("Moves to solve: {}", solution.len());

    Ok(())
}
