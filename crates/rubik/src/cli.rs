use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, bail};
use rubik_prefs::{Preferences, SimPrefs};
use rubik_view::CubeSimulation;

use crate::animator::TerminalAnimator;

/// Rubik's cube simulator and layer-by-layer solver
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Preferences file to layer on top of the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Print every move and the cube after it, pausing between moves.
    #[arg(short, long, global = true)]
    pub animate: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply face notation such as `R U R' U'` to a solved cube.
    Exec {
        /// Moves to apply.
        #[arg(required = true)]
        notation: Vec<String>,
    },
    /// Scramble a cube and print it.
    Scramble {
        /// Random seed. A fresh one is chosen if omitted.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of random moves, overriding the preferences.
        #[arg(short, long)]
        moves: Option<u32>,
    },
    /// Scramble a cube, solve it, and print the solution.
    Solve {
        /// Random seed for the scramble.
        #[arg(short, long, conflicts_with = "scramble")]
        seed: Option<u64>,
        /// Face notation to scramble with instead of random moves.
        #[arg(long)]
        scramble: Option<String>,
        /// Print the moves of the solution.
        #[arg(short = 'l', long)]
        list: bool,
    },
    /// Repeatedly scramble and solve cubes, reporting any failure.
    Stress {
        /// Number of cubes to solve.
        #[arg(short, long, default_value_t = 1000)]
        count: u64,
        /// Seed of the first scramble. Each cube uses the next seed.
        #[arg(short, long, default_value_t = 0)]
        first_seed: u64,
    },
    /// Print the preferences in effect as YAML.
    Prefs {
        /// Print the path of the user preferences file instead.
        #[arg(long)]
        path: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let animate = args.animate;

    match args.subcommand {
        Subcommand::Exec { notation } => {
            let mut sim = new_sim(prefs.sim.clone(), animate);
            sim.execute(&notation.join(" "));
            println!("{}", sim.log().to_notation());
            print!("{}", sim.state());
            Ok(())
        }

        Subcommand::Scramble { seed, moves } => {
            let mut sim = new_sim(scramble_prefs(&prefs.sim, moves), animate);
            let seed = scramble(&mut sim, seed);
            println!("seed {seed}");
            print!("{}", sim.state());
            Ok(())
        }

        Subcommand::Solve {
            seed,
            scramble: notation,
            list,
        } => {
            let mut sim = new_sim(prefs.sim.clone(), animate);
            match notation {
                Some(notation) => {
                    let was_animating = sim.animate();
                    sim.set_animate(false);
                    sim.execute(&notation);
                    sim.clear_log();
                    sim.set_animate(was_animating);
                }
                None => {
                    let seed = scramble(&mut sim, seed);
                    println!("seed {seed}");
                }
            }
            print!("{}", sim.state());
            println!();

            let stats = rubik_solver::solve(&mut sim)?;
            for phase in &stats.phases {
                println!("{:>22}  {:>3}", phase.label, phase.moves);
            }
            println!("{:>22}  {:>3}", "total", stats.moves());
            if list {
                println!("{}", sim.log().to_notation());
            }
            Ok(())
        }

        Subcommand::Stress { count, first_seed } => {
            let mut sim = CubeSimulation::new(prefs.sim.clone());
            let mut attempts = 0_u64;
            let mut failures = 0_u64;
            let mut total_moves = 0;
            for seed in first_seed..first_seed.saturating_add(count) {
                attempts += 1;
                sim.reset();
                sim.randomize_with_seed(seed);
                match rubik_solver::solve(&mut sim) {
                    Ok(stats) if sim.is_solved() => total_moves += stats.moves(),
                    Ok(_) => {
                        failures += 1;
                        log::error!("seed {seed}: solver finished but the cube is not solved");
                    }
                    Err(e) => {
                        failures += 1;
                        log::error!("seed {seed}: {e}");
                    }
                }
            }
            let solved = attempts - failures;
            println!("solved {solved} of {attempts} cubes");
            if solved > 0 {
                println!("average {:.1} moves", total_moves as f64 / solved as f64);
            }
            if failures > 0 {
                bail!("{failures} cubes were not solved");
            }
            Ok(())
        }

        Subcommand::Prefs { path } => {
            if path {
                println!("{}", rubik_prefs::prefs_file_path()?.display());
            } else {
                print!("{}", prefs.to_yaml()?);
            }
            Ok(())
        }
    }
}

/// Scrambles the cube, returning the seed used.
fn scramble(sim: &mut CubeSimulation, seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => {
            sim.randomize_with_seed(seed);
            seed
        }
        None => sim.randomize(),
    }
}

/// Constructs a simulation, printing each move if `animate` is set.
fn new_sim(prefs: SimPrefs, animate: bool) -> CubeSimulation {
    let duration = Duration::from_millis(prefs.animation_ms);
    let mut sim = CubeSimulation::new(prefs);
    if animate {
        sim.set_animator(TerminalAnimator::new(duration));
        sim.set_animate(true);
    }
    sim
}

fn scramble_prefs(prefs: &SimPrefs, moves: Option<u32>) -> SimPrefs {
    SimPrefs {
        scramble_moves: moves.unwrap_or(prefs.scramble_moves),
        ..prefs.clone()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_scramble_moves_keeps_animation() {
        let args = Args::parse_from(["rubik", "--animate", "scramble", "--moves", "5"]);
        let Subcommand::Scramble { moves, .. } = args.subcommand else {
            panic!("expected scramble, got {:?}", args.subcommand);
        };
        let prefs = scramble_prefs(&SimPrefs::default(), moves);
        assert_eq!(5, prefs.scramble_moves);

        let sim = new_sim(prefs, args.animate);
        assert!(sim.animate());
        assert_eq!(5, sim.prefs().scramble_moves);
    }

    #[test]
    fn test_scramble_defaults_to_prefs() {
        let prefs = scramble_prefs(&SimPrefs::default(), None);
        assert_eq!(SimPrefs::default(), prefs);
        assert!(!new_sim(prefs, false).animate());
    }
}
