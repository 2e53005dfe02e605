//! transposon-sim: run a seeded transposable element simulation and
//! print a summary.
//!
//! ```text
//! transposon-sim --repr linked --len 5000 --steps 20000 --seed 7
//! RUST_LOG=debug transposon-sim -n 20 -s 10 --render
//! ```

use std::process::ExitCode;

use transposon_sim::cli::{parse_args, USAGE};
use transposon_sim::{Genome, Simulation};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let mut sim = match Simulation::new(args.config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let report = sim.run();
    println!("{report}");
    if args.render {
        println!("{}", sim.genome().render());
    }
    ExitCode::SUCCESS
}
