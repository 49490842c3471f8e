//! # Example: Rumor spreading
//!
//! Integrate the Ignorant/Spreader/Stifler rumor model over 30 days and
//! print the daily fractions.
//!
//! Equations:
//! dI/dt = -beta I S
//! dS/dt =  beta I S - gamma S (S + R)
//! dR/dt =  gamma S (S + R)
//!
//! Initial condition: (I, S, R) = (0.99, 0.01, 0.0)
//!
//! Run with `RUST_LOG=debug` to see solver statistics.

use rumor::prelude::*;

fn main() {
    env_logger::init();

    let config = SimulationConfig::builder().beta(0.5).gamma(0.1).build();

    match config.run() {
        Ok(trajectory) => {
            println!("{:>6} {:>10} {:>10} {:>10}", "day", "ignorant", "spreaders", "stiflers");
            // Grid holds 10 points per day; print one per day
            for (t, state) in trajectory.iter().step_by(10) {
                println!(
                    "{:>6.2} {:>10.6} {:>10.6} {:>10.6}",
                    t, state.ignorant, state.spreaders, state.stiflers
                );
            }

            if let Some((t, s)) = trajectory.peak_spreaders() {
                println!("Peak spreaders: {:.4} at day {:.2}", s, t);
            }
            if let Some(last) = trajectory.last() {
                println!("Never heard the rumor: {:.4}", last.ignorant);
            }
            println!(
                "Conservation error: {:.2e}",
                trajectory.max_conservation_error()
            );

            let stats = trajectory.stats();
            println!("Number of function evaluations: {}", stats.nfev);
            println!("Number of accepted steps: {}", stats.naccpt);
            println!("Number of rejected steps: {}", stats.nrejct);
        }
        Err(err) => eprintln!("Simulation failed: {}", err),
    }
}
