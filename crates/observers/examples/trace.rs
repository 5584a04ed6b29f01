//! Prints what the quadrature rules and root finders do on small problems.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace
//! cargo run --example trace -- integrate
//! cargo run --example trace -- solve
//! cargo run --example trace -- solve 25
//! ```
//!
//! # Modes
//!
//! - **integrate**: integrates y = x on 0, 1, ..., 12 with every rule.
//!   The exact area is 72.
//!
//! - **solve [max_iters]**: finds the root of 2eˣ + x − 4 on \[0, 1\] with
//!   every method and prints each iteration. A small iteration budget shows
//!   how a search that runs out is reported.
//!
//! With no mode, both run.

use std::error::Error;

use quadroot_core::Observer;
use quadroot_observers::{History, Stall};
use quadroot_quadrature::{Area, Rule, integrate as integrate_samples};
use quadroot_roots::{Action, Config, Event, Method, Status, solve as solve_root};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        None => {
            integrate()?;
            solve(1_000)
        }
        Some("integrate") => integrate(),
        Some("solve") => {
            let max_iters = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<usize>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid iteration budget, expected a count, e.g. 25");
                    std::process::exit(1);
                })
                .unwrap_or(1_000);
            solve(max_iters)
        }
        Some(other) => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: trace [integrate|solve [max_iters]]");
            std::process::exit(1);
        }
    }
}

// --- Integrate ---------------------------------------------------------------

fn integrate() -> Result<(), Box<dyn Error>> {
    let x: Vec<f64> = (0..=12).map(f64::from).collect();

    println!("y = x on 0..=12 (exact area 72)");
    for rule in Rule::ALL {
        let name = format!("{rule:?}");
        match integrate_samples(rule, &x, &x) {
            Ok(Area::Total(value)) => println!("  {name:<16} {value:>10.4}"),
            Ok(Area::Split(split)) => println!(
                "  {name:<16} {:>10.4}  (upper {:.4}, lower {:.4})",
                split.total(),
                split.upper,
                split.lower
            ),
            // 12 subintervals is not a multiple of 3
            Err(err) => println!("  {name:<16} {err}"),
        }
    }
    println!();

    Ok(())
}

// --- Solve -------------------------------------------------------------------

fn solve(max_iters: usize) -> Result<(), Box<dyn Error>> {
    let f = |x: f64| 2.0 * x.exp() + x - 4.0;
    let config = Config::new(max_iters, 1e-8)?;

    println!("2e^x + x - 4 on [0, 1], tol 1e-8, max_iters {max_iters}");
    for method in Method::ALL {
        let mut history = History::new();
        let mut stall = Stall::new(50);

        let solution = solve_root(method, f, [0.0, 1.0], &config, |event: &Event| {
            println!(
                "  {method:?} #{:<3} x = {:<20.15} f(x) = {:+.3e}",
                event.iter,
                event.x,
                event.residual
            );
            Observer::<Event, Action>::observe(&mut history, event);
            Observer::<Event, Action>::observe(&mut stall, event)
        })?;

        match solution.status {
            Status::Converged => println!(
                "  {method:?}: converged to {:.10} in {} iterations",
                solution.x, solution.iters
            ),
            Status::MaxIters => eprintln!(
                "  warning: {method:?} used all {} iterations; best effort x = {:.10}, f(x) = {:+.3e}",
                solution.iters, solution.x, solution.residual
            ),
            Status::StoppedByObserver => eprintln!(
                "  warning: {method:?} stalled after {} iterations; best recorded {:?}",
                solution.iters,
                history.best()
            ),
        }
        println!();
    }

    Ok(())
}
