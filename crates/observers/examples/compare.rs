//! Side-by-side comparisons of the Plumb root finders.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare --features plot -- trajectories
//! cargo run --example compare --features plot -- newton
//! cargo run --example compare --features plot -- errors
//! cargo run --example compare --features plot -- trace
//! RUST_LOG=plumb_solvers=trace cargo run --example compare --features plot -- errors
//! ```
//!
//! # Modes
//!
//! - **trajectories** — Solve x³ − x − 2 = 0 with all three methods and plot
//!   the raw iterates. Bisection uses both stopping rules.
//!
//! - **newton** — Run Newton's method from x₀ = 1 on three equations and print
//!   a report for each. No window is opened.
//!
//! - **errors** — Solve (x − 1)³ = 0, a triple root, and plot the increments
//!   of each method on a log₁₀ scale. Newton degrades to linear convergence
//!   here, which the slopes make visible.
//!
//! - **trace** — Iterate g(x) = x − (x² − 2x)/10 from a random x₀ in [1, 10)
//!   with a loose tolerance of 0.05, printing every iterate as it happens.

use std::error::Error;

use plumb_core::Problem;
use plumb_observers::{PlotObserver, Report, ShowConfig};
use plumb_solvers::{Action, Config, Event, HistoryMode, Method, RootSolver};
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "trajectories".into());
    match mode.as_str() {
        "trajectories" => trajectories(),
        "newton" => newton(),
        "errors" => errors(),
        "trace" => trace(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: compare [trajectories|newton|errors|trace]");
            std::process::exit(1);
        }
    }
}

// --- Trajectories ------------------------------------------------------------

/// Plot the iterates of all three methods on x³ − x − 2 = 0 (root ≈ 1.5214).
///
/// Fixed-point iteration uses g(x) = ∛(x + 2), a contraction near the root.
fn trajectories() -> Result<(), Box<dyn Error>> {
    let problem = Problem::new(|x| x.powi(3) - x - 2.0)
        .with_derivative(|x| 3.0 * x * x - 1.0)
        .with_map(|x| (x + 2.0).cbrt())
        .with_initial_guess(1.5)
        .with_bracket(1.0, 2.0);
    let solver = RootSolver::new(problem, Config::default().with_width_test());

    let bisection = solver.bisection(HistoryMode::Iterates)?;
    let fixed_point = solver.fixed_point(HistoryMode::Iterates)?;
    let newton = solver.newton(HistoryMode::Iterates)?;

    for solution in [&bisection, &fixed_point, &newton] {
        println!(
            "{}: {} after {} iterations",
            solution.method,
            solution
                .root()
                .map_or_else(|| "did not converge".to_owned(), |root| root.to_string()),
            solution.iters,
        );
    }

    PlotObserver::from_histories([
        (Method::Bisection.name(), &bisection.history),
        (Method::FixedPoint.name(), &fixed_point.history),
        (Method::Newton.name(), &newton.history),
    ])
    .show(
        ShowConfig::new()
            .title("Comparison of root-finding methods: x³ − x − 2 = 0")
            .legend()
            .x_label("Iteration")
            .y_label("Approximate root"),
    )?;

    Ok(())
}

// --- Newton ------------------------------------------------------------------

/// An equation for the Newton experiments.
struct Experiment {
    description: &'static str,
    f: fn(f64) -> f64,
    df: fn(f64) -> f64,
}

/// Run Newton's method from x₀ = 1 on three equations and print the reports.
fn newton() -> Result<(), Box<dyn Error>> {
    let experiments = [
        Experiment {
            description: "Solving x^2 - 2 = 0 (√2)",
            f: |x| x * x - 2.0,
            df: |x| 2.0 * x,
        },
        Experiment {
            description: "Solving e^x - 3x^2 = 0",
            f: |x| x.exp() - 3.0 * x * x,
            df: |x| x.exp() - 6.0 * x,
        },
        Experiment {
            description: "Solving sin(x) - 0.5 = 0",
            f: |x| x.sin() - 0.5,
            df: f64::cos,
        },
    ];

    let x0 = 1.0;
    let config = Config::new(1e-6, 1000)?;

    for experiment in experiments {
        let problem = Problem::new(experiment.f)
            .with_derivative(experiment.df)
            .with_initial_guess(x0);
        let result = RootSolver::new(problem, config).newton(HistoryMode::Increments);

        let report = Report::new(experiment.description, Method::Newton, &result)
            .with_initial_guess(x0);
        println!("{report}");
    }

    Ok(())
}

// --- Errors ------------------------------------------------------------------

/// Plot the increments of each method on (x − 1)³ = 0 on a log scale.
///
/// The relaxed fixed-point map g(x) = x − 0.1·(x − 1)³ and the bracket [0, 2]
/// make this a hard case for every method. Bisection lands on the root at its
/// first midpoint, the relaxed map crawls toward it, and Newton's derivative
/// vanishes before its steps get below tolerance. A failed run still plots the
/// partial history its error carries.
fn errors() -> Result<(), Box<dyn Error>> {
    let problem = Problem::new(|x| (x - 1.0).powi(3))
        .with_derivative(|x| 3.0 * (x - 1.0).powi(2))
        .with_relaxation(-0.1)
        .with_initial_guess(2.0)
        .with_bracket(0.0, 2.0);
    let solver = RootSolver::new(problem, Config::default());

    let runs = [
        (Method::Bisection, solver.bisection(HistoryMode::Increments)),
        (Method::FixedPoint, solver.fixed_point(HistoryMode::Increments)),
        (Method::Newton, solver.newton(HistoryMode::Increments)),
    ];

    let mut plot = PlotObserver::<3>::new(runs.each_ref().map(|(method, _)| method.name()));
    for (trace, (method, result)) in runs.iter().enumerate() {
        let description = format!("(x - 1)^3 = 0, {method}");
        println!("{}", Report::new(description, *method, result).with_initial_guess(2.0));

        let history = match result {
            Ok(solution) => &solution.history,
            Err(error) => match error.history() {
                Some(history) => history,
                None => continue,
            },
        };
        for (i, increment) in history.values().iter().enumerate() {
            let mut traces = [None; 3];
            traces[trace] = Some(*increment);
            #[allow(clippy::cast_precision_loss)]
            plot.record(i as f64, traces);
        }
    }

    plot.show(
        ShowConfig::new()
            .title("Convergence comparison: (x − 1)³ = 0")
            .legend()
            .log_y()
            .x_label("Iteration")
            .y_label("Increment"),
    )?;

    Ok(())
}

// --- Trace -------------------------------------------------------------------

/// Print each fixed-point iterate toward the root x = 2 of x² − 2x.
///
/// The map is the relaxed residual map with α = −0.1, which equals
/// g(x) = x − (x² − 2x)/10.
fn trace() -> Result<(), Box<dyn Error>> {
    let x0 = rand::rng().random_range(1.0..10.0);
    let tol = 0.05;

    let problem = Problem::new(|x| x * x - 2.0 * x)
        .with_relaxation(-0.1)
        .with_initial_guess(x0);
    let solver = RootSolver::new(problem, Config::new(tol, 1000)?);

    println!("0-th iteration: x = {x0}");
    let solution = solver.fixed_point_observed(HistoryMode::Iterates, |event: &Event| {
        println!("{}-th iteration: x = {}", event.iter(), event.x());
        None::<Action>
    })?;

    match solution.root() {
        Some(root) => println!(
            "It took {} iterations to find root {root} in precision of {tol}",
            solution.iters
        ),
        None => println!("Did not converge after {} iterations", solution.iters),
    }

    Ok(())
}
