//! Plotting observer for visualizing root-finder convergence.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use plumb_core::Observer;
use plumb_solvers::{Event, History};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Error comparison").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            x_label: None,
            y_label: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values, such as an exact zero increment, are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    ///
    /// With [`log_y`][Self::log_y] enabled the label is prefixed with `log₁₀`.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to pass [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely; return `None` in a trace slot to skip that trace for the event.
///
/// Root-finder [`Event`]s implement `Plottable<2>`, plotting the computed
/// value and the increment against the iteration number.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<2> for Event {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter() as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(Event::x(self)), Some(self.increment())]
    }
}

/// An observer that collects trace data and displays it via egui.
///
/// The const generic `N` is the number of traces. Data arrives in one of
/// three ways:
///
/// - **Live** — pass `&mut PlotObserver<2>` as the observer of a
///   `*_observed` solver call; each [`Event`] records its value and increment.
/// - **From histories** — build with [`PlotObserver::from_histories`] after
///   the runs complete, one trace per named [`History`].
/// - **Manual** — call [`record`][PlotObserver::record] from a closure.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let newton = solver.newton(HistoryMode::Increments)?;
/// let bisection = solver.bisection(HistoryMode::Increments)?;
///
/// PlotObserver::from_histories([
///     ("Newton", &newton.history),
///     ("Bisection", &bisection.history),
/// ])
/// .show(ShowConfig::new().title("Error comparison").legend().log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Creates a `PlotObserver` with one trace per named history.
    ///
    /// Each trace plots the history's trajectory against its index, so an
    /// iterates history kept with its initial guess starts at index 0 and an
    /// increments history starts at the first iteration's increment.
    pub fn from_histories(histories: [(&str, &History); N]) -> Self {
        Self {
            names: histories.map(|(name, _)| name.to_owned()),
            data: histories.map(|(_, history)| history.points()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();
        let y_label = match (config.log_y, config.y_label) {
            (true, Some(label)) => Some(format!("log₁₀ {label}")),
            (true, None) => Some("log₁₀".to_owned()),
            (false, label) => label,
        };

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                    x_label: config.x_label,
                    y_label,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        to_log10(points).collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

/// Maps points to `[x, log₁₀ y]`, dropping those with non-positive `y`.
fn to_log10(points: &[[f64; 2]]) -> impl Iterator<Item = [f64; 2]> + '_ {
    points
        .iter()
        .filter(|p| p[1] > 0.0)
        .map(|p| [p[0], p[1].log10()])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use plumb_core::Problem;
    use plumb_solvers::{Config, HistoryMode, RootSolver};

    #[derive(Clone, Copy)]
    struct Sample {
        x: Option<f64>,
        a: Option<f64>,
        b: Option<f64>,
    }

    impl Plottable<2> for Sample {
        fn x(&self) -> Option<f64> {
            self.x
        }

        fn traces(&self) -> [Option<f64>; 2] {
            [self.a, self.b]
        }
    }

    fn points(obs: &PlotObserver<2>, trace: usize) -> &[[f64; 2]] {
        &obs.data[trace]
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed(obs: &mut PlotObserver<2>, sample: Sample) {
        let _: Option<()> = obs.observe(&sample);
    }

    fn sqrt_two_solver() -> RootSolver<'static> {
        let problem = Problem::new(|x| x * x - 2.0)
            .with_derivative(|x| 2.0 * x)
            .with_initial_guess(1.0)
            .with_bracket(1.0, 2.0);
        RootSolver::new(problem, Config::default())
    }

    #[test]
    fn skips_all_traces_when_x_is_none() {
        let mut obs = PlotObserver::new(["a", "b"]);
        feed(
            &mut obs,
            Sample {
                x: None,
                a: Some(1.0),
                b: Some(2.0),
            },
        );
        assert!(points(&obs, 0).is_empty());
        assert!(points(&obs, 1).is_empty());
    }

    #[test]
    fn skips_only_affected_trace_when_y_is_none() {
        let mut obs = PlotObserver::new(["a", "b"]);
        feed(
            &mut obs,
            Sample {
                x: Some(1.0),
                a: None,
                b: Some(3.0),
            },
        );
        assert!(points(&obs, 0).is_empty());
        assert_eq!(points(&obs, 1), [[1.0, 3.0]]);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        let action: Option<()> = obs.observe(&Sample {
            x: Some(1.0),
            a: None,
            b: None,
        });
        assert!(action.is_none());
    }

    #[test]
    fn records_live_solver_events() {
        let solver = sqrt_two_solver();
        let mut obs = PlotObserver::<2>::new(["x", "Increment"]);

        let solution = solver
            .newton_observed(HistoryMode::Iterates, &mut obs)
            .unwrap();

        assert_eq!(points(&obs, 0).len(), solution.iters);
        assert_eq!(points(&obs, 0)[0], [1.0, 1.5]);
        assert_relative_eq!(points(&obs, 1)[0][1], 0.5);
    }

    #[test]
    fn builds_one_trace_per_history() {
        let solver = sqrt_two_solver();
        let newton = solver.newton(HistoryMode::Iterates).unwrap();
        let bisection = solver.bisection(HistoryMode::Increments).unwrap();

        let obs = PlotObserver::from_histories([
            ("Newton", &newton.history),
            ("Bisection", &bisection.history),
        ]);

        assert_eq!(obs.names, ["Newton", "Bisection"]);
        // Newton keeps its initial guess at index 0.
        assert_eq!(points(&obs, 0).len(), newton.iters + 1);
        assert_eq!(points(&obs, 0)[0], [0.0, 1.0]);
        assert_eq!(points(&obs, 1).len(), bisection.iters);
        assert_eq!(points(&obs, 1)[0], [0.0, 0.5]);
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let points = [[0.0, 100.0], [1.0, 0.0], [2.0, -1.0], [3.0, 0.01]];
        let logged: Vec<[f64; 2]> = to_log10(&points).collect();

        assert_eq!(logged.len(), 2);
        assert_relative_eq!(logged[0][1], 2.0);
        assert_relative_eq!(logged[1][1], -2.0);
    }
}
