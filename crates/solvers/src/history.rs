/// Selects what a [`History`] records for each iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HistoryMode {
    /// The value computed by each iteration: bisection midpoints, or
    /// fixed-point and Newton iterates.
    ///
    /// Suited to trajectory plots.
    #[default]
    Iterates,

    /// The absolute change between each computed value and its predecessor.
    ///
    /// For bisection the first predecessor is the left bracket endpoint.
    /// Suited to log-scale error plots.
    Increments,
}

/// Per-iteration record of a solver run.
///
/// Holds exactly one value per completed iteration, so `len()` always equals
/// the iteration count reported by the run. Fixed-point and Newton runs in
/// [`HistoryMode::Iterates`] also keep the initial guess, which
/// [`History::trajectory`] yields first.
///
/// A history is append-only while its run is in progress and immutable after.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    mode: HistoryMode,
    initial: Option<f64>,
    values: Vec<f64>,
}

impl History {
    /// Creates an empty history without an initial value.
    pub(crate) fn new(mode: HistoryMode) -> Self {
        Self {
            mode,
            initial: None,
            values: Vec::new(),
        }
    }

    /// Creates an empty history for an iteration started at `x0`.
    ///
    /// `x0` is kept only in [`HistoryMode::Iterates`]; an increment has no
    /// meaning before the first step.
    pub(crate) fn starting_at(mode: HistoryMode, x0: f64) -> Self {
        let initial = match mode {
            HistoryMode::Iterates => Some(x0),
            HistoryMode::Increments => None,
        };
        Self {
            mode,
            initial,
            values: Vec::new(),
        }
    }

    /// Appends the entry for an iteration that moved from `previous` to `next`.
    pub(crate) fn record(&mut self, previous: f64, next: f64) {
        let value = match self.mode {
            HistoryMode::Iterates => next,
            HistoryMode::Increments => (next - previous).abs(),
        };
        self.values.push(value);
    }

    /// Returns what this history records.
    #[must_use]
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Returns the initial guess, if this history keeps one.
    #[must_use]
    pub fn initial(&self) -> Option<f64> {
        self.initial
    }

    /// Returns one value per completed iteration.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the entry of the last completed iteration.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Iterates over the initial guess (if kept) followed by every entry.
    pub fn trajectory(&self) -> impl Iterator<Item = f64> + '_ {
        self.initial.into_iter().chain(self.values.iter().copied())
    }

    /// Returns `[index, value]` pairs of the trajectory, ready for plotting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.trajectory()
            .enumerate()
            .map(|(i, value)| [i as f64, value])
            .collect()
    }

    /// Consumes the history, returning the per-iteration values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn iterates_mode_records_next_value() {
        let mut history = History::new(HistoryMode::Iterates);
        history.record(1.0, 1.5);
        history.record(1.5, 1.25);

        assert_eq!(history.values(), [1.5, 1.25]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.initial(), None);
    }

    #[test]
    fn increments_mode_records_absolute_change() {
        let mut history = History::new(HistoryMode::Increments);
        history.record(1.0, 1.5);
        history.record(1.5, 1.25);

        assert_relative_eq!(history.values()[0], 0.5);
        assert_relative_eq!(history.values()[1], 0.25);
        assert_eq!(history.last(), Some(0.25));
    }

    #[test]
    fn starting_point_only_kept_for_iterates() {
        let iterates = History::starting_at(HistoryMode::Iterates, 2.0);
        let increments = History::starting_at(HistoryMode::Increments, 2.0);

        assert_eq!(iterates.initial(), Some(2.0));
        assert_eq!(increments.initial(), None);
        assert!(iterates.is_empty());
    }

    #[test]
    fn into_values_drops_initial_guess() {
        let mut history = History::starting_at(HistoryMode::Iterates, 1.0);
        history.record(1.0, 1.5);
        history.record(1.5, 1.4);

        assert_eq!(history.into_values(), [1.5, 1.4]);
    }

    #[test]
    fn trajectory_prepends_initial_guess() {
        let mut history = History::starting_at(HistoryMode::Iterates, 1.0);
        history.record(1.0, 1.5);
        history.record(1.5, 1.4);

        let trajectory: Vec<f64> = history.trajectory().collect();
        assert_eq!(trajectory, [1.0, 1.5, 1.4]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.points(), [[0.0, 1.0], [1.0, 1.5], [2.0, 1.4]]);
    }
}
