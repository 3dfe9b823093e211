/// Watches a root finder iterate by iterate.
///
/// A solver calls `observe` once per completed iteration with an event `E`
/// describing the step it just took (the new estimate, the value it came from,
/// and method-specific data such as the residual or derivative). Returning
/// `Some(action)` asks the solver to act on it, for example to stop before
/// its tolerance is met; `None` lets the iteration continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which is the usual way
/// to collect per-iteration data in a test or a driver. The unit type `()` is
/// the observer used when nobody is watching.
///
/// # Example
///
/// ```
/// use plumb_core::Observer;
///
/// // Stop once two consecutive estimates agree to within 1e-3.
/// let mut previous = None;
/// let mut close_enough = |x: &f64| {
///     let stop = previous.is_some_and(|p: f64| (x - p).abs() < 1e-3);
///     previous = Some(*x);
///     stop.then_some("stop")
/// };
///
/// assert_eq!(close_enough.observe(&1.0), None);
/// assert_eq!(close_enough.observe(&1.0005), Some("stop"));
/// ```
pub trait Observer<E, A> {
    /// Receives the event for one iteration and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// The observer for unwatched runs: never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: usize) -> Option<usize> {
        (1..=events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &usize| (*event == 4).then_some(Action::Stop);
        assert_eq!(drive(observer, 10), Some(4));
    }

    #[test]
    fn closure_observer_keeps_state() {
        let mut seen = Vec::new();
        let observer = |event: &usize| {
            seen.push(*event);
            None::<Action>
        };
        drive(observer, 3);
        assert_eq!(seen, [1, 2, 3]);
    }
}
