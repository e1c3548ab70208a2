use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A composable timed unit of work, generic over the effect payload.
///
/// Replaces the source's nested run/wait/sequence/repeat closures with an
/// explicit variant tree that the scheduler interprets iteratively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action<E> {
    /// Fire an effect the moment it is due; zero duration.
    Run(E),
    /// Advance the due-time by `duration` seconds without side effect.
    Wait(f64),
    /// Execute children strictly in order; total duration is the sum of
    /// the children's durations.
    Sequence(Vec<Action<E>>),
    /// Re-execute `action` `count` times in immediate succession.
    /// A count of 0 is a no-op.
    Repeat { action: Box<Action<E>>, count: u32 },
}

impl<E> Action<E> {
    /// Immediate effect.
    #[must_use]
    pub const fn run(effect: E) -> Self {
        Self::Run(effect)
    }

    /// Delay of `duration` seconds (>= 0).
    #[must_use]
    pub fn wait(duration: f64) -> Self {
        debug_assert!(duration >= 0.0 && duration.is_finite(), "wait: {duration}");
        Self::Wait(duration)
    }

    /// Children executed strictly in order.
    #[must_use]
    pub const fn sequence(children: Vec<Self>) -> Self {
        Self::Sequence(children)
    }

    /// `action` executed `count` times back to back.
    #[must_use]
    pub fn repeat(action: Self, count: u32) -> Self {
        Self::Repeat {
            action: Box::new(action),
            count,
        }
    }

    /// Total scheduled duration of the tree.
    ///
    /// Walks with an explicit stack; nesting depth never touches the call
    /// stack.
    #[must_use]
    pub fn duration(&self) -> f64 {
        let mut total = 0.0;
        let mut stack = vec![(self, 1.0)];
        while let Some((action, multiplier)) = stack.pop() {
            match action {
                Self::Run(_) => {}
                Self::Wait(duration) => total += multiplier * duration,
                Self::Sequence(children) => {
                    for child in children {
                        stack.push((child, multiplier));
                    }
                }
                Self::Repeat { action, count } => {
                    stack.push((action.as_ref(), multiplier * f64::from(*count)));
                }
            }
        }
        total
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_and_wait_durations() {
        assert_eq!(Action::run(()).duration(), 0.0);
        assert_eq!(Action::<()>::wait(2.5).duration(), 2.5);
    }

    #[test]
    fn sequence_duration_sums_children() {
        let action = Action::sequence(vec![
            Action::run(()),
            Action::wait(1.0),
            Action::wait(0.5),
        ]);
        assert!((action.duration() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn repeat_duration_multiplies() {
        let action = Action::repeat(
            Action::sequence(vec![Action::run(()), Action::wait(1.0)]),
            100,
        );
        assert!((action.duration() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn repeat_zero_has_zero_duration() {
        let action = Action::repeat(Action::<()>::wait(10.0), 0);
        assert_eq!(action.duration(), 0.0);
    }

    #[test]
    fn deeply_nested_duration_does_not_recurse() {
        let mut action = Action::<()>::wait(1.0);
        for _ in 0..500 {
            action = Action::repeat(Action::sequence(vec![action]), 1);
        }
        assert!((action.duration() - 1.0).abs() < 1e-12);
    }
}
