//! Ordered sequence of steps with a clamped cursor

use thiserror::Error;

/// Misuse of a [`Stepper`]; these point at a bug in the caller, not at user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepperError {
    #[error("a stepper needs at least one step")]
    NoSteps,
    #[error("step {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}

/// Tracks which of an ordered list of steps is active.
///
/// The stepper only knows positions. Whether "next" on the last step means
/// submitting the form is up to the owner.
#[derive(Debug, Clone)]
pub struct Stepper<S> {
    steps: Vec<S>,
    current: usize,
}

impl<S> Stepper<S> {
    pub fn new(steps: Vec<S>) -> Result<Self, StepperError> {
        if steps.is_empty() {
            tracing::warn!("refusing to build a stepper without steps");
            return Err(StepperError::NoSteps);
        }
        Ok(Self { steps, current: 0 })
    }

    /// Move forward; stays put on the last step
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.steps.len() - 1);
        tracing::debug!(step = self.current, "stepper next");
    }

    /// Move backward; stays put on the first step
    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
        tracing::debug!(step = self.current, "stepper back");
    }

    /// Jump to any step, e.g. from a clickable progress bar
    pub fn go_to(&mut self, index: usize) -> Result<(), StepperError> {
        if index >= self.steps.len() {
            return Err(StepperError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.current = index;
        tracing::debug!(step = index, "stepper jump");
        Ok(())
    }

    /// Jump to the first step matching `predicate`; stays put when none does
    pub fn go_to_first(&mut self, predicate: impl Fn(&S) -> bool) -> Option<usize> {
        let index = self.steps.iter().position(predicate)?;
        self.current = index;
        tracing::debug!(step = index, "stepper jump");
        Some(index)
    }

    pub fn current(&self) -> &S {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three() -> Stepper<&'static str> {
        Stepper::new(vec!["account", "personal", "address"]).unwrap()
    }

    #[test]
    fn test_empty_steps_rejected() {
        let result = Stepper::<&str>::new(vec![]);
        assert_eq!(result.unwrap_err(), StepperError::NoSteps);
    }

    #[test]
    fn test_starts_at_first_step() {
        let stepper = three();
        assert_eq!(stepper.current_index(), 0);
        assert_eq!(*stepper.current(), "account");
        assert!(stepper.is_first());
        assert!(!stepper.is_last());
    }

    #[test]
    fn test_next_clamps_at_last_step() {
        let mut stepper = three();
        for _ in 0..stepper.len() {
            stepper.next();
        }
        assert_eq!(stepper.current_index(), 2);
        assert!(stepper.is_last());
    }

    #[test]
    fn test_back_clamps_at_first_step() {
        let mut stepper = three();
        stepper.back();
        assert_eq!(stepper.current_index(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_keeps_index() {
        let mut stepper = three();
        stepper.next();
        let err = stepper.go_to(3).unwrap_err();
        assert_eq!(err, StepperError::OutOfRange { index: 3, len: 3 });
        assert_eq!(stepper.current_index(), 1);
        assert_eq!(err.to_string(), "step 3 is out of range (0..3)");
    }

    #[test]
    fn test_navigation_scenario() {
        let mut stepper = three();
        stepper.next();
        assert_eq!(stepper.current_index(), 1);
        stepper.go_to(0).unwrap();
        assert_eq!(stepper.current_index(), 0);
        stepper.next();
        stepper.next();
        stepper.next();
        assert_eq!(stepper.current_index(), 2);
        assert_eq!(*stepper.current(), "address");
    }

    #[test]
    fn test_go_to_first_matching_step() {
        let mut stepper = three();
        stepper.next();
        stepper.next();
        assert_eq!(stepper.go_to_first(|step| step.starts_with('p')), Some(1));
        assert_eq!(stepper.current(), &"personal");
        assert_eq!(stepper.go_to_first(|step| step.is_empty()), None);
        assert_eq!(stepper.current_index(), 1);
    }

    #[test]
    fn test_single_step_is_first_and_last() {
        let mut stepper = Stepper::new(vec![()]).unwrap();
        assert!(stepper.is_first());
        assert!(stepper.is_last());
        stepper.next();
        stepper.back();
        assert_eq!(stepper.current_index(), 0);
    }
}
