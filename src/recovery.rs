//! The demo operation: a guarded attempt whose failure outcome is
//! intercepted by a recovery handler and converted into a plain value.

use std::str::FromStr;

use thiserror::Error;

use crate::signal::FailureSignal;

/// Selector controlling whether the attempt raises a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fail,
    Succeed,
}

/// Rejection for selector strings other than `"fail"` and `"succeed"`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown mode '{0}', expected 'fail' or 'succeed'")]
pub struct UnknownMode(String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(Mode::Fail),
            "succeed" => Ok(Mode::Succeed),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// The guarded region: raises on [`Mode::Fail`], completes with no value
/// on [`Mode::Succeed`].
pub fn attempt(mode: Mode) -> Result<(), FailureSignal> {
    match mode {
        Mode::Fail => Err(FailureSignal::new("Failure!")),
        Mode::Succeed => Ok(()),
    }
}

/// The recovery handler attached to the guarded region.
///
/// A signal carrying a non-empty message is consumed and its message
/// becomes the result. A signal without one is propagated unchanged, so
/// the caller receives the exact signal that was raised.
pub fn recover(outcome: Result<(), FailureSignal>) -> Result<Option<String>, FailureSignal> {
    match outcome {
        Ok(()) => Ok(None),
        Err(signal) => match signal.message() {
            Some(message) => Ok(Some(message.to_string())),
            None => Err(signal),
        },
    }
}

/// Run the attempt with its recovery handler attached.
///
/// `Mode::Fail` yields `Ok(Some("Failure!"))` and `Mode::Succeed` yields
/// `Ok(None)`. Neither defined mode reaches the `Err` arm; it exists for
/// signals raised without a message, which only direct callers of
/// [`recover`] produce today.
pub fn run_demo(mode: Mode) -> Result<Option<String>, FailureSignal> {
    recover(attempt(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_return_the_message_when_it_fails() {
        let mode = "fail".parse::<Mode>().expect("known selector");
        assert_eq!(run_demo(mode), Ok(Some("Failure!".to_string())));
    }

    #[test]
    fn completes_without_a_value_when_it_succeeds() {
        assert_eq!(run_demo(Mode::Succeed), Ok(None));
    }

    #[test]
    fn reraises_a_signal_without_a_message() {
        let signal = FailureSignal::unlabeled();
        assert_eq!(recover(Err(signal.clone())), Err(signal));
    }

    #[test]
    fn reraises_a_signal_with_an_empty_message() {
        let signal = FailureSignal::new("");
        assert_eq!(recover(Err(signal.clone())), Err(signal));
    }

    #[test]
    fn completion_passes_through_the_handler() {
        assert_eq!(recover(Ok(())), Ok(None));
    }

    #[test]
    fn selector_strings_parse() {
        assert_eq!("fail".parse(), Ok(Mode::Fail));
        assert_eq!("succeed".parse(), Ok(Mode::Succeed));
    }

    #[test]
    fn unknown_selectors_are_rejected_by_name() {
        let err = "retry".parse::<Mode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown mode 'retry', expected 'fail' or 'succeed'");
    }

    fn any_mode() -> impl Strategy<Value = Mode> {
        prop_oneof![Just(Mode::Fail), Just(Mode::Succeed)]
    }

    proptest! {
        #[test]
        fn repeated_runs_agree(mode in any_mode(), runs in 2usize..16) {
            let first = run_demo(mode);
            for _ in 1..runs {
                prop_assert_eq!(run_demo(mode), first.clone());
            }
        }
    }
}
