//! Lifecycle of one request flow: `Idle -> Pending -> Succeeded | Failed`.

use std::fmt::Display;

/// State of a single request flow.
///
/// A result and an error can never coexist: both live inside the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestStatus<T> {
    /// Nothing submitted yet, or the last outcome was dismissed.
    Idle,
    /// A request is in flight.
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for RequestStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestStatus<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The submit control is enabled exactly when nothing is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.is_pending()
    }

    /// Enter `Pending`, dropping any previous result or error.
    ///
    /// Returns `false` without changing anything if a request is already
    /// pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Outcomes that arrive while not `Pending` are ignored and `false` is
    /// returned.
    pub fn finish<E: Display>(&mut self, outcome: Result<T, E>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match outcome {
            Ok(value) => Self::Succeeded(value),
            Err(err) => Self::Failed(err.to_string()),
        };
        true
    }

    /// Return to `Idle` from a terminal state. No-op while pending.
    pub fn dismiss(&mut self) {
        if !self.is_pending() {
            *self = Self::Idle;
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending => "Pending",
            Self::Succeeded(_) => "Succeeded",
            Self::Failed(_) => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_outcome() {
        let mut status = RequestStatus::Succeeded(1.5);
        assert!(status.begin());
        assert_eq!(status, RequestStatus::Pending);
        assert!(status.result().is_none());

        let mut status: RequestStatus<f64> = RequestStatus::Failed("boom".into());
        assert!(status.begin());
        assert!(status.error().is_none());
    }

    #[test]
    fn begin_refuses_while_pending() {
        let mut status: RequestStatus<f64> = RequestStatus::default();
        assert!(status.begin());
        assert!(!status.begin());
        assert!(status.is_pending());
    }

    #[test]
    fn submit_enabled_iff_not_pending() {
        let states: [RequestStatus<u8>; 4] = [
            RequestStatus::Idle,
            RequestStatus::Pending,
            RequestStatus::Succeeded(1),
            RequestStatus::Failed("x".into()),
        ];
        for state in states {
            assert_eq!(state.submit_enabled(), !state.is_pending(), "{}", state.label());
        }
    }

    #[test]
    fn finish_stores_result_or_message() {
        let mut status: RequestStatus<u32> = RequestStatus::Idle;
        status.begin();
        assert!(status.finish::<String>(Ok(7)));
        assert_eq!(status.result(), Some(&7));
        assert_eq!(status.error(), None);

        status.begin();
        assert!(status.finish(Err::<u32, _>("Predict API failed with status 500")));
        assert_eq!(status.error(), Some("Predict API failed with status 500"));
        assert_eq!(status.result(), None);
    }

    #[test]
    fn finish_outside_pending_is_ignored() {
        let mut status: RequestStatus<u32> = RequestStatus::Succeeded(3);
        assert!(!status.finish::<String>(Ok(9)));
        assert_eq!(status.result(), Some(&3));
    }

    #[test]
    fn dismiss_returns_to_idle_except_when_pending() {
        let mut status: RequestStatus<u32> = RequestStatus::Failed("x".into());
        status.dismiss();
        assert_eq!(status, RequestStatus::Idle);

        status.begin();
        status.dismiss();
        assert!(status.is_pending());
    }
}
