use crate::models::{DeclineReason, Outcome};

/// The terminal result of evaluating one authorization request.
///
/// Invariant: the outcome is `Accepted` exactly when the reason is
/// `NoDecline`. The constructors are the only way to build a value, so an
/// inconsistent pair cannot be represented.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DecisionResult {
    outcome: Outcome,
    reason: DeclineReason
}

impl DecisionResult {
    pub fn accepted() -> Self {
        Self {
            outcome: Outcome::Accepted,
            reason: DeclineReason::NoDecline
        }
    }

    pub fn declined(reason: DeclineReason) -> Self {
        debug_assert!(reason != DeclineReason::NoDecline);

        Self {
            outcome: Outcome::Declined,
            reason
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn reason(&self) -> DeclineReason {
        self.reason
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }
}
