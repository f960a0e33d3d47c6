//! First-class invariants for a tic-tac-toe match.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and serve as documentation of the
//! match's guarantees.

use super::Match;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn violation_of<S, I: Invariant<S>>(state: &S) -> Option<InvariantViolation> {
    (!I::holds(state)).then(|| InvariantViolation::new(I::description()))
}

fn collect(violations: Vec<Option<InvariantViolation>>) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = violations.into_iter().flatten().collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(vec![
            violation_of::<S, I1>(state),
            violation_of::<S, I2>(state),
            violation_of::<S, I3>(state),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(vec![violation_of::<S, I1>(state), violation_of::<S, I2>(state)])
    }
}

pub mod mark_balance;
pub mod single_winner;
pub mod turn_parity;

pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_parity::TurnParityInvariant;

/// All match invariants as a composable set.
pub type MatchInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    SingleWinnerInvariant,
);

/// Asserts that all match invariants hold (panics on violation in debug
/// builds, logs in every build).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Match) {
    let result = MatchInvariants::check_all(game);
    if let Err(violations) = &result {
        warn!(?violations, "Match invariants violated");
    }
    debug_assert!(result.is_ok(), "Match invariants violated: {:?}", result);
}
