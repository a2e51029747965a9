//! Relaxation: repeated recall until the state settles.
//!
//! The engine only knows how to take one step. [`relax`] is the usual
//! caller policy on top of it: feed each output back as the next input until
//! successive states differ by at most `tolerance` (Chebyshev distance) or
//! `max_steps` recalls have been spent.

use crate::error::{HopfieldError, Result};
use crate::kernel::{ActivationGrid, Similarity};
use crate::memory::engine::AssociativeMemory;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// How to drive repeated recall.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallPolicy {
    /// Recall rate passed to every step.
    pub rate: f64,
    /// Upper bound on recall steps.
    pub max_steps: usize,
    /// Largest per-value change still counted as settled.
    pub tolerance: f64,
}

impl Default for RecallPolicy {
    fn default() -> Self {
        Self {
            rate: 0.1,
            max_steps: 16,
            tolerance: 1e-6,
        }
    }
}

impl RecallPolicy {
    pub fn new(rate: f64, max_steps: usize, tolerance: f64) -> Self {
        Self {
            rate,
            max_steps,
            tolerance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rate.is_finite() {
            return Err(HopfieldError::InvalidRate(self.rate));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(HopfieldError::InvalidConfig(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Outcome of a relaxation run.
#[derive(Clone, Debug)]
pub struct Relaxed {
    /// Final state.
    pub grid: ActivationGrid,
    /// Recall steps performed.
    pub steps: usize,
    /// Whether the last step changed no value by more than the tolerance.
    pub converged: bool,
}

/// Recall repeatedly from `input` under `policy`.
///
/// `max_steps == 0` returns the input untouched and unconverged.
pub fn relax(
    memory: &AssociativeMemory,
    input: &ActivationGrid,
    policy: &RecallPolicy,
) -> Result<Relaxed> {
    policy.validate()?;

    let mut state = input.clone();
    let mut steps = 0;
    let mut converged = false;

    while steps < policy.max_steps {
        let next = memory.recall(&state, policy.rate)?;
        let delta = Similarity::chebyshev_distance(&state, &next);
        state = next;
        steps += 1;
        trace!(step = steps, delta, "recall step");

        if delta <= policy.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(steps, "relaxation converged");
    } else if policy.max_steps > 0 {
        warn!(
            steps,
            tolerance = policy.tolerance,
            "relaxation stopped without converging"
        );
    }

    Ok(Relaxed {
        grid: state,
        steps,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> ActivationGrid {
        let mut g = ActivationGrid::filled(4, 3, -1.0);
        for c in 0..4 {
            g[(c, c % 3)] = 1.0;
        }
        g
    }

    #[test]
    fn test_zero_steps_returns_input() {
        let mem = AssociativeMemory::new(4, 3).unwrap();
        let out = relax(&mem, &pattern(), &RecallPolicy::new(0.1, 0, 1e-6)).unwrap();
        assert_eq!(out.steps, 0);
        assert!(!out.converged);
        assert_eq!(out.grid, pattern());
    }

    #[test]
    fn test_step_budget_respected() {
        let mem = AssociativeMemory::new(4, 3).unwrap();
        // tanh iteration towards 0 is slow; 3 steps cannot settle to 1e-12.
        let out = relax(&mem, &pattern(), &RecallPolicy::new(0.1, 3, 1e-12)).unwrap();
        assert_eq!(out.steps, 3);
        assert!(!out.converged);

        let manual = (0..3).fold(pattern(), |g, _| mem.recall(&g, 0.1).unwrap());
        assert_eq!(out.grid, manual);
    }

    #[test]
    fn test_converges_on_fixed_point() {
        let mem = AssociativeMemory::new(4, 3).unwrap();
        let zero = ActivationGrid::zeros(4, 3);
        let out = relax(&mem, &zero, &RecallPolicy::default()).unwrap();
        assert!(out.converged);
        assert_eq!(out.steps, 1);
        assert_eq!(out.grid, zero);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let mem = AssociativeMemory::new(4, 3).unwrap();
        let bad_rate = RecallPolicy::new(f64::NAN, 4, 1e-6);
        assert!(matches!(
            relax(&mem, &pattern(), &bad_rate),
            Err(HopfieldError::InvalidRate(_))
        ));
        let bad_tol = RecallPolicy::new(0.1, 4, -1.0);
        assert!(matches!(
            relax(&mem, &pattern(), &bad_tol),
            Err(HopfieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let policy: RecallPolicy = serde_json::from_str(r#"{"rate": 0.25}"#).unwrap();
        assert_eq!(policy.rate, 0.25);
        assert_eq!(policy.max_steps, 16);
        assert_eq!(policy.tolerance, 1e-6);
    }
}
