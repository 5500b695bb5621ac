use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use super::object::{Axis, GasketObject};
use super::phase::Phase;
use crate::error::{GasketError, Result};

/// What happened during one sequencer tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    /// Phase that converged this tick, if any
    pub completed: Option<Phase>,
    /// Set on the single tick where only the terminal phase is left
    pub entered_free_roam: bool,
}

/// Ordered queue of animation phases ending in a terminal phase.
///
/// The current phase is held apart from the pending ones, so the queue can
/// never run dry: the terminal phase never completes and is never replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequencer {
    current: Phase,
    pending: VecDeque<Phase>,
}

/// Full show for `obj`: swing about z, x and y, grow, shrink, then bounce forever.
///
/// Targets are captured from `obj` at build time.
pub fn registry(obj: &GasketObject) -> Vec<Phase> {
    let mut phases = Vec::with_capacity(13);
    for axis in [Axis::Z, Axis::X, Axis::Y] {
        for target in [-obj.degree, obj.degree, 0.0] {
            phases.push(Phase::Rotate { axis, target });
        }
    }
    phases.push(Phase::Scale {
        target: obj.scale_fac,
    });
    phases.push(Phase::Scale { target: obj.scale });
    phases.push(Phase::SetDelta);
    phases.push(Phase::Translate);
    phases
}

impl Sequencer {
    pub fn for_object(obj: &GasketObject) -> Self {
        let mut phases = registry(obj).into_iter();
        // registry() always ends in Translate
        let current = phases.next().unwrap_or(Phase::Translate);
        Self {
            current,
            pending: phases.collect(),
        }
    }

    /// Build from an arbitrary phase list. The list must end in the one and
    /// only terminal phase.
    pub fn from_phases(phases: Vec<Phase>) -> Result<Self> {
        match phases.iter().position(Phase::is_terminal) {
            Some(i) if i == phases.len() - 1 => {}
            Some(i) => {
                return Err(GasketError::InvalidConfiguration(format!(
                    "terminal phase at position {} of {} must be last",
                    i,
                    phases.len()
                )))
            }
            None => {
                return Err(GasketError::InvalidConfiguration(
                    "phase list has no terminal phase".to_string(),
                ))
            }
        }

        let mut phases = VecDeque::from(phases);
        let current = phases.pop_front().unwrap_or(Phase::Translate);
        Ok(Self {
            current,
            pending: phases,
        })
    }

    pub fn current(&self) -> &Phase {
        &self.current
    }

    /// Current phase plus everything still queued behind it
    pub fn phases(&self) -> impl Iterator<Item = &Phase> {
        std::iter::once(&self.current).chain(self.pending.iter())
    }

    /// Queue length, counting the current phase
    pub fn len(&self) -> usize {
        self.pending.len() + 1
    }

    /// Only the terminal phase is left
    pub fn is_free_roam(&self) -> bool {
        self.pending.is_empty()
    }

    /// Step the current phase once, dequeuing the next one if it converged
    pub fn tick<R: Rng>(&mut self, obj: &mut GasketObject, rng: &mut R) -> Result<TickOutcome> {
        let mut outcome = TickOutcome::default();
        if !self.current.step(obj, rng)? {
            return Ok(outcome);
        }

        if let Some(next) = self.pending.pop_front() {
            debug!("phase '{}' done, next '{}'", self.current.label(), next.label());
            outcome.completed = Some(std::mem::replace(&mut self.current, next));
            outcome.entered_free_roam = self.is_free_roam();
        }

        Ok(outcome)
    }
}
