use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::object::{Axis, GasketObject, TransMode};
use crate::error::{GasketError, Result};

/// Half-extent of the visible area the gasket bounces inside
pub const BOUNCE_LIMIT: f64 = 0.97;

/// Base magnitude of the free-roam velocity, multiplied by speed
pub const DELTA_FACTOR: f64 = 0.00004;

/// One steppable unit of animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Ramp `theta[axis]` to `target` degrees
    Rotate { axis: Axis, target: f64 },
    /// Ramp `scale` to `target`
    Scale { target: f64 },
    /// Pick the free-roam velocity from the current speed
    SetDelta,
    /// Bounce around forever
    Translate,
}

impl Phase {
    /// A terminal phase never reports completion and is never dequeued
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Translate)
    }

    pub fn label(&self) -> String {
        match self {
            Phase::Rotate { axis, target } => format!("rotate {} to {:.1}", axis.label(), target),
            Phase::Scale { target } => format!("scale to {:.2}", target),
            Phase::SetDelta => "set delta".to_string(),
            Phase::Translate => "free roam".to_string(),
        }
    }

    /// Advance `obj` by one tick. Returns `true` once the phase has converged.
    pub fn step<R: Rng>(&self, obj: &mut GasketObject, rng: &mut R) -> Result<bool> {
        match *self {
            Phase::Rotate { axis, .. } if !obj.is_axis_enabled(axis) => Ok(true),
            Phase::Rotate { axis, target } => {
                let step = obj.rotation_step();
                Ok(ramp(&mut obj.theta[axis.index()], target, step))
            }
            Phase::Scale { target } => {
                let step = obj.scale_step();
                Ok(ramp(&mut obj.scale, target, step))
            }
            Phase::SetDelta => {
                let magnitude = obj.speed * DELTA_FACTOR;
                obj.delta = [magnitude * (PI / 3.0).cos(), magnitude * (PI / 3.0).sin()];
                Ok(true)
            }
            Phase::Translate => {
                translate(obj, rng)?;
                Ok(false)
            }
        }
    }
}

/// Move `value` toward `target` by a fixed step, snapping on the final tick
fn ramp(value: &mut f64, target: f64, step: f64) -> bool {
    let difference = target - *value;
    if difference.abs() > step {
        *value += difference.signum() * step;
        false
    } else {
        *value = target;
        true
    }
}

fn translate<R: Rng>(obj: &mut GasketObject, rng: &mut R) -> Result<()> {
    if obj.scale <= 0.0 || !obj.scale.is_finite() {
        return Err(GasketError::InvalidState(format!(
            "cannot bounce with scale {}",
            obj.scale
        )));
    }

    let step = obj.rotation_step();
    match obj.trans_mode {
        TransMode::Still => {}
        TransMode::Rotating => obj.theta[2] -= step,
        TransMode::Dancing => obj.theta[1] += step,
        TransMode::Flipping => obj.theta[0] += step,
        TransMode::Paralysing => {
            let sign = if rng.random::<f64>() > 0.5 { 1.0 } else { -1.0 };
            obj.theta[0] += sign * step;
            obj.theta[1] += sign * step;
            obj.theta[2] -= sign * step;
        }
    }

    // Reverse before integrating; position may overshoot the wall by one step
    for axis in 0..2 {
        let offset = obj.trans[axis] / obj.scale;
        let limit = BOUNCE_LIMIT / obj.scale;
        let hit = obj
            .vertices
            .iter()
            .any(|v| (v[axis] as f64 + offset).abs() > limit);
        if hit {
            obj.delta[axis] = -obj.delta[axis];
        }
    }

    obj.trans[0] += obj.delta[0];
    obj.trans[1] += obj.delta[1];
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn rotation_reaches_target_exactly_on_tick_90() {
        let mut obj = GasketObject::default();
        let phase = Phase::Rotate {
            axis: Axis::Z,
            target: 180.0,
        };
        let mut rng = rng();

        for tick in 1..90 {
            assert!(!phase.step(&mut obj, &mut rng).unwrap(), "tick {tick}");
        }
        assert_eq!(obj.theta[2], 178.0);
        assert!(phase.step(&mut obj, &mut rng).unwrap());
        assert_eq!(obj.theta[2], 180.0);
    }

    #[test]
    fn rotation_ramps_downward() {
        let mut obj = GasketObject {
            theta: [0.0, 0.0, 5.0],
            ..Default::default()
        };
        let phase = Phase::Rotate {
            axis: Axis::Z,
            target: -1.0,
        };
        let mut rng = rng();

        assert!(!phase.step(&mut obj, &mut rng).unwrap());
        assert_eq!(obj.theta[2], 3.0);
        assert!(!phase.step(&mut obj, &mut rng).unwrap());
        assert_eq!(obj.theta[2], 1.0);
        assert!(phase.step(&mut obj, &mut rng).unwrap());
        assert_eq!(obj.theta[2], -1.0);
    }

    #[test]
    fn disabled_axis_completes_immediately() {
        let mut obj = GasketObject {
            speed: 1.0,
            ..Default::default()
        };
        let before = obj.clone();
        let phase = Phase::Rotate {
            axis: Axis::X,
            target: -720.0,
        };

        assert!(phase.step(&mut obj, &mut rng()).unwrap());
        assert_eq!(obj, before);
    }

    #[test]
    fn scaling_reaches_target_after_20_ticks() {
        let mut obj = GasketObject::default();
        let phase = Phase::Scale { target: 3.0 };
        let mut rng = rng();

        let mut ticks = 0;
        loop {
            ticks += 1;
            if phase.step(&mut obj, &mut rng).unwrap() {
                break;
            }
            assert!(ticks < 100, "scaling did not converge");
        }
        assert_eq!(ticks, 20);
        assert_eq!(obj.scale, 3.0);
    }

    #[test]
    fn set_delta_points_up_and_right() {
        let mut obj = GasketObject::default();
        assert!(Phase::SetDelta.step(&mut obj, &mut rng()).unwrap());

        assert!((obj.delta[0] - 0.004).abs() < 1e-12);
        assert!((obj.delta[1] - 0.004 * 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn translate_never_completes() {
        let mut obj = GasketObject {
            delta: [0.004, 0.006],
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..2000 {
            assert!(!Phase::Translate.step(&mut obj, &mut rng).unwrap());
        }
    }

    #[test]
    fn bounce_flips_on_the_call_after_crossing() {
        let mut obj = GasketObject {
            vertices: [Vec3::new(0.2, 0.0, 0.0); 4],
            trans: [0.7625, 0.0],
            delta: [0.004, 0.0],
            ..Default::default()
        };
        let mut rng = rng();

        // 0.2 + 0.7625 = 0.9625, inside: moves out to 0.7665
        Phase::Translate.step(&mut obj, &mut rng).unwrap();
        assert!((obj.trans[0] - 0.7665).abs() < 1e-12);
        assert!(obj.delta[0] > 0.0);

        // 0.9665 still inside: displacement crosses the wall to 0.7705
        Phase::Translate.step(&mut obj, &mut rng).unwrap();
        assert!(0.2 + obj.trans[0] > BOUNCE_LIMIT);
        assert!(obj.delta[0] > 0.0, "must not flip on the crossing tick");

        // Outside now: flip and move back
        Phase::Translate.step(&mut obj, &mut rng).unwrap();
        assert!(obj.delta[0] < 0.0);
        assert!((obj.trans[0] - 0.7665).abs() < 1e-12);
    }

    #[test]
    fn bounce_limit_shrinks_with_scale() {
        let mut obj = GasketObject {
            vertices: [Vec3::new(0.0, 0.33, 0.0); 4],
            scale: 3.0,
            delta: [0.0, 0.01],
            ..Default::default()
        };

        // 0.33 > 0.97 / 3
        Phase::Translate.step(&mut obj, &mut rng()).unwrap();
        assert!(obj.delta[1] < 0.0);
        assert!((obj.trans[1] + 0.01).abs() < 1e-12);
    }

    #[test]
    fn translate_rejects_zero_scale() {
        let mut obj = GasketObject {
            scale: 0.0,
            ..Default::default()
        };
        let err = Phase::Translate.step(&mut obj, &mut rng()).unwrap_err();
        assert!(matches!(err, GasketError::InvalidState(_)));
    }

    #[test]
    fn trans_modes_nudge_their_axis() {
        let cases = [
            (TransMode::Still, [0.0, 0.0, 0.0]),
            (TransMode::Rotating, [0.0, 0.0, -2.0]),
            (TransMode::Dancing, [0.0, 2.0, 0.0]),
            (TransMode::Flipping, [2.0, 0.0, 0.0]),
        ];
        for (mode, expected) in cases {
            let mut obj = GasketObject {
                trans_mode: mode,
                ..Default::default()
            };
            Phase::Translate.step(&mut obj, &mut rng()).unwrap();
            assert_eq!(obj.theta, expected, "{mode:?}");
        }
    }

    #[test]
    fn paralysing_mirrors_all_axes() {
        let mut obj = GasketObject {
            trans_mode: TransMode::Paralysing,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..50 {
            let before = obj.theta;
            Phase::Translate.step(&mut obj, &mut rng).unwrap();
            let dx = obj.theta[0] - before[0];
            let dy = obj.theta[1] - before[1];
            let dz = obj.theta[2] - before[2];
            assert_eq!(dx.abs(), 2.0);
            assert_eq!(dx, dy);
            assert_eq!(dz, -dx);
        }
    }

    #[test]
    fn only_translate_is_terminal() {
        assert!(Phase::Translate.is_terminal());
        assert!(!Phase::SetDelta.is_terminal());
        assert!(!Phase::Scale { target: 1.0 }.is_terminal());
        assert!(!Phase::Rotate {
            axis: Axis::Y,
            target: 0.0
        }
        .is_terminal());
    }
}
