use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::anim::{Axis, GasketObject, Sequencer, TickOutcome, TransMode};
use crate::config::{check_positive, GasketConfig};
use crate::error::{GasketError, Result};
use crate::frame::{FrameState, SessionStatus, Transform};
use crate::gasket::{subdivide_tetrahedron, Mesh};
use crate::math::Palette;
use crate::traits::RenderCollaborator;

/// A user interaction with the viewer controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    SetDivision(i32),
    SetSpeed(f64),
    SetDegree(f64),
    SetScaleFac(f64),
    SetTransMode(TransMode),
    SetAxis(Axis, bool),
    SetFaceColor(usize, [f32; 4]),
    ToggleStart,
    Restart,
}

/// Sole owner of the simulation: object state, mesh, palette and phase queue.
///
/// Input handlers and ticks both go through `&mut Session`, which keeps them
/// serialized.
pub struct Session {
    object: GasketObject,
    mesh: Mesh,
    mesh_revision: u64,
    palette: Palette,
    sequencer: Sequencer,
    rng: StdRng,
    base_scale: f64,
    inputs_locked: bool,
    restart_enabled: bool,
    ticks: u64,
}

impl Session {
    pub fn new(config: &GasketConfig) -> Result<Self> {
        let object = config.to_object()?;
        let palette = config.palette()?;
        let mesh = subdivide_tetrahedron(&object.vertices, object.division)?;
        let sequencer = Sequencer::for_object(&object);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            "Gasket generated: division {}, {} triangles",
            object.division,
            mesh.len()
        );

        Ok(Self {
            base_scale: object.scale,
            object,
            mesh,
            mesh_revision: 0,
            palette,
            sequencer,
            rng,
            inputs_locked: false,
            restart_enabled: false,
            ticks: 0,
        })
    }

    pub fn object(&self) -> &GasketObject {
        &self.object
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn is_paused(&self) -> bool {
        self.object.pause
    }

    pub fn restart_enabled(&self) -> bool {
        self.restart_enabled
    }

    pub fn inputs_locked(&self) -> bool {
        self.inputs_locked
    }

    /// Advance the animation by one frame. A paused session does nothing.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.object.pause {
            return Ok(TickOutcome::default());
        }

        let outcome = self.sequencer.tick(&mut self.object, &mut self.rng)?;
        self.ticks += 1;

        if outcome.entered_free_roam {
            self.restart_enabled = true;
            info!("Free roam reached after {} ticks, restart enabled", self.ticks);
        }
        Ok(outcome)
    }

    pub fn apply(&mut self, event: ControlEvent) -> Result<()> {
        match event {
            ControlEvent::SetDivision(division) => self.set_division(division),
            ControlEvent::SetSpeed(speed) => self.set_speed(speed),
            ControlEvent::SetDegree(degree) => self.set_degree(degree),
            ControlEvent::SetScaleFac(scale_fac) => self.set_scale_fac(scale_fac),
            ControlEvent::SetTransMode(mode) => self.set_trans_mode(mode),
            ControlEvent::SetAxis(axis, enabled) => self.set_axis(axis, enabled),
            ControlEvent::SetFaceColor(face, rgba) => self.set_face_color(face, rgba),
            ControlEvent::ToggleStart => {
                self.toggle_pause();
                Ok(())
            }
            ControlEvent::Restart => {
                if !self.restart_enabled {
                    return Err(GasketError::InvalidState(
                        "restart is disabled until free roam is reached".to_string(),
                    ));
                }
                self.restart();
                Ok(())
            }
        }
    }

    pub fn set_division(&mut self, division: i32) -> Result<()> {
        self.ensure_unlocked()?;
        let mesh = subdivide_tetrahedron(&self.object.vertices, division)?;
        self.object.division = division;
        self.mesh = mesh;
        info!("Gasket regenerated: division {}, {} triangles", division, self.mesh.len());
        self.settings_changed();
        Ok(())
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.ensure_unlocked()?;
        check_positive("speed", speed)?;
        self.object.speed = speed;
        self.settings_changed();
        Ok(())
    }

    pub fn set_degree(&mut self, degree: f64) -> Result<()> {
        self.ensure_unlocked()?;
        if !degree.is_finite() {
            return Err(GasketError::InvalidConfiguration(format!(
                "degree must be finite, got {}",
                degree
            )));
        }
        self.object.degree = degree;
        self.settings_changed();
        Ok(())
    }

    pub fn set_scale_fac(&mut self, scale_fac: f64) -> Result<()> {
        self.ensure_unlocked()?;
        check_positive("scale_fac", scale_fac)?;
        self.object.scale_fac = scale_fac;
        self.settings_changed();
        Ok(())
    }

    pub fn set_trans_mode(&mut self, mode: TransMode) -> Result<()> {
        self.ensure_unlocked()?;
        self.object.trans_mode = mode;
        self.settings_changed();
        Ok(())
    }

    pub fn set_axis(&mut self, axis: Axis, enabled: bool) -> Result<()> {
        self.ensure_unlocked()?;
        self.object.rotate_xyz[axis.index()] = enabled;
        self.settings_changed();
        Ok(())
    }

    pub fn set_face_color(&mut self, face: usize, rgba: [f32; 4]) -> Result<()> {
        self.ensure_unlocked()?;
        let slot = self.palette.get_mut(face).ok_or_else(|| {
            GasketError::InvalidConfiguration(format!("face {} out of range 0..4", face))
        })?;
        *slot = rgba;
        self.settings_changed();
        Ok(())
    }

    /// Start or stop. Starting locks the parameter inputs until restart.
    pub fn toggle_pause(&mut self) {
        self.object.pause = !self.object.pause;
        if self.object.pause {
            info!("Animation stopped at '{}'", self.sequencer.current().label());
        } else {
            self.inputs_locked = true;
            info!("Animation started at '{}'", self.sequencer.current().label());
        }
    }

    /// Back to the resting transform with a fresh phase queue, paused.
    /// Unlike `ControlEvent::Restart`, this ignores whether restart is enabled.
    pub fn restart(&mut self) {
        self.object.pause = true;
        self.object.reset_transform(self.base_scale);
        self.sequencer = Sequencer::for_object(&self.object);
        self.inputs_locked = false;
        self.restart_enabled = false;
        self.ticks = 0;
        info!("Animation restarted");
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            paused: self.object.pause,
            inputs_locked: self.inputs_locked,
            restart_enabled: self.restart_enabled,
            phase: *self.sequencer.current(),
            queue_len: self.sequencer.len(),
            ticks: self.ticks,
        }
    }

    pub fn frame(&self) -> FrameState<'_> {
        FrameState {
            mesh: &self.mesh,
            mesh_revision: self.mesh_revision,
            palette: &self.palette,
            transform: Transform::of(&self.object),
            object: &self.object,
            status: self.status(),
        }
    }

    pub fn render(&self, collaborator: &mut dyn RenderCollaborator) -> anyhow::Result<()> {
        collaborator.present(&self.frame())
    }

    fn ensure_unlocked(&self) -> Result<()> {
        if self.inputs_locked {
            return Err(GasketError::InvalidState(
                "settings are locked while the animation runs, restart first".to_string(),
            ));
        }
        Ok(())
    }

    /// Any settings change regenerates the buffers and replays from the first phase
    fn settings_changed(&mut self) {
        self.mesh_revision += 1;
        self.sequencer = Sequencer::for_object(&self.object);
        debug!(
            "Sequencer rebuilt: {} phases, mesh revision {}",
            self.sequencer.len(),
            self.mesh_revision
        );
    }
}
