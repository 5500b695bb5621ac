use crate::anim::{GasketObject, Phase};
use crate::gasket::Mesh;
use crate::math::Palette;

/// Transform state handed to the renderer every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub theta: [f64; 3],
    pub scale: f64,
    pub trans: [f64; 2],
}

impl Transform {
    pub fn of(obj: &GasketObject) -> Self {
        Self {
            theta: obj.theta,
            scale: obj.scale,
            trans: obj.trans,
        }
    }
}

/// Lifecycle flags the controls are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStatus {
    pub paused: bool,
    pub inputs_locked: bool,
    pub restart_enabled: bool,
    pub phase: Phase,
    pub queue_len: usize,
    pub ticks: u64,
}

/// Everything a render collaborator needs for one frame.
///
/// `mesh_revision` changes whenever the mesh or palette did, so uploads can be
/// skipped on frames where only the transform moved.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    pub mesh: &'a Mesh,
    pub mesh_revision: u64,
    pub palette: &'a Palette,
    pub transform: Transform,
    pub object: &'a GasketObject,
    pub status: SessionStatus,
}
