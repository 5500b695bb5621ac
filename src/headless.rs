use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::frame::{FrameState, Transform};
use crate::session::Session;
use crate::traits::RenderCollaborator;

/// Render collaborator without a window: logs uploads and transforms
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    log_every: u64,
    frames: u64,
    uploads: u64,
    uploaded_revision: Option<u64>,
    uploaded_vertices: usize,
    last: Option<Transform>,
}

impl HeadlessRenderer {
    /// `log_every == 0` disables per-frame logging
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every,
            ..Default::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn uploaded_vertices(&self) -> usize {
        self.uploaded_vertices
    }

    pub fn last_transform(&self) -> Option<Transform> {
        self.last
    }
}

impl RenderCollaborator for HeadlessRenderer {
    fn present(&mut self, frame: &FrameState<'_>) -> Result<()> {
        if self.uploaded_revision != Some(frame.mesh_revision) {
            self.uploaded_revision = Some(frame.mesh_revision);
            self.uploaded_vertices = frame.mesh.vertex_count();
            self.uploads += 1;
            info!(
                "Mesh upload #{}: {} vertices (revision {})",
                self.uploads, self.uploaded_vertices, frame.mesh_revision
            );
        }

        self.frames += 1;
        if self.log_every > 0 && self.frames % self.log_every == 0 {
            let t = frame.transform;
            info!(
                "frame {:>6} [{}] theta=({:.2}, {:.2}, {:.2}) scale={:.3} trans=({:.4}, {:.4})",
                self.frames,
                frame.status.phase.label(),
                t.theta[0],
                t.theta[1],
                t.theta[2],
                t.scale,
                t.trans[0],
                t.trans[1]
            );
        }
        self.last = Some(frame.transform);
        Ok(())
    }
}

/// Summary of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub frames: u64,
    pub free_roam_at: Option<u64>,
    pub phase: String,
    pub transform: Transform,
}

/// Start `session` and drive it for `ticks` frames, drawing after every tick
pub fn run_headless(
    session: &mut Session,
    renderer: &mut HeadlessRenderer,
    ticks: u64,
) -> Result<HeadlessReport> {
    session.render(renderer)?;
    if session.is_paused() {
        session.toggle_pause();
    }

    let mut free_roam_at = None;
    for tick in 1..=ticks {
        let outcome = session.tick().context("Animation tick failed")?;
        if outcome.entered_free_roam {
            free_roam_at = Some(tick);
        }
        session.render(renderer)?;
    }

    Ok(HeadlessReport {
        ticks,
        frames: renderer.frames(),
        free_roam_at,
        phase: session.sequencer().current().label(),
        transform: Transform::of(session.object()),
    })
}

/// Write the flattened vertex and color lists as JSON
pub fn dump_mesh(session: &Session, path: &Path) -> Result<()> {
    let flat = session.mesh().flatten(session.palette());
    let json = serde_json::to_string(&flat).context("Failed to serialize mesh")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write mesh to {}", path.display()))?;
    info!("Wrote {} vertices to {}", flat.positions.len(), path.display());
    Ok(())
}
