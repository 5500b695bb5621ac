use crate::frame::FrameState;

/// Consumes the generated mesh and transform state and draws them
pub trait RenderCollaborator {
    /// Draw one frame. Called after every regeneration and every tick.
    fn present(&mut self, frame: &FrameState<'_>) -> anyhow::Result<()>;
}
