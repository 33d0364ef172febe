//! Model Buffers Data - Pure DOP
//!
//! Data only. All transformations happen in model_buffers_operations.rs.

use super::gpu_buffer::{GpuFloatBuffer, GpuIntBuffer};

/// Per-frame model triage state.
///
/// Owned by the frame-assembly context and passed by reference to every
/// routing call. Constructed once and reused across frames: `clear` begins a
/// new frame's accumulation, `flip` transitions the destination buffers to
/// their readable upload views. Single-threaded by contract.
pub struct ModelBuffersData {
    /// Temporary scene vertex buffer, recycled within a frame.
    pub vertex_buffer: GpuIntBuffer,

    /// Temporary scene uv buffer, recycled within a frame.
    pub uv_buffer: GpuFloatBuffer,

    /// Destination for models above the small-triangle threshold.
    pub model_buffer: GpuIntBuffer,

    /// Destination for models at or below the small-triangle threshold.
    pub model_buffer_small: GpuIntBuffer,

    /// Destination for geometry whose draw order does not matter.
    pub model_buffer_unordered: GpuIntBuffer,

    /// Number of models routed to the unordered buffer this frame.
    pub unordered_models: u32,

    /// Number of models routed to the small buffer this frame.
    pub small_models: u32,

    /// Number of models routed to the large buffer this frame.
    pub large_models: u32,

    /// Cumulative offset into the final upload buffer.
    ///
    /// Deliberately untouched by `clear`; see `clear_buffer_offset` in the
    /// operations module for the reset contract.
    pub target_buffer_offset: u32,

    /// Write cursor into the temporary scene vertex buffer.
    pub temp_offset: u32,

    /// Write cursor into the temporary scene uv buffer.
    pub temp_uv_offset: u32,
}

/// Per-frame routing totals, for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ModelBufferStats {
    pub small_models: u32,
    pub large_models: u32,
    pub unordered_models: u32,
    pub target_buffer_offset: u32,
}

impl std::fmt::Display for ModelBufferStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ModelBuffers: {} small, {} large, {} unordered, target offset {}",
            self.small_models, self.large_models, self.unordered_models, self.target_buffer_offset
        )
    }
}
