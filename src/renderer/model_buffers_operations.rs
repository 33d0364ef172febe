//! Model Buffers Operations - Pure DOP Functions
//!
//! Routing and lifecycle transformations over `ModelBuffersData`. No
//! validation on the hot paths: out-of-range triangle counts and offsets
//! are the caller's contract with the downstream draw-record encoding.

use crate::config::GeometryConfig;
use crate::constants::model_limits::SMALL_TRIANGLE_COUNT;

use super::gpu_buffer::{GpuFloatBuffer, GpuIntBuffer};
use super::model_buffers_data::{ModelBufferStats, ModelBuffersData};

/// Create model buffer state with default capacities.
pub fn create_model_buffers() -> ModelBuffersData {
    create_model_buffers_with(&GeometryConfig::default())
}

/// Create model buffer state with configured capacities.
pub fn create_model_buffers_with(config: &GeometryConfig) -> ModelBuffersData {
    ModelBuffersData {
        vertex_buffer: GpuIntBuffer::with_capacity(config.scratch_vertex_capacity),
        uv_buffer: GpuFloatBuffer::with_capacity(config.scratch_uv_capacity),
        model_buffer: GpuIntBuffer::with_capacity(config.model_record_capacity),
        model_buffer_small: GpuIntBuffer::with_capacity(config.model_record_capacity),
        model_buffer_unordered: GpuIntBuffer::with_capacity(config.model_record_capacity),
        unordered_models: 0,
        small_models: 0,
        large_models: 0,
        target_buffer_offset: 0,
        temp_offset: 0,
        temp_uv_offset: 0,
    }
}

/// Pick the destination buffer for an order-sensitive model.
///
/// Models at or below [`SMALL_TRIANGLE_COUNT`] triangles go to the small
/// buffer, everything else to the large one. Exactly one counter is
/// incremented per call. No upper bound is enforced; `MAX_TRIANGLE`
/// documents the expected ceiling only.
pub fn buffer_for_triangles(data: &mut ModelBuffersData, triangles: u32) -> &mut GpuIntBuffer {
    if triangles <= SMALL_TRIANGLE_COUNT {
        data.small_models += 1;
        &mut data.model_buffer_small
    } else {
        data.large_models += 1;
        &mut data.model_buffer
    }
}

/// Pick the destination buffer for geometry that needs no draw ordering.
pub fn buffer_unordered(data: &mut ModelBuffersData) -> &mut GpuIntBuffer {
    data.unordered_models += 1;
    &mut data.model_buffer_unordered
}

/// Reset the temporary scene buffers. These recycle more often than the
/// destination buffers, so their lifecycle is managed separately.
pub fn clear_vert_uv(data: &mut ModelBuffersData) {
    data.vertex_buffer.clear();
    data.uv_buffer.clear();
}

/// Finalize the temporary scene buffers for reading.
pub fn flip_vert_uv(data: &mut ModelBuffersData) {
    data.vertex_buffer.flip();
    data.uv_buffer.flip();
}

/// Begin a new frame: empty the destination buffers, zero the model
/// counters and temp cursors.
///
/// `target_buffer_offset` is NOT reset here. Its reset cadence does not
/// always coincide with the frame boundary, so it has its own reset in
/// [`clear_buffer_offset`]; callers own the ordering between the two.
pub fn clear(data: &mut ModelBuffersData) {
    data.model_buffer.clear();
    data.model_buffer_small.clear();
    data.model_buffer_unordered.clear();
    data.unordered_models = 0;
    data.large_models = 0;
    data.small_models = 0;
    data.temp_offset = 0;
    data.temp_uv_offset = 0;
    log::trace!("[ModelBuffers] clear");
}

/// Reset the cumulative target buffer offset.
///
/// Kept separate from [`clear`] on purpose: the caller decides when its
/// offset accounting restarts, and the two resets do not always coincide.
pub fn clear_buffer_offset(data: &mut ModelBuffersData) {
    data.target_buffer_offset = 0;
}

/// Transition the three destination buffers to their readable upload views.
/// Counters and temp buffers are untouched.
pub fn flip(data: &mut ModelBuffersData) {
    data.model_buffer.flip();
    data.model_buffer_small.flip();
    data.model_buffer_unordered.flip();
    log::debug!("[ModelBuffers] flip: {}", stats(data));
}

/// Advance the cumulative offset into the final upload buffer by the number
/// of units just written for one model.
pub fn add_target_buffer_offset(data: &mut ModelBuffersData, n: u32) {
    data.target_buffer_offset += n;
}

/// Advance the temporary scene vertex cursor.
pub fn add_temp_offset(data: &mut ModelBuffersData, n: u32) {
    data.temp_offset += n;
}

/// Advance the temporary scene uv cursor.
pub fn add_temp_uv_offset(data: &mut ModelBuffersData, n: u32) {
    data.temp_uv_offset += n;
}

/// Routing totals for the current frame.
pub fn stats(data: &ModelBuffersData) -> ModelBufferStats {
    ModelBufferStats {
        small_models: data.small_models,
        large_models: data.large_models,
        unordered_models: data.unordered_models,
        target_buffer_offset: data.target_buffer_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_at_threshold() {
        let mut data = create_model_buffers();

        buffer_for_triangles(&mut data, SMALL_TRIANGLE_COUNT).put(&[1]);
        assert_eq!(data.small_models, 1);
        assert_eq!(data.large_models, 0);
        assert_eq!(data.model_buffer_small.len(), 1);
        assert_eq!(data.model_buffer.len(), 0);

        buffer_for_triangles(&mut data, SMALL_TRIANGLE_COUNT + 1).put(&[2]);
        assert_eq!(data.small_models, 1);
        assert_eq!(data.large_models, 1);
        assert_eq!(data.model_buffer.len(), 1);
    }

    #[test]
    fn test_unordered_routing() {
        let mut data = create_model_buffers();

        buffer_unordered(&mut data).put(&[9, 9]);
        buffer_unordered(&mut data).put(&[9, 9]);
        assert_eq!(data.unordered_models, 2);
        assert_eq!(data.model_buffer_unordered.len(), 4);
        assert_eq!(data.small_models, 0);
        assert_eq!(data.large_models, 0);
    }

    #[test]
    fn test_clear_preserves_target_offset() {
        let mut data = create_model_buffers();

        buffer_for_triangles(&mut data, 100).put(&[1, 2, 3]);
        buffer_unordered(&mut data).put(&[4]);
        add_temp_offset(&mut data, 12);
        add_temp_uv_offset(&mut data, 8);
        add_target_buffer_offset(&mut data, 300);

        clear(&mut data);

        assert_eq!(data.small_models, 0);
        assert_eq!(data.large_models, 0);
        assert_eq!(data.unordered_models, 0);
        assert_eq!(data.temp_offset, 0);
        assert_eq!(data.temp_uv_offset, 0);
        assert_eq!(data.model_buffer_small.len(), 0);
        assert_eq!(data.model_buffer_unordered.len(), 0);
        // The upload offset survives the frame reset until its own reset runs.
        assert_eq!(data.target_buffer_offset, 300);

        clear_buffer_offset(&mut data);
        assert_eq!(data.target_buffer_offset, 0);
    }

    #[test]
    fn test_target_offset_accumulates() {
        let mut data = create_model_buffers();

        add_target_buffer_offset(&mut data, 10);
        add_target_buffer_offset(&mut data, 20);
        add_target_buffer_offset(&mut data, 5);
        assert_eq!(data.target_buffer_offset, 35);
    }

    #[test]
    fn test_flip_exposes_destination_views() {
        let mut data = create_model_buffers();

        buffer_for_triangles(&mut data, 4000).put(&[1, 2]);
        buffer_for_triangles(&mut data, 8).put(&[3]);
        flip(&mut data);

        assert_eq!(data.model_buffer.slice(), &[1, 2]);
        assert_eq!(data.model_buffer_small.slice(), &[3]);
        assert_eq!(data.model_buffer_unordered.slice(), &[] as &[i32]);
        // Counters are untouched by flip.
        assert_eq!(data.large_models, 1);
        assert_eq!(data.small_models, 1);
    }

    #[test]
    fn test_vert_uv_lifecycle_is_independent() {
        let mut data = create_model_buffers();

        data.vertex_buffer.put(&[1, 2, 3]);
        data.uv_buffer.put(&[0.5, 0.25]);
        buffer_unordered(&mut data).put(&[7]);

        flip_vert_uv(&mut data);
        assert_eq!(data.vertex_buffer.slice(), &[1, 2, 3]);
        assert_eq!(data.uv_buffer.slice(), &[0.5, 0.25]);

        clear_vert_uv(&mut data);
        assert!(data.vertex_buffer.is_empty());
        assert!(data.uv_buffer.is_empty());
        // Destination buffers are untouched by the scratch lifecycle.
        assert_eq!(data.model_buffer_unordered.len(), 1);
        assert_eq!(data.unordered_models, 1);
    }
}
