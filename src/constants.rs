//! Shared constants for model triage and geometry export.

use static_assertions::const_assert;

/// Limits governing model triage in the renderer.
pub mod model_limits {
    /// Models at or below this triangle count are routed to the small buffer.
    pub const SMALL_TRIANGLE_COUNT: u32 = 512;

    /// Expected ceiling on triangles per model. Documented but not enforced
    /// here; callers keep models within what the fixed-width draw records
    /// downstream can encode.
    pub const MAX_TRIANGLE: u32 = 4096;

    /// Marks an offset as scene-buffer-relative rather than model-relative.
    /// Reserved for the draw-record encoding shared with callers.
    pub const FLAG_SCENE_BUFFER: i32 = i32::MIN;

    /// Vertices per triangle in the draw-record encoding.
    pub const VERTICES_PER_TRIANGLE: usize = 3;

    /// Ints per encoded vertex (packed position plus color).
    pub const INTS_PER_VERTEX: usize = 4;
}

/// Sizing for the export staging region.
pub mod export_limits {
    /// Width of one encoded float component in the export stream.
    pub const BYTES_PER_FLOAT: usize = 4;

    /// Starting capacity of the staging region, in bytes.
    pub const STAGING_CAPACITY_BYTES: usize = 3 * 512;
}

const_assert!(model_limits::SMALL_TRIANGLE_COUNT < model_limits::MAX_TRIANGLE);
const_assert!(export_limits::STAGING_CAPACITY_BYTES % export_limits::BYTES_PER_FLOAT == 0);
