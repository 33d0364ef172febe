// Vista Engine - geometry buffering and export core
//
// Two independent pieces, unified by the same underlying job: streaming
// variable-length numeric data into flat buffers with amortized growth and
// metadata bookkeeping.
// - renderer: per-frame model triage into GPU staging buffers
// - export: attribute stream serialization with spatial bounds
//
// Both are single-threaded, synchronous, and caller-trusted; the embedding
// renderer owns frame scheduling, device upload, and file I/O.

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Frame-assembly buffering
pub mod renderer;

// Static export pipeline
pub mod export;

pub use config::GeometryConfig;
pub use error::{GeometryError, GeometryResult};
pub use export::{FloatVectorBuffer, Manifest};
pub use renderer::{GpuBuffer, GpuFloatBuffer, GpuIntBuffer, ModelBufferStats, ModelBuffersData};
