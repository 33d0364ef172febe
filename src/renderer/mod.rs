//! Renderer support - model triage and GPU staging buffers

pub mod gpu_buffer;
pub mod model_buffers_data;
pub mod model_buffers_operations;

// Simple re-exports
pub use gpu_buffer::{GpuBuffer, GpuFloatBuffer, GpuIntBuffer};
pub use model_buffers_data::{ModelBufferStats, ModelBuffersData};
