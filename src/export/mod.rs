//! Static export pipeline - attribute stream serialization with bounds

pub mod float_vector_buffer;
pub mod gltf;

// Simple re-exports
pub use float_vector_buffer::FloatVectorBuffer;
pub use gltf::{Accessor, BufferView, Manifest, COMPONENT_TYPE_FLOAT};
