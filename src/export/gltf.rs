//! In-memory glTF-style manifest for exported attribute streams.
//!
//! Collects finished [`FloatVectorBuffer`] streams into one binary blob and
//! the accessor/buffer-view records describing them, with each stream's
//! bounds carried into its accessor `min`/`max`. Writing the manifest and
//! blob to disk belongs to the embedding exporter.

use serde::Serialize;

use crate::error::{GeometryError, GeometryResult};

use super::float_vector_buffer::FloatVectorBuffer;

/// GL component type for 32-bit IEEE floats.
pub const COMPONENT_TYPE_FLOAT: u32 = 5126;

#[derive(Debug, Serialize)]
struct Asset {
    version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferEntry {
    pub byte_length: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: usize,
    pub byte_offset: usize,
    pub byte_length: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: usize,
    pub component_type: u32,
    pub count: usize,
    #[serde(rename = "type")]
    pub accessor_type: &'static str,
    pub min: Vec<f32>,
    pub max: Vec<f32>,
    pub name: String,
}

fn accessor_type_for_dims(dims: usize) -> GeometryResult<&'static str> {
    match dims {
        1 => Ok("SCALAR"),
        2 => Ok("VEC2"),
        3 => Ok("VEC3"),
        4 => Ok("VEC4"),
        other => Err(GeometryError::UnsupportedAccessorDims(other)),
    }
}

/// Manifest under construction: one binary blob plus its access records.
pub struct Manifest {
    accessors: Vec<Accessor>,
    buffer_views: Vec<BufferView>,
    bin: Vec<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestDoc<'a> {
    asset: Asset,
    buffers: Vec<BufferEntry>,
    buffer_views: &'a [BufferView],
    accessors: &'a [Accessor],
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            accessors: Vec::new(),
            buffer_views: Vec::new(),
            bin: Vec::new(),
        }
    }

    /// Finalize an attribute stream into the manifest.
    ///
    /// Appends the stream's bytes to the binary blob and records a buffer
    /// view and an accessor whose bounds come from the stream. Returns the
    /// accessor index.
    pub fn push_vec_stream(
        &mut self,
        name: &str,
        mut stream: FloatVectorBuffer,
    ) -> GeometryResult<usize> {
        let accessor_type = accessor_type_for_dims(stream.dims())?;

        let bytes = stream.get_bytes();
        let byte_offset = self.bin.len();
        let count = stream.size();

        self.buffer_views.push(BufferView {
            buffer: 0,
            byte_offset,
            byte_length: bytes.len(),
        });
        self.accessors.push(Accessor {
            buffer_view: self.buffer_views.len() - 1,
            component_type: COMPONENT_TYPE_FLOAT,
            count,
            accessor_type,
            min: stream.min().to_vec(),
            max: stream.max().to_vec(),
            name: name.to_string(),
        });
        self.bin.extend_from_slice(&bytes);

        log::debug!(
            "[Manifest] stream '{}': {} {} tuples, {}B at offset {}",
            name,
            count,
            accessor_type,
            bytes.len(),
            byte_offset
        );

        Ok(self.accessors.len() - 1)
    }

    /// The accumulated binary blob.
    pub fn bin(&self) -> &[u8] {
        &self.bin
    }

    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Serialize the manifest document as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ManifestDoc {
            asset: Asset { version: "2.0" },
            buffers: vec![BufferEntry {
                byte_length: self.bin.len(),
            }],
            buffer_views: &self.buffer_views,
            accessors: &self.accessors,
        })
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}
