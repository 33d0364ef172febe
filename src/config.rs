//! Geometry configuration
//!
//! Loaded once at startup by the embedding renderer; the buffering core
//! itself never re-reads configuration mid-frame.

use serde::{Deserialize, Serialize};

use crate::constants::{export_limits, model_limits};

/// Initial capacities for the frame buffers and export staging region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Initial capacity of the temporary scene vertex buffer, in ints.
    pub scratch_vertex_capacity: usize,

    /// Initial capacity of the temporary scene uv buffer, in floats.
    pub scratch_uv_capacity: usize,

    /// Initial capacity of each model destination buffer, in ints.
    pub model_record_capacity: usize,

    /// Starting size of an export buffer's staging region, in bytes.
    pub export_staging_bytes: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            scratch_vertex_capacity: 65536,
            scratch_uv_capacity: 65536,
            model_record_capacity: 8192,
            export_staging_bytes: export_limits::STAGING_CAPACITY_BYTES,
        }
    }
}

impl GeometryConfig {
    /// Parse and validate a configuration from TOML. Missing fields fall
    /// back to their defaults.
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let config: GeometryConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.scratch_vertex_capacity == 0 {
            return Err(anyhow::anyhow!(
                "GeometryConfig: scratch_vertex_capacity cannot be 0"
            ));
        }

        if self.scratch_uv_capacity == 0 {
            return Err(anyhow::anyhow!(
                "GeometryConfig: scratch_uv_capacity cannot be 0"
            ));
        }

        if self.model_record_capacity == 0 {
            return Err(anyhow::anyhow!(
                "GeometryConfig: model_record_capacity cannot be 0"
            ));
        }

        // The scratch buffer must be able to hold at least one model at the
        // documented triangle ceiling without growing mid-assembly.
        let ints_per_max_model = model_limits::MAX_TRIANGLE as usize
            * model_limits::VERTICES_PER_TRIANGLE
            * model_limits::INTS_PER_VERTEX;
        if self.scratch_vertex_capacity < ints_per_max_model {
            return Err(anyhow::anyhow!(
                "GeometryConfig: scratch_vertex_capacity {} cannot hold a {}-triangle model ({} ints required)",
                self.scratch_vertex_capacity,
                model_limits::MAX_TRIANGLE,
                ints_per_max_model
            ));
        }

        if self.export_staging_bytes % export_limits::BYTES_PER_FLOAT != 0 {
            return Err(anyhow::anyhow!(
                "GeometryConfig: export_staging_bytes {} is not a multiple of {}",
                self.export_staging_bytes,
                export_limits::BYTES_PER_FLOAT
            ));
        }

        if self.export_staging_bytes < 4 * export_limits::BYTES_PER_FLOAT {
            return Err(anyhow::anyhow!(
                "GeometryConfig: export_staging_bytes {} is too small to stage one vec4 tuple",
                self.export_staging_bytes
            ));
        }

        log::info!(
            "[GeometryConfig] Validation: scratch_vertex={}, scratch_uv={}, model_records={}, export_staging={}B",
            self.scratch_vertex_capacity,
            self.scratch_uv_capacity,
            self.model_record_capacity,
            self.export_staging_bytes
        );

        Ok(())
    }
}
