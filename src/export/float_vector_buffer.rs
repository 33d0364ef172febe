//! Dimension-aware float stream for the binary export format.

use crate::constants::export_limits::{BYTES_PER_FLOAT, STAGING_CAPACITY_BYTES};
use crate::error::{GeometryError, GeometryResult};

/// Accumulates fixed-width float tuples into a contiguous little-endian
/// byte stream, tracking per-dimension bounds as components arrive.
///
/// Components are appended one at a time in dimension order; the intra-tuple
/// position wraps every `dims` appends. Completed tuples are staged in a
/// small scratch region and flushed into the committed stream when the
/// region cannot hold another full tuple; each replacement region grows in
/// proportion to the bytes committed so far, so appends stay amortized O(1)
/// with at most one reallocation per completed tuple.
///
/// Bounds use `f32::min`/`f32::max`: a NaN component never becomes a bound
/// (a dimension fed only NaN keeps its infinite initial values), while
/// infinite components propagate. Sanitizing non-finite input is a policy
/// for the layer above this buffer.
///
/// This is a one-shot object: after `get_bytes` the buffer is closed and
/// any further `add` panics. Single producer only; `&mut self` receivers
/// make concurrent appends unrepresentable.
pub struct FloatVectorBuffer {
    dims: usize,
    min: Vec<f32>,
    max: Vec<f32>,

    /// Committed little-endian stream.
    committed: Vec<u8>,
    committed_floats: usize,

    /// Staged components not yet committed.
    staging: Vec<f32>,
    /// Capacity of the staging region in floats. Zero once finalized.
    staging_capacity: usize,

    /// Intra-tuple position of the next component.
    pos: usize,
}

impl FloatVectorBuffer {
    /// Create a buffer for `dims`-component tuples.
    pub fn new(dims: usize) -> GeometryResult<Self> {
        Self::with_staging_bytes(dims, STAGING_CAPACITY_BYTES)
    }

    /// Create a buffer with a configured starting staging size.
    pub fn with_staging_bytes(dims: usize, staging_bytes: usize) -> GeometryResult<Self> {
        if dims == 0 {
            return Err(GeometryError::InvalidDims);
        }

        // The staging region must hold at least one full tuple.
        let staging_capacity = (staging_bytes / BYTES_PER_FLOAT).max(dims);

        Ok(Self {
            dims,
            min: vec![f32::INFINITY; dims],
            max: vec![f32::NEG_INFINITY; dims],
            committed: Vec::new(),
            committed_floats: 0,
            staging: Vec::with_capacity(staging_capacity),
            staging_capacity,
            pos: 0,
        })
    }

    /// Append one component of the current tuple.
    pub fn add(&mut self, value: f32) {
        assert!(
            self.staging_capacity != 0,
            "FloatVectorBuffer written after finalization"
        );

        self.staging.push(value);
        self.min[self.pos] = self.min[self.pos].min(value);
        self.max[self.pos] = self.max[self.pos].max(value);

        self.pos += 1;
        if self.pos == self.dims {
            self.pos = 0;

            if self.staging.len() + self.dims > self.staging_capacity {
                self.flush_staging();
            }
        }
    }

    /// Flush staged components into the committed stream and allocate a
    /// larger staging region sized from the data committed so far.
    fn flush_staging(&mut self) {
        self.commit_staged();
        self.staging_capacity = (STAGING_CAPACITY_BYTES + self.committed.len()) / BYTES_PER_FLOAT;
        self.staging = Vec::with_capacity(self.staging_capacity);
        log::trace!(
            "[FloatVectorBuffer] flushed to {}B committed, staging grows to {} floats",
            self.committed.len(),
            self.staging_capacity
        );
    }

    fn commit_staged(&mut self) {
        self.committed.reserve(self.staging.len() * BYTES_PER_FLOAT);
        for value in &self.staging {
            self.committed.extend_from_slice(&value.to_le_bytes());
        }
        self.committed_floats += self.staging.len();
    }

    /// Tuple width this buffer was constructed with.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Total complete tuples committed, including staged ones. O(1).
    pub fn size(&self) -> usize {
        (self.committed_floats + self.staging.len()) / self.dims
    }

    /// Per-dimension minimum of every component seen so far.
    pub fn min(&self) -> &[f32] {
        &self.min
    }

    /// Per-dimension maximum of every component seen so far.
    pub fn max(&self) -> &[f32] {
        &self.max
    }

    /// Extract the full committed byte stream and close the buffer.
    ///
    /// Any staged components are flushed first, including a trailing
    /// partial tuple's raw bytes; keeping appends tuple-aligned before
    /// finalizing is the caller's responsibility. Further `add` calls
    /// panic.
    pub fn get_bytes(&mut self) -> Vec<u8> {
        if !self.staging.is_empty() {
            self.commit_staged();
        }

        // Close the buffer to further writes.
        self.staging = Vec::new();
        self.staging_capacity = 0;

        std::mem::take(&mut self.committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_bounds_and_byte_length() {
        let mut buffer = FloatVectorBuffer::new(3).expect("dims");
        for tuple in [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [-1.0, 0.0, 7.0]] {
            for component in tuple {
                buffer.add(component);
            }
        }

        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer.min(), &[-1.0, 0.0, 3.0]);
        assert_eq!(buffer.max(), &[4.0, 5.0, 7.0]);

        let bytes = buffer.get_bytes();
        assert_eq!(bytes.len(), 36);
        assert_eq!(buffer.size(), 3);
    }

    #[test]
    fn test_round_trip_bit_exact() {
        let values: Vec<f32> = (0..300).map(|i| (i as f32) * 0.37 - 55.5).collect();
        let mut buffer = FloatVectorBuffer::new(2).expect("dims");
        for &value in &values {
            buffer.add(value);
        }

        let bytes = buffer.get_bytes();
        assert_eq!(bytes.len(), values.len() * 4);

        let decoded: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|raw| f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
            .collect();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_growth_across_many_flushes() {
        // Enough tuples to force several staging replacements.
        let mut buffer = FloatVectorBuffer::new(3).expect("dims");
        let tuples = 10_000;
        for i in 0..tuples {
            buffer.add(i as f32);
            buffer.add(-(i as f32));
            buffer.add(0.5);
        }

        assert_eq!(buffer.size(), tuples);
        assert_eq!(buffer.get_bytes().len(), tuples * 3 * 4);
    }

    #[test]
    fn test_zero_dims_rejected() {
        assert!(FloatVectorBuffer::new(0).is_err());
    }

    #[test]
    fn test_partial_tuple_flushed_raw() {
        let mut buffer = FloatVectorBuffer::new(3).expect("dims");
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buffer.add(value);
        }

        // One complete tuple, two trailing components.
        assert_eq!(buffer.size(), 1);
        let bytes = buffer.get_bytes();
        assert_eq!(bytes.len(), 5 * 4);
        assert_eq!(buffer.size(), 1);
    }

    #[test]
    #[should_panic(expected = "written after finalization")]
    fn test_add_after_finalize_panics() {
        let mut buffer = FloatVectorBuffer::new(3).expect("dims");
        buffer.add(1.0);
        buffer.add(2.0);
        buffer.add(3.0);
        let _ = buffer.get_bytes();
        buffer.add(4.0);
    }

    #[test]
    fn test_nan_does_not_become_a_bound() {
        let mut buffer = FloatVectorBuffer::new(1).expect("dims");
        buffer.add(2.0);
        buffer.add(f32::NAN);
        buffer.add(-3.0);

        assert_eq!(buffer.min(), &[-3.0]);
        assert_eq!(buffer.max(), &[2.0]);
    }

    #[test]
    fn test_all_nan_dimension_keeps_initial_bounds() {
        let mut buffer = FloatVectorBuffer::new(1).expect("dims");
        buffer.add(f32::NAN);

        assert_eq!(buffer.min(), &[f32::INFINITY]);
        assert_eq!(buffer.max(), &[f32::NEG_INFINITY]);
    }

    #[test]
    fn test_infinity_propagates_into_bounds() {
        let mut buffer = FloatVectorBuffer::new(1).expect("dims");
        buffer.add(1.0);
        buffer.add(f32::NEG_INFINITY);

        assert_eq!(buffer.min(), &[f32::NEG_INFINITY]);
        assert_eq!(buffer.max(), &[1.0]);
    }

    #[test]
    fn test_single_value_is_both_bounds() {
        let mut buffer = FloatVectorBuffer::new(2).expect("dims");
        buffer.add(5.5);
        buffer.add(-2.25);

        assert_eq!(buffer.min(), &[5.5, -2.25]);
        assert_eq!(buffer.max(), &[5.5, -2.25]);
    }
}
