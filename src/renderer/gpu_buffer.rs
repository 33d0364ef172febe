//! Growable staging buffers for geometry headed to the graphics device.
//!
//! Write-then-read lifecycle: append during frame assembly, `flip` once the
//! frame's writes are complete, read the flipped view for upload, `clear` to
//! begin the next frame. The caller enforces a strict producer-then-consumer
//! ordering; these buffers are single-threaded by contract and only detect
//! phase misuse, they do not synchronize it.

use bytemuck::Pod;

/// Next capacity that fits `required_capacity`, doubling from the current
/// one. `None` when the buffer is already large enough.
fn grow_amortized(current_capacity: usize, required_capacity: usize) -> Option<usize> {
    if current_capacity >= required_capacity {
        return None;
    }

    let mut new_capacity = current_capacity.max(2);
    while new_capacity < required_capacity {
        new_capacity *= 2;
    }

    Some(new_capacity)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Write,
    Read,
}

/// Append-only growable buffer with an explicit write-to-read transition.
pub struct GpuBuffer<T> {
    data: Vec<T>,
    phase: Phase,
}

/// Staging buffer for packed vertex records and draw records.
pub type GpuIntBuffer = GpuBuffer<i32>;

/// Staging buffer for texture coordinate streams.
pub type GpuFloatBuffer = GpuBuffer<f32>;

impl<T: Pod> GpuBuffer<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            phase: Phase::Write,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            phase: Phase::Write,
        }
    }

    /// Grow so that `additional` more elements fit without reallocating.
    pub fn ensure_capacity(&mut self, additional: usize) {
        let required = self.data.len() + additional;
        if let Some(new_capacity) = grow_amortized(self.data.capacity(), required) {
            self.data.reserve_exact(new_capacity - self.data.len());
        }
    }

    /// Append a single element.
    pub fn push(&mut self, value: T) {
        debug_assert!(self.phase == Phase::Write, "GpuBuffer push after flip");
        self.ensure_capacity(1);
        self.data.push(value);
    }

    /// Append a slice of elements.
    pub fn put(&mut self, values: &[T]) {
        debug_assert!(self.phase == Phase::Write, "GpuBuffer put after flip");
        self.ensure_capacity(values.len());
        self.data.extend_from_slice(values);
    }

    /// Reset to empty write mode, retaining capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.phase = Phase::Write;
    }

    /// Finalize the written region into a readable view.
    pub fn flip(&mut self) {
        self.phase = Phase::Read;
    }

    /// The readable view of the buffer. Valid only after `flip`.
    pub fn slice(&self) -> &[T] {
        assert!(self.phase == Phase::Read, "GpuBuffer read before flip");
        &self.data
    }

    /// The readable view reinterpreted as bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.slice())
    }

    /// Number of elements written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl<T: Pod> Default for GpuBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
