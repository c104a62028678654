//! Ring delay buffer
//!
//! Fixed-capacity circular sample store with an advancing write cursor and
//! reads at a caller-chosen delay behind it. This is the building block for
//! delay lines and for time-aligning signals in the audio graph.
//!
//! The render path calls [`RingDelayBuffer::write`] once per block and any
//! number of [`RingDelayBuffer::read`] calls follow on the same thread.
//! Nothing here allocates, locks or blocks after construction, and there is
//! no internal synchronisation: the buffer is owned by exactly one processing
//! node and is not meant to be shared between threads.
//!
//! # Contract
//!
//! - a write must not exceed `capacity` samples
//! - a read of `L` samples at `delay` must satisfy `delay + L <= capacity`
//!
//! Violations panic in debug builds. Release builds log a warning and
//! degrade: an oversized write keeps only its newest `capacity` samples, an
//! oversized read is clamped to the buffer and the rest of the output is
//! filled with silence.
//!
//! The first block written after construction or [`RingDelayBuffer::clear`]
//! is faded in with a linear gain ramp so that a delay line starting
//! mid-signal does not click.

use crate::error::{DelayError, DelayResult};
use crate::sample_util::{copy_wrapped_in, copy_wrapped_out, GainRamp};
use crate::types::{Sample, SILENCE};

/// Circular buffer of samples with variable-delay reads
#[derive(Debug, Clone)]
pub struct RingDelayBuffer {
    /// Sample storage, allocated once
    buffer: Box<[Sample]>,
    /// Next storage index to write (always < capacity)
    write_pos: usize,
    /// Whether the first block after construction/clear is faded in
    fade_in: bool,
    /// The next non-empty write is the first block
    first_input_chunk: bool,
}

impl RingDelayBuffer {
    /// Create a new delay buffer holding `capacity` samples
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Delay buffer capacity must be greater than zero");
        Self::allocate(capacity, true)
    }

    /// Create a new delay buffer, rejecting a zero capacity
    pub fn try_new(capacity: usize) -> DelayResult<Self> {
        if capacity == 0 {
            return Err(DelayError::ZeroCapacity);
        }
        Ok(Self::allocate(capacity, true))
    }

    /// Create a delay buffer that stores the first block unmodified
    ///
    /// Panics if `capacity` is zero.
    pub fn without_fade_in(capacity: usize) -> Self {
        assert!(capacity > 0, "Delay buffer capacity must be greater than zero");
        Self::allocate(capacity, false)
    }

    fn allocate(capacity: usize, fade_in: bool) -> Self {
        Self {
            buffer: vec![SILENCE; capacity].into_boxed_slice(),
            write_pos: 0,
            fade_in,
            first_input_chunk: fade_in,
        }
    }

    /// Number of sample slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Storage index the next write starts at
    #[inline]
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    /// Whether the first block after construction/clear gets faded in
    #[inline]
    pub fn fades_in(&self) -> bool {
        self.fade_in
    }

    /// Write a block of samples at the cursor and advance it
    ///
    /// Returns the number of samples written, which is always `input.len()`.
    pub fn write(&mut self, input: &[Sample]) -> usize {
        let written = input.len();
        if written == 0 {
            return 0;
        }

        let capacity = self.capacity();
        debug_assert!(
            written <= capacity,
            "RingDelayBuffer::write: {} samples exceed capacity {}",
            written,
            capacity
        );

        // Samples that would be overwritten within this same call are skipped
        let skipped = written.saturating_sub(capacity);
        if skipped > 0 {
            log::warn!(
                "RingDelayBuffer::write: {} samples exceed capacity {}, keeping newest {}",
                written,
                capacity,
                capacity
            );
        }
        let retained = &input[skipped..];
        let start = (self.write_pos + skipped) % capacity;
        let first = copy_wrapped_in(&mut self.buffer, start, retained);

        if self.first_input_chunk {
            let ramp = GainRamp::new(0.0, 1.0, written);
            ramp.apply(&mut self.buffer[start..start + first], skipped);
            ramp.apply(&mut self.buffer[..retained.len() - first], skipped + first);
            self.first_input_chunk = false;
        }

        self.write_pos = (self.write_pos + written) % capacity;
        written
    }

    /// Read `output.len()` samples ending `delay` samples behind the cursor
    ///
    /// A delay of 0 returns the most recently written samples. Slots that were
    /// never written read as silence. Does not move the cursor, so repeated
    /// reads without an intervening write return the same data.
    ///
    /// Returns the number of samples read.
    pub fn read(&self, output: &mut [Sample], delay: usize) -> usize {
        let capacity = self.capacity();
        let requested = output.len();
        let in_range = delay <= capacity && requested <= capacity - delay;
        debug_assert!(
            in_range,
            "RingDelayBuffer::read: delay {} + {} samples exceed capacity {}",
            delay,
            requested,
            capacity
        );

        let (len, delay) = if in_range {
            (requested, delay)
        } else {
            log::warn!(
                "RingDelayBuffer::read: delay {} + {} samples exceed capacity {}, clamping",
                delay,
                requested,
                capacity
            );
            let len = requested.min(capacity);
            output[len..].fill(SILENCE);
            (len, delay.min(capacity - len))
        };
        if len == 0 {
            return 0;
        }

        // delay + len <= capacity, so this never underflows
        let start = (self.write_pos + capacity - (delay + len)) % capacity;
        copy_wrapped_out(&self.buffer, start, &mut output[..len]);
        len
    }

    /// Check up front that reads of `len` samples at `delay` stay in range
    ///
    /// Callers size their blocks and delays once, outside the audio thread;
    /// this turns a would-be contract violation into an error there.
    pub fn ensure_fits(&self, delay: usize, len: usize) -> DelayResult<()> {
        let required = delay.saturating_add(len);
        if required > self.capacity() {
            return Err(DelayError::CapacityTooSmall {
                required,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Silence every slot and rewind the cursor without reallocating
    pub fn clear(&mut self) {
        self.buffer.fill(SILENCE);
        self.write_pos = 0;
        self.first_input_chunk = self.fade_in;
    }
}
