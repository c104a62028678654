//! Fixed-size owned sample buffer
//!
//! A heap-allocated, zero-initialised array of samples whose length is fixed
//! at construction. Callers allocate these up front and hand slices of them to
//! the delay buffer on the audio thread.

use std::ops::{Deref, DerefMut};

use crate::types::{as_frames, as_frames_mut, Sample, StereoSample, SILENCE};

/// Owned buffer of samples with a fixed length
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleBuffer {
    samples: Box<[Sample]>,
}

impl SampleBuffer {
    /// Create a buffer of `len` silent samples
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![SILENCE; len].into_boxed_slice(),
        }
    }

    /// Number of samples in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Sample] {
        &mut self.samples
    }

    /// Fill every sample with `value` (real-time safe)
    #[inline]
    pub fn fill(&mut self, value: Sample) {
        self.samples.fill(value);
    }

    /// Fill the buffer with silence (real-time safe)
    #[inline]
    pub fn clear(&mut self) {
        self.fill(SILENCE);
    }

    /// Zero-copy view as stereo frames
    ///
    /// Panics if the buffer length is odd.
    #[inline]
    pub fn as_frames(&self) -> &[StereoSample] {
        as_frames(&self.samples)
    }

    /// Zero-copy mutable view as stereo frames
    ///
    /// Panics if the buffer length is odd.
    #[inline]
    pub fn as_frames_mut(&mut self) -> &mut [StereoSample] {
        as_frames_mut(&mut self.samples)
    }
}

impl Deref for SampleBuffer {
    type Target = [Sample];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

impl DerefMut for SampleBuffer {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.samples
    }
}

impl From<&[Sample]> for SampleBuffer {
    fn from(samples: &[Sample]) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}

impl From<Vec<Sample>> for SampleBuffer {
    fn from(samples: Vec<Sample>) -> Self {
        Self {
            samples: samples.into_boxed_slice(),
        }
    }
}
