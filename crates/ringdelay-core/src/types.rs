//! Common types for ringdelay
//!
//! Fundamental sample types shared by the delay buffer, the latency
//! compensator and the sample utilities.

/// Default sample rate (48kHz - standard professional audio rate)
pub const SAMPLE_RATE: u32 = 48000;

/// Number of interleaved channels in a frame (stereo)
pub const CHANNELS: usize = 2;

/// Maximum latency for compensation, in frames (100ms @ 48kHz)
pub const MAX_LATENCY_FRAMES: usize = 4800;

/// Largest block the render path hands to a delay line in one call, in frames
pub const MAX_BLOCK_FRAMES: usize = 1024;

/// Audio sample type (32-bit float)
pub type Sample = f32;

/// Silence
pub const SILENCE: Sample = 0.0;

/// A single stereo frame (left and right channels)
///
/// Uses `#[repr(C)]` to ensure predictable memory layout: [left, right].
/// This enables zero-copy conversion between `&[StereoSample]` and `&[f32]`
/// (interleaved format) using bytemuck.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StereoSample {
    pub left: Sample,
    pub right: Sample,
}

impl StereoSample {
    /// Create a new stereo sample
    #[inline]
    pub fn new(left: Sample, right: Sample) -> Self {
        Self { left, right }
    }

    /// Create a silent stereo sample
    #[inline]
    pub fn silence() -> Self {
        Self::default()
    }

    /// Scale both channels by a factor
    #[inline]
    pub fn scale(&self, factor: Sample) -> Self {
        Self {
            left: self.left * factor,
            right: self.right * factor,
        }
    }
}

impl std::ops::MulAssign<Sample> for StereoSample {
    #[inline]
    fn mul_assign(&mut self, factor: Sample) {
        self.left *= factor;
        self.right *= factor;
    }
}

/// View an interleaved sample slice as stereo frames
///
/// Panics if the slice length is odd.
#[inline]
pub fn as_frames(samples: &[Sample]) -> &[StereoSample] {
    bytemuck::cast_slice(samples)
}

/// View an interleaved mutable sample slice as stereo frames
///
/// Panics if the slice length is odd.
#[inline]
pub fn as_frames_mut(samples: &mut [Sample]) -> &mut [StereoSample] {
    bytemuck::cast_slice_mut(samples)
}

/// Convert a frame count to an interleaved sample count
#[inline]
pub const fn frames_to_samples(frames: usize) -> usize {
    frames * CHANNELS
}
