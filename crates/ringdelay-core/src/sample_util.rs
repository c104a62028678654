//! Sample slice utilities
//!
//! Gain ramps over interleaved stereo samples and the wrapping copy helpers
//! used by the ring delay buffer. Everything here is real-time safe: no
//! allocation, no locking.

use crate::types::{Sample, CHANNELS, SILENCE};

const GAIN_ZERO: Sample = 0.0;
const GAIN_ONE: Sample = 1.0;

/// Linear gain ramp over the stereo frames of a block
///
/// The gain steps once per frame and reaches `new_gain` on the last frame
/// of the block, so the first frame is already one step away from
/// `old_gain`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainRamp {
    start_gain: Sample,
    gain_delta: Sample,
    frames: usize,
}

impl GainRamp {
    /// Ramp from `old_gain` to `new_gain` across `num_samples` interleaved samples
    pub fn new(old_gain: Sample, new_gain: Sample, num_samples: usize) -> Self {
        let frames = num_samples / CHANNELS;
        let gain_delta = if frames == 0 {
            0.0
        } else {
            (new_gain - old_gain) / frames as Sample
        };
        Self {
            start_gain: old_gain + gain_delta,
            gain_delta,
            frames,
        }
    }

    /// Number of frames the ramp spans
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Gain applied to the given frame
    #[inline]
    pub fn gain_at(&self, frame: usize) -> Sample {
        self.start_gain + self.gain_delta * frame as Sample
    }

    /// Apply the ramp to a segment of the block
    ///
    /// `offset` is the index of `segment[0]` within the whole block, which
    /// lets a block stored in two wrapped segments be ramped piecewise.
    /// Samples past the last full frame are left untouched.
    pub fn apply(&self, segment: &mut [Sample], offset: usize) {
        for (i, sample) in segment.iter_mut().enumerate() {
            let frame = (offset + i) / CHANNELS;
            if frame >= self.frames {
                break;
            }
            *sample *= self.gain_at(frame);
        }
    }
}

/// Multiply every sample by a constant gain
#[inline]
pub fn apply_gain(buffer: &mut [Sample], gain: Sample) {
    if gain == GAIN_ONE {
        return;
    }
    if gain == GAIN_ZERO {
        buffer.fill(SILENCE);
        return;
    }
    for sample in buffer.iter_mut() {
        *sample *= gain;
    }
}

/// Apply a linear gain ramp from `old_gain` to `new_gain` over a stereo block
pub fn apply_ramping_gain(buffer: &mut [Sample], old_gain: Sample, new_gain: Sample) {
    if old_gain == GAIN_ONE && new_gain == GAIN_ONE {
        return;
    }
    if old_gain == GAIN_ZERO && new_gain == GAIN_ZERO {
        buffer.fill(SILENCE);
        return;
    }

    let ramp = GainRamp::new(old_gain, new_gain, buffer.len());
    if ramp.frames() == 0 {
        return;
    }
    if old_gain == new_gain {
        apply_gain(buffer, old_gain);
        return;
    }
    ramp.apply(buffer, 0);
}

/// Copy `input` into `ring` starting at `start`, wrapping at the end
///
/// Returns the length of the first (pre-wrap) segment.
/// `input.len()` must not exceed `ring.len()`.
#[inline]
pub fn copy_wrapped_in(ring: &mut [Sample], start: usize, input: &[Sample]) -> usize {
    debug_assert!(input.len() <= ring.len());
    debug_assert!(start < ring.len());
    let first = input.len().min(ring.len() - start);
    let (head, tail) = input.split_at(first);
    ring[start..start + first].copy_from_slice(head);
    ring[..tail.len()].copy_from_slice(tail);
    first
}

/// Copy from `ring` starting at `start` into `output`, wrapping at the end
///
/// `output.len()` must not exceed `ring.len()`.
#[inline]
pub fn copy_wrapped_out(ring: &[Sample], start: usize, output: &mut [Sample]) {
    debug_assert!(output.len() <= ring.len());
    debug_assert!(start < ring.len());
    let first = output.len().min(ring.len() - start);
    let (head, tail) = output.split_at_mut(first);
    head.copy_from_slice(&ring[start..start + first]);
    let tail_len = tail.len();
    tail.copy_from_slice(&ring[..tail_len]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_reaches_unity_on_last_frame() {
        let mut buffer = [-100.0, 100.0, -99.0, 99.0];
        apply_ramping_gain(&mut buffer, 0.0, 1.0);
        assert_eq!(buffer, [-50.0, 50.0, -99.0, 99.0]);
    }

    #[test]
    fn test_fade_out() {
        let mut buffer = [1.0; 8];
        apply_ramping_gain(&mut buffer, 1.0, 0.0);
        assert_eq!(buffer, [0.75, 0.75, 0.5, 0.5, 0.25, 0.25, 0.0, 0.0]);
    }

    #[test]
    fn test_unity_ramp_is_untouched() {
        let mut buffer = [0.3, -0.3];
        apply_ramping_gain(&mut buffer, 1.0, 1.0);
        assert_eq!(buffer, [0.3, -0.3]);
    }

    #[test]
    fn test_zero_ramp_clears() {
        let mut buffer = [0.3, -0.3, 0.1];
        apply_ramping_gain(&mut buffer, 0.0, 0.0);
        assert_eq!(buffer, [0.0; 3]);
    }

    #[test]
    fn test_constant_gain_ramp() {
        let mut buffer = [2.0, -2.0];
        apply_ramping_gain(&mut buffer, 0.5, 0.5);
        assert_eq!(buffer, [1.0, -1.0]);
    }

    #[test]
    fn test_single_sample_is_untouched() {
        let mut buffer = [0.7];
        apply_ramping_gain(&mut buffer, 0.0, 1.0);
        assert_eq!(buffer, [0.7]);
    }

    #[test]
    fn test_odd_trailing_sample_is_untouched() {
        let mut buffer = [4.0, 4.0, 4.0];
        apply_ramping_gain(&mut buffer, 0.0, 1.0);
        assert_eq!(buffer, [4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_ramp_applied_piecewise_matches_whole() {
        let mut whole = [1.0; 8];
        apply_ramping_gain(&mut whole, 0.0, 1.0);

        let mut pieces = [1.0; 8];
        let ramp = GainRamp::new(0.0, 1.0, pieces.len());
        let (a, b) = pieces.split_at_mut(3);
        ramp.apply(a, 0);
        ramp.apply(b, 3);

        assert_eq!(whole, pieces);
    }

    #[test]
    fn test_copy_wrapped_in_splits_at_end() {
        let mut ring = [0.0; 5];
        let first = copy_wrapped_in(&mut ring, 3, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(first, 2);
        assert_eq!(ring, [3.0, 4.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_copy_wrapped_out_splits_at_end() {
        let ring = [3.0, 4.0, 0.0, 1.0, 2.0];
        let mut output = [0.0; 4];
        copy_wrapped_out(&ring, 3, &mut output);
        assert_eq!(output, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_copy_wrapped_contiguous() {
        let mut ring = [0.0; 4];
        assert_eq!(copy_wrapped_in(&mut ring, 0, &[1.0, 2.0]), 2);
        let mut output = [0.0; 2];
        copy_wrapped_out(&ring, 0, &mut output);
        assert_eq!(output, [1.0, 2.0]);
    }
}
