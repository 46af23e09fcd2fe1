// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe set resolution.
//!
//! Works out which times a key-time export samples:
//! - The union, by frame, of the six spatial channels' keys
//! - Ease-in/ease-out detection on the translation channels
//! - Per-index sample times (earliest i-th key across channels)

use crate::camera::{Camera, ChannelName, Keyframe};
use crate::error::{ExportError, ExportResult};

/// Whether the first/last two translation keys repeat their values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EaseFlags {
    /// First two keys share values on tx, ty and tz
    pub ease_in: bool,
    /// Last two keys share values on tx, ty and tz
    pub ease_out: bool,
}

impl EaseFlags {
    /// Detect ease flags on the translation channels.
    ///
    /// Both flags are false when any channel has fewer than two keys.
    pub fn detect(translation: &[&[Keyframe]; 3]) -> Self {
        if translation.iter().any(|keys| keys.len() < 2) {
            return Self::default();
        }

        let ease_in = translation.iter().all(|keys| keys[0].value == keys[1].value);
        let ease_out = translation.iter().all(|keys| {
            let n = keys.len();
            keys[n - 1].value == keys[n - 2].value
        });

        Self { ease_in, ease_out }
    }

    /// Number of samples suppressed by these flags
    pub fn suppressed(&self) -> usize {
        usize::from(self.ease_in) + usize::from(self.ease_out)
    }
}

/// Keyframes of the channels that drive key-time sampling
#[derive(Debug, Clone, Copy)]
pub struct ChannelKeys<'a> {
    /// tx, ty, tz
    pub translation: [&'a [Keyframe]; 3],
    /// rx, ry, rz
    pub rotation: [&'a [Keyframe]; 3],
    /// Aperture keys; contribute sample times but not to the union
    pub aperture: &'a [Keyframe],
}

impl<'a> ChannelKeys<'a> {
    /// Gather keys from a camera, failing if any translation channel is empty
    pub fn from_camera<C: Camera + ?Sized>(camera: &'a C) -> ExportResult<Self> {
        for channel in ChannelName::TRANSLATION {
            if camera.keyframes(channel).is_empty() {
                return Err(ExportError::MissingKeyframes {
                    camera: camera.path().to_string(),
                    channel,
                });
            }
        }

        Ok(Self {
            translation: ChannelName::TRANSLATION.map(|c| camera.keyframes(c)),
            rotation: ChannelName::ROTATION.map(|c| camera.keyframes(c)),
            aperture: camera.keyframes(ChannelName::Aperture),
        })
    }

    /// The six spatial channels in tx..rz order
    pub fn spatial(&self) -> impl Iterator<Item = &'a [Keyframe]> + '_ {
        self.translation.iter().chain(self.rotation.iter()).copied()
    }

    /// Sorted, deduplicated frames keyed on any spatial channel
    pub fn frame_union(&self) -> Vec<f64> {
        let mut frames: Vec<f64> = self
            .spatial()
            .flat_map(|keys| keys.iter().map(|k| k.frame))
            .collect();
        frames.sort_by(f64::total_cmp);
        frames.dedup();
        frames
    }

    /// Highest keyed frame across the spatial channels
    pub fn last_frame(&self) -> Option<f64> {
        self.spatial()
            .flat_map(|keys| keys.iter().map(|k| k.frame))
            .max_by(f64::total_cmp)
    }

    /// Earliest time among the `index`-th keys of every channel long enough to have one
    pub fn sample_time(&self, index: usize) -> Option<f64> {
        self.spatial()
            .chain(std::iter::once(self.aperture))
            .filter_map(|keys| keys.get(index).map(|k| k.time))
            .min_by(f64::total_cmp)
    }
}

/// Resolved sampling plan for a key-time export
#[derive(Debug, Clone, PartialEq)]
pub struct KeySet {
    /// Distinct keyed frames across the spatial channels
    pub frames: Vec<f64>,
    /// Ease flags of the translation channels
    pub ease: EaseFlags,
    /// Times to sample, in union order, after ease suppression and skips
    pub sample_times: Vec<f64>,
}

impl KeySet {
    /// Resolve the sampling plan from a camera's channel keys
    pub fn resolve(keys: &ChannelKeys<'_>) -> Self {
        let frames = keys.frame_union();
        let ease = EaseFlags::detect(&keys.translation);
        if ease.ease_in || ease.ease_out {
            tracing::debug!(ease_in = ease.ease_in, ease_out = ease.ease_out, "Ease keys detected");
        }

        let count = frames.len();
        let sample_times = (0..count)
            .filter(|&i| !(ease.ease_in && i == 0) && !(ease.ease_out && i + 1 == count))
            .filter_map(|i| {
                let time = keys.sample_time(i);
                if time.is_none() {
                    // Union counts frames, not per-channel keys, so it can outrun every channel
                    tracing::debug!(index = i, "No channel has a key at this index; skipping sample");
                }
                time
            })
            .collect();

        Self {
            frames,
            ease,
            sample_times,
        }
    }

    /// Key count written to the header: union size less suppressed ease keys
    pub fn retained_count(&self) -> usize {
        self.frames.len().saturating_sub(self.ease.suppressed())
    }
}
