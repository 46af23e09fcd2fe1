// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animated camera channels.

use crate::interpolation::{Interpolation, InterpolationMode};
use motioncurve_export::{frame_to_time, Keyframe};
use serde::{Deserialize, Serialize};

/// A key as written in a scene file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyDocument {
    /// Frame number
    pub frame: f64,
    /// Value at this key
    pub value: f64,
    /// Time override; derived from the frame when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl KeyDocument {
    /// Key at a frame with a derived time
    pub fn new(frame: f64, value: f64) -> Self {
        Self {
            frame,
            value,
            time: None,
        }
    }
}

/// A channel as written in a scene file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelDocument {
    /// Interpolation between keys
    #[serde(default)]
    pub interpolation: InterpolationMode,
    /// Keys in any order
    #[serde(default)]
    pub keys: Vec<KeyDocument>,
}

impl ChannelDocument {
    /// Linear channel from `(frame, value)` pairs
    pub fn linear(keys: &[(f64, f64)]) -> Self {
        Self {
            interpolation: InterpolationMode::Linear,
            keys: keys.iter().map(|&(f, v)| KeyDocument::new(f, v)).collect(),
        }
    }
}

/// A channel with resolved, time-sorted keyframes
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedChannel {
    /// Interpolation between keys
    pub interpolation: InterpolationMode,
    keyframes: Vec<Keyframe>,
}

impl AnimatedChannel {
    /// Resolve a channel document at a frame rate
    pub fn from_document(doc: &ChannelDocument, fps: f64) -> Self {
        let mut keyframes: Vec<Keyframe> = doc
            .keys
            .iter()
            .map(|k| match k.time {
                Some(time) => Keyframe::new(time, k.frame, k.value),
                None => Keyframe::new(frame_to_time(k.frame, fps), k.frame, k.value),
            })
            .collect();
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));

        Self {
            interpolation: doc.interpolation,
            keyframes,
        }
    }

    /// Keyframes in time order
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Find keyframes surrounding a time
    fn find_keyframes(&self, time: f64) -> (Option<&Keyframe>, Option<&Keyframe>) {
        // Find the first keyframe at or after time
        match self.keyframes.iter().position(|k| k.time >= time) {
            None => (self.keyframes.last(), None),
            Some(0) => (None, self.keyframes.first()),
            Some(idx) => (Some(&self.keyframes[idx - 1]), Some(&self.keyframes[idx])),
        }
    }

    /// Evaluate the channel at a time; `None` without keyframes
    pub fn evaluate(&self, time: f64) -> Option<f64> {
        match self.find_keyframes(time) {
            (None, None) => None,
            (Some(kf), None) | (None, Some(kf)) => Some(kf.value),
            (Some(a), Some(b)) => {
                if b.time == time || b.time - a.time <= f64::EPSILON {
                    return Some(b.value);
                }
                let t = (time - a.time) / (b.time - a.time);
                Some(Interpolation::interpolate(self.interpolation, a.value, b.value, t))
            }
        }
    }
}
