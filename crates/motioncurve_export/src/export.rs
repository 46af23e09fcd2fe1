// SPDX-License-Identifier: MIT OR Apache-2.0
//! Export operations.
//!
//! Every operation validates the output suffix, resolves the camera and
//! builds the whole curve in memory before the output file is created, so a
//! failed export never leaves a file behind.

use crate::camera::{frame_to_time, Camera, CameraAccessor, ChannelName};
use crate::curve::{real, CurveRecord, FrameCurve, MotionCurve};
use crate::decompose::sample_pose;
use crate::error::{ExportError, ExportResult};
use crate::fov::Lens;
use crate::keys::{ChannelKeys, KeySet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Suffix of key-time curve files
pub const KEY_TIME_EXTENSION: &str = "vd";

/// Suffix of fixed-frame curve files
pub const FIXED_FRAME_EXTENSION: &str = "wf";

/// Output format, chosen by file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFormat {
    /// Samples at key times, with header and ease markers (`.vd`)
    KeyTime,
    /// One sample per frame, values only (`.wf`)
    FixedFrame,
}

impl CurveFormat {
    /// Determine the format from an output path
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(KEY_TIME_EXTENSION) => Ok(Self::KeyTime),
            Some(FIXED_FRAME_EXTENSION) => Ok(Self::FixedFrame),
            _ => Err(ExportError::InvalidExtension(path.to_path_buf())),
        }
    }

    /// File suffix for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::KeyTime => KEY_TIME_EXTENSION,
            Self::FixedFrame => FIXED_FRAME_EXTENSION,
        }
    }

    fn require(self, path: &Path) -> ExportResult<()> {
        if Self::from_path(path)? == self {
            Ok(())
        } else {
            Err(ExportError::InvalidExtension(path.to_path_buf()))
        }
    }
}

/// Inclusive frame range for per-frame exports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRange {
    /// First frame
    pub start: f64,
    /// Last frame; derived from the keyframes when `None`
    pub end: Option<f64>,
}

impl FrameRange {
    /// Range with an explicit end
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Reject ranges whose bounds are infinite or NaN
    pub fn validate(&self) -> ExportResult<()> {
        if self.start.is_finite() && self.end.map_or(true, f64::is_finite) {
            Ok(())
        } else {
            Err(ExportError::InvalidFrameRange {
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Frames from `start` to `end` in whole-frame steps
    fn frames(start: f64, end: f64) -> ExportResult<impl Iterator<Item = f64>> {
        Self::new(start, end).validate()?;
        let steps = (end >= start).then(|| (end - start).floor() as u64);
        Ok(steps.into_iter().flat_map(|n| 0..=n).map(move |i| start + i as f64))
    }
}

impl Default for FrameRange {
    fn default() -> Self {
        Self {
            start: 1.0,
            end: None,
        }
    }
}

/// Sample a camera at its resolved key times
pub fn build_key_time_curve<C: Camera + ?Sized>(camera: &C, fps: f64) -> ExportResult<MotionCurve> {
    let keys = ChannelKeys::from_camera(camera)?;
    let key_set = KeySet::resolve(&keys);
    let lens = Lens::from_camera(camera)?;

    let records = key_set
        .sample_times
        .iter()
        .map(|&time| sample(camera, &lens, time))
        .collect::<ExportResult<Vec<_>>>()?;

    Ok(MotionCurve {
        fps,
        keys: key_set.retained_count(),
        ease: key_set.ease,
        records,
    })
}

/// Resample a camera at every frame of a range
pub fn build_fixed_frame_curve<C: Camera + ?Sized>(
    camera: &C,
    fps: f64,
    range: FrameRange,
) -> ExportResult<FrameCurve> {
    let keys = ChannelKeys::from_camera(camera)?;
    let end = match range.end {
        Some(end) => end,
        None => keys.last_frame().map_or(range.start, f64::ceil),
    };
    let lens = Lens::from_camera(camera)?;

    let records = FrameRange::frames(range.start, end)?
        .map(|frame| sample(camera, &lens, frame_to_time(frame, fps)))
        .collect::<ExportResult<Vec<_>>>()?;

    Ok(FrameCurve { records })
}

fn sample<C: Camera + ?Sized>(camera: &C, lens: &Lens, time: f64) -> ExportResult<CurveRecord> {
    let fovy = lens.fovy_at(camera, time)?;
    Ok(CurveRecord::new(time, sample_pose(camera, time), fovy))
}

fn resolve<'a, A: CameraAccessor>(accessor: &'a A, camera: &str) -> ExportResult<&'a A::Camera> {
    accessor
        .resolve_camera(camera)
        .ok_or_else(|| ExportError::CameraNotFound(camera.to_string()))
}

fn write_file(
    output: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> ExportResult<()> {
    let mut out = BufWriter::new(File::create(output)?);
    write(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Export a key-time curve (`.vd`)
pub fn export_key_time_curve<A: CameraAccessor>(
    accessor: &A,
    camera: &str,
    output: &Path,
) -> ExportResult<()> {
    CurveFormat::KeyTime.require(output)?;
    let cam = resolve(accessor, camera)?;

    tracing::info!("Exporting key times from {} into {}", cam.path(), output.display());
    let curve = build_key_time_curve(cam, accessor.frames_per_second())?;
    write_file(output, |out| curve.write_to(out))?;

    tracing::info!(keys = curve.keys, records = curve.records.len(), "Key-time export complete");
    Ok(())
}

/// Export a fixed-frame curve (`.wf`)
pub fn export_fixed_frame_curve<A: CameraAccessor>(
    accessor: &A,
    camera: &str,
    output: &Path,
    range: FrameRange,
) -> ExportResult<()> {
    CurveFormat::FixedFrame.require(output)?;
    range.validate()?;
    let cam = resolve(accessor, camera)?;

    let curve = build_fixed_frame_curve(cam, accessor.frames_per_second(), range)?;
    tracing::info!(
        "Exporting {} frames from {} starting at frame {} into {}",
        curve.records.len(),
        cam.path(),
        range.start,
        output.display()
    );
    write_file(output, |out| curve.write_to(out))?;
    Ok(())
}

/// Export a camera in the format named by the output suffix.
///
/// The frame range only applies to fixed-frame output.
pub fn export_camera<A: CameraAccessor>(
    accessor: &A,
    camera: &str,
    output: &Path,
    range: FrameRange,
) -> ExportResult<CurveFormat> {
    let format = CurveFormat::from_path(output)?;
    match format {
        CurveFormat::KeyTime => export_key_time_curve(accessor, camera, output)?,
        CurveFormat::FixedFrame => export_fixed_frame_curve(accessor, camera, output, range)?,
    }
    Ok(format)
}

/// Export one channel's value at every frame of a range, one value per line.
///
/// Without an explicit end the range stops at the channel's last key.
/// Returns the number of lines written.
pub fn export_channel<A: CameraAccessor>(
    accessor: &A,
    camera: &str,
    channel: &str,
    output: &Path,
    range: FrameRange,
) -> ExportResult<usize> {
    let channel: ChannelName = channel.parse()?;
    range.validate()?;
    let cam = resolve(accessor, camera)?;
    let fps = accessor.frames_per_second();

    let end = match range.end {
        Some(end) => end,
        None => cam
            .keyframes(channel)
            .iter()
            .map(|k| k.frame)
            .max_by(f64::total_cmp)
            .map(f64::ceil)
            .ok_or_else(|| ExportError::MissingKeyframes {
                camera: cam.path().to_string(),
                channel,
            })?,
    };

    let values: Vec<f64> = FrameRange::frames(range.start, end)?
        .map(|frame| cam.evaluate(channel, frame_to_time(frame, fps)))
        .collect();

    tracing::info!("Exporting {} {} values from {} into {}", values.len(), channel, cam.path(), output.display());
    write_file(output, |out| {
        for v in &values {
            writeln!(out, "{}", real(*v))?;
        }
        Ok(())
    })?;
    Ok(values.len())
}
