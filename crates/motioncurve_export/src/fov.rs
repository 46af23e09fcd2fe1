// SPDX-License-Identifier: MIT OR Apache-2.0
//! Vertical field of view from lens parameters.

use crate::camera::{Camera, ChannelName};
use crate::error::{ExportError, ExportResult};

/// Vertical field of view in degrees.
///
/// `aspect` is `resx / resy` as a real ratio.
pub fn vertical_fov(aperture: f64, focal: f64, aspect: f64) -> f64 {
    (2.0 * (aperture / (2.0 * aspect * focal)).atan()).to_degrees()
}

/// Lens parameters that stay fixed for the duration of an export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Focal length
    pub focal: f64,
    /// Image aspect ratio (resx / resy)
    pub aspect: f64,
}

impl Lens {
    /// Read focal length and resolution from a camera.
    ///
    /// A zero focal length or vertical resolution fails the export instead of
    /// producing an infinite or undefined angle.
    pub fn from_camera<C: Camera + ?Sized>(camera: &C) -> ExportResult<Self> {
        let focal = camera.parameter(ChannelName::Focal);
        let resx = camera.parameter(ChannelName::ResX);
        let resy = camera.parameter(ChannelName::ResY);

        if focal == 0.0 || resy == 0.0 || resx == 0.0 {
            return Err(ExportError::DegenerateLens {
                camera: camera.path().to_string(),
                time: 0.0,
            });
        }

        Ok(Self {
            focal,
            aspect: resx / resy,
        })
    }

    /// Field of view for the camera's aperture at a time
    pub fn fovy_at<C: Camera + ?Sized>(&self, camera: &C, time: f64) -> ExportResult<f64> {
        let aperture = camera.evaluate(ChannelName::Aperture, time);
        let fovy = vertical_fov(aperture, self.focal, self.aspect);
        if fovy.is_finite() {
            Ok(fovy)
        } else {
            Err(ExportError::DegenerateLens {
                camera: camera.path().to_string(),
                time,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lens() {
        // 41.4214 = 100 * tan(22.5 deg), so a square image sees 45 degrees
        let fovy = vertical_fov(41.4214, 50.0, 1.0);
        assert!((fovy - 45.0).abs() < 1e-3, "got {fovy}");
    }

    #[test]
    fn test_aspect_narrows_fov() {
        let square = vertical_fov(41.4214, 50.0, 1.0);
        let wide = vertical_fov(41.4214, 50.0, 1920.0 / 1080.0);
        assert!(wide < square);

        let expected = (2.0 * (41.4214_f64 / (2.0 * (16.0 / 9.0) * 50.0)).atan()).to_degrees();
        assert!((wide - expected).abs() < 1e-12);
    }

    #[test]
    fn test_aspect_is_not_truncated() {
        // 3/2 would truncate to 1 in integer division
        let fovy = vertical_fov(36.0, 35.0, 3.0 / 2.0);
        assert!((fovy - vertical_fov(36.0, 35.0, 1.0)).abs() > 1.0);
    }

    #[test]
    fn test_undefined_aperture_is_fatal() {
        use crate::testing::MockCamera;

        let camera = MockCamera::new("/obj/cam1", 24.0).with_keys(ChannelName::Aperture, &[(1.0, 30.0), (5.0, f64::NAN)]);
        let lens = Lens::from_camera(&camera).unwrap();

        assert!(lens.fovy_at(&camera, 0.0).unwrap().is_finite());
        let err = lens.fovy_at(&camera, 4.0 / 24.0).unwrap_err();
        assert!(matches!(
            err,
            ExportError::DegenerateLens { camera: ref path, time } if path == "/obj/cam1" && time == 4.0 / 24.0
        ));
    }
}
