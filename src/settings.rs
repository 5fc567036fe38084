//! Sandbox Settings
//!
//! Configuration for the placement session and the headless sandbox.
//!
//! Every struct implements [`Default`] with the values the toy was tuned
//! with, and deserializes with `#[serde(default)]`, so a settings file only
//! needs to list the fields it overrides.
//!
//! # Example
//!
//! ```rust,ignore
//! use accrete::settings::SandboxSettings;
//!
//! let settings = SandboxSettings::from_json_str(r#"{
//!     "seed_radius": 8.0,
//!     "placement": { "rng_seed": 7 }
//! }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{AccreteError, Result};
use crate::resources::Color;

// ---------------------------------------------------------------------------
// PlacementSettings
// ---------------------------------------------------------------------------

/// Geometry and look of placed spheres.
///
/// | Field                 | Description                                        | Default                          |
/// |-----------------------|----------------------------------------------------|----------------------------------|
/// | `commit_offset`       | Centre offset along the normal, × reference radius | `0.5`                            |
/// | `child_radius_factor` | New radius, × reference radius                     | `0.5`                            |
/// | `probe_epsilon`       | Extra outward nudge for the commit collision probe | `0.05`                           |
/// | `hover_epsilon`       | Extra outward nudge for the preview                | `0.03`                           |
/// | `palette`             | Committed sphere colors (`0xRRGGBB`)               | `0x01295F, 0xFFB30F, 0xFD151B`   |
/// | `valid_color`         | Preview color when placement is possible           | `0x009F00`                       |
/// | `invalid_color`       | Preview color when placement would collide         | `0x9F0000`                       |
/// | `preview_opacity`     | Preview opacity                                    | `0.5`                            |
/// | `rng_seed`            | Fixed palette RNG seed, entropy when `None`        | `None`                           |
///
/// With `commit_offset == child_radius_factor` a new sphere sits exactly
/// tangent to the surface it was attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    pub commit_offset: f32,
    pub child_radius_factor: f32,
    pub probe_epsilon: f32,
    pub hover_epsilon: f32,

    pub palette: [u32; 3],
    pub valid_color: u32,
    pub invalid_color: u32,
    pub preview_opacity: f32,

    pub rng_seed: Option<u64>,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            commit_offset: 0.5,
            child_radius_factor: 0.5,
            probe_epsilon: 0.05,
            hover_epsilon: 0.03,
            palette: [0x01_29_5F, 0xFF_B3_0F, 0xFD_15_1B],
            valid_color: 0x00_9F_00,
            invalid_color: 0x9F_00_00,
            preview_opacity: 0.5,
            rng_seed: None,
        }
    }
}

impl PlacementSettings {
    #[must_use]
    pub fn palette_colors(&self) -> [Color; 3] {
        self.palette.map(Color::from_hex)
    }

    pub fn validate(&self) -> Result<()> {
        positive("placement.commit_offset", self.commit_offset)?;
        positive("placement.child_radius_factor", self.child_radius_factor)?;
        positive("placement.probe_epsilon", self.probe_epsilon)?;
        if !self.hover_epsilon.is_finite() || self.hover_epsilon < 0.0 {
            return Err(invalid("placement.hover_epsilon", "must be finite and >= 0"));
        }
        if self.hover_epsilon >= self.probe_epsilon {
            return Err(invalid(
                "placement.hover_epsilon",
                format!(
                    "must be smaller than probe_epsilon ({} >= {})",
                    self.hover_epsilon, self.probe_epsilon
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.preview_opacity) {
            return Err(invalid("placement.preview_opacity", "must be within [0, 1]"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CameraSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 1000.0,
            position: Vec3::new(0.0, 5.0, 30.0),
            target: Vec3::ZERO,
        }
    }
}

impl CameraSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(invalid("camera.fov_degrees", "must be within (0, 180)"));
        }
        positive("camera.near", self.near)?;
        if !(self.far > self.near) {
            return Err(invalid("camera.far", "must be greater than near"));
        }
        if self.position == self.target {
            return Err(invalid("camera.position", "must differ from target"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SandboxSettings
// ---------------------------------------------------------------------------

/// Top-level configuration consumed by [`Sandbox::new`](crate::app::Sandbox::new).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxSettings {
    pub placement: PlacementSettings,
    pub camera: CameraSettings,

    /// Initial viewport size in pixels.
    pub viewport: [u32; 2],

    /// Centre of the sphere the session starts with.
    pub seed_center: Vec3,
    /// Radius of the sphere the session starts with.
    pub seed_radius: f32,

    pub background: u32,
    /// Linear fog range, `None` disables fog.
    pub fog_range: Option<[f32; 2]>,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            placement: PlacementSettings::default(),
            camera: CameraSettings::default(),
            viewport: [1280, 720],
            seed_center: Vec3::ZERO,
            seed_radius: 5.0,
            background: 0x80_80_80,
            fog_range: Some([20.0, 60.0]),
        }
    }
}

impl SandboxSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads a JSON settings file and validates it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loading sandbox settings from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.placement.validate()?;
        self.camera.validate()?;
        positive("seed_radius", self.seed_radius)?;
        if !self.seed_center.is_finite() {
            return Err(invalid("seed_center", "must be finite"));
        }
        if self.viewport[0] == 0 || self.viewport[1] == 0 {
            return Err(invalid("viewport", "width and height must be non-zero"));
        }
        if let Some([near, far]) = self.fog_range
            && !(near >= 0.0 && far > near)
        {
            return Err(invalid("fog_range", "expected 0 <= near < far"));
        }
        Ok(())
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport[0] as f32 / self.viewport[1] as f32
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> AccreteError {
    AccreteError::InvalidSetting {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite and > 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SandboxSettings::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = SandboxSettings::from_json_str(
            r#"{ "seed_radius": 8.0, "placement": { "rng_seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed_radius, 8.0);
        assert_eq!(settings.placement.rng_seed, Some(7));
        assert_eq!(settings.placement.probe_epsilon, 0.05);
        assert_eq!(settings.camera, CameraSettings::default());
    }

    #[test]
    fn hover_epsilon_must_stay_below_probe_epsilon() {
        let err = SandboxSettings::from_json_str(
            r#"{ "placement": { "hover_epsilon": 0.1, "probe_epsilon": 0.05 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AccreteError::InvalidSetting { field: "placement.hover_epsilon", .. }
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SandboxSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AccreteError::JsonError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SandboxSettings::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AccreteError::IoError(_)));
    }
}
