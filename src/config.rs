use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Sled Rush".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -9.82 }
    }
}

/// Friction/restitution coefficients for one surface.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SurfaceParams {
    pub friction: f32,
    pub restitution: f32,
}
impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            friction: 0.4,
            restitution: 0.3,
        }
    }
}

/// The two surfaces of the demo. Any contact involving the sled resolves to
/// the sled's friction (the slick side of the slick/ground pair); see
/// `materials::apply_surface`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SurfacesConfig {
    pub ground: SurfaceParams,
    pub sled: SurfaceParams,
}
impl Default for SurfacesConfig {
    fn default() -> Self {
        Self {
            ground: SurfaceParams {
                friction: 0.4,
                restitution: 0.3,
            },
            sled: SurfaceParams {
                friction: 0.0,
                restitution: 0.3,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SlopeConfig {
    pub width: f32,
    pub length: f32,
    /// Rotation of the ground plane about X, radians. Slightly off the
    /// vertical so gravity pulls the sled downhill.
    pub tilt: f32,
}
impl Default for SlopeConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            length: 1000.0,
            tilt: -std::f32::consts::PI / 2.2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SledConfig {
    pub half_extents: [f32; 3],
    pub mass: f32,
    pub spawn: [f32; 3],
    /// Lateral displacement per second while a steering key is held.
    pub steer_speed: f32,
    pub model: String,
}
impl Default for SledConfig {
    fn default() -> Self {
        Self {
            half_extents: [0.5, 0.25, 1.5],
            mass: 5.0,
            spawn: [0.0, 1.0, 0.0],
            steer_speed: 5.0,
            model: "models/sled.glb".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TreesConfig {
    pub count: usize,
    /// Total lateral spread; placements fall in [-span/2, span/2].
    pub span: f32,
    /// Longitudinal placements fall in [-(min_depth + max_depth), -min_depth].
    pub min_depth: f32,
    pub max_depth: f32,
    pub size: [f32; 3],
    /// Fixed offset above the slope surface (local Z of the slope frame).
    pub surface_offset: f32,
    /// Scatter seed. None = draw a fresh one at startup (it is logged, so a
    /// run can still be reproduced).
    pub seed: Option<u64>,
    pub model: String,
}
impl Default for TreesConfig {
    fn default() -> Self {
        Self {
            count: 150,
            span: 50.0,
            min_depth: 5.0,
            max_depth: 500.0,
            size: [1.0, 5.0, 1.0],
            surface_offset: 2.0,
            seed: None,
            model: "models/tree.glb".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// World-space offset between the sled and the camera.
    pub offset: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 3.0, -5.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct KeysConfig {
    pub left: String,
    pub right: String,
}
impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            left: "KeyQ".into(),
            right: "KeyD".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub surfaces: SurfacesConfig,
    pub slope: SlopeConfig,
    pub sled: SledConfig,
    pub trees: TreesConfig,
    pub camera: CameraConfig,
    pub keys: KeysConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. These represent suspicious / potentially unintended values but
    /// are not hard errors. Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; the sled will not slide".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity.y
            ));
        }
        for (label, s) in [
            ("surfaces.ground", &self.surfaces.ground),
            ("surfaces.sled", &self.surfaces.sled),
        ] {
            if s.friction < 0.0 {
                w.push(format!("{label}.friction {} negative", s.friction));
            }
            if !(0.0..=1.5).contains(&s.restitution) {
                w.push(format!(
                    "{label}.restitution {} outside recommended 0..1.5",
                    s.restitution
                ));
            }
        }
        if self.slope.width <= 0.0 || self.slope.length <= 0.0 {
            w.push("slope dimensions must be > 0".into());
        }
        if self.slope.tilt.abs() >= std::f32::consts::PI {
            w.push(format!(
                "slope.tilt {} exceeds a half turn; slope likely upside down",
                self.slope.tilt
            ));
        }
        if self.sled.mass <= 0.0 {
            w.push(format!("sled.mass {} must be > 0", self.sled.mass));
        }
        if self.sled.steer_speed <= 0.0 {
            w.push(format!(
                "sled.steer_speed {} disables steering",
                self.sled.steer_speed
            ));
        }
        if self.sled.half_extents.iter().any(|&e| e <= 0.0) {
            w.push("sled.half_extents components must be > 0".into());
        }
        if self.sled.model.is_empty() {
            w.push("sled.model path is empty".into());
        }
        if self.trees.count == 0 {
            w.push("trees.count is 0; the slope will be bare".into());
        }
        if self.trees.count > 10_000 {
            w.push(format!(
                "trees.count {} very high; performance may suffer",
                self.trees.count
            ));
        }
        if self.trees.span <= 0.0 {
            w.push(format!("trees.span {} must be > 0", self.trees.span));
        }
        if self.trees.min_depth < 0.0 {
            w.push(format!("trees.min_depth {} negative", self.trees.min_depth));
        }
        if self.trees.max_depth <= 0.0 {
            w.push(format!("trees.max_depth {} must be > 0", self.trees.max_depth));
        }
        if self.trees.size.iter().any(|&e| e <= 0.0) {
            w.push("trees.size components must be > 0".into());
        }
        if self.trees.model.is_empty() {
            w.push("trees.model path is empty".into());
        }
        if !(10.0..=170.0).contains(&self.camera.fov_degrees) {
            w.push(format!(
                "camera.fov_degrees {} outside recommended 10..170",
                self.camera.fov_degrees
            ));
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            w.push("camera near/far planes must satisfy 0 < near < far".into());
        }
        w
    }
}
