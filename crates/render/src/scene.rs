use glam::Vec3;
use seascape_common::Rgb;
use seascape_kernel::ScrollOffset;
use serde::{Deserialize, Serialize};

/// Atmospheric sky parameters and the sun placement derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyParameters {
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    /// Sun height above the horizon, in degrees.
    pub elevation: f32,
    /// Sun bearing around the vertical axis, in degrees.
    pub azimuth: f32,
}

impl Default for SkyParameters {
    fn default() -> Self {
        Self {
            turbidity: 10.0,
            rayleigh: 2.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.8,
            elevation: 3.0,
            azimuth: 115.0,
        }
    }
}

impl SkyParameters {
    /// Unit vector toward the sun, from spherical coordinates with polar angle
    /// `90 - elevation` and azimuth measured from +Z toward +X.
    pub fn sun_direction(&self) -> Vec3 {
        let phi = (90.0 - self.elevation).to_radians();
        let theta = self.azimuth.to_radians();
        Vec3::new(
            phi.sin() * theta.sin(),
            phi.cos(),
            phi.sin() * theta.cos(),
        )
    }
}

/// Water surface look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterParameters {
    /// Side length of the square water plane.
    pub size: f32,
    pub water_color: Rgb,
    pub sun_color: Rgb,
    pub distortion_scale: f32,
}

impl Default for WaterParameters {
    fn default() -> Self {
        Self {
            size: 10_000.0,
            water_color: Rgb(0x001e0f),
            sun_color: Rgb::WHITE,
            distortion_scale: 3.7,
        }
    }
}

/// Sky/ground ambient light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HemisphereLight {
    pub sky_color: Rgb,
    pub ground_color: Rgb,
    pub intensity: f32,
}

impl Default for HemisphereLight {
    fn default() -> Self {
        Self {
            sky_color: Rgb::WHITE,
            ground_color: Rgb(0x444444),
            intensity: 1.0,
        }
    }
}

/// Values written into the water shader each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterUniforms {
    pub time: f32,
    pub speed: f32,
    pub sun_direction: Vec3,
}

impl WaterUniforms {
    pub fn new(scroll: ScrollOffset, sun_direction: Vec3) -> Self {
        Self {
            time: scroll.time as f32,
            speed: scroll.travel as f32,
            sun_direction: sun_direction.normalize_or_zero(),
        }
    }
}

/// Everything a renderer needs for one frame besides the scene geometry.
#[derive(Debug, Clone, Copy)]
pub struct FrameUniforms {
    pub water: WaterUniforms,
    pub sky: SkyParameters,
    pub sun_position: Vec3,
}

impl FrameUniforms {
    pub fn new(scroll: ScrollOffset, sky: SkyParameters) -> Self {
        let sun_position = sky.sun_direction();
        Self {
            water: WaterUniforms::new(scroll, sun_position),
            sky,
            sun_position,
        }
    }
}
