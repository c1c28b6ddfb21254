use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn to_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// A packed `0xRRGGBB` colour, as scene parameters are usually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xffffff);

    /// Linear-ish `[r, g, b, 1.0]` with each channel in `0.0..=1.0`.
    pub fn to_rgba(self) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.to_matrix(), glam::Mat4::IDENTITY);
    }

    #[test]
    fn rgb_unpacks_channels() {
        let c = Rgb(0x001e0f).to_rgba();
        assert_eq!(c[0], 0.0);
        assert!((c[1] - 30.0 / 255.0).abs() < 1e-6);
        assert!((c[2] - 15.0 / 255.0).abs() < 1e-6);
        assert_eq!(c[3], 1.0);
        assert_eq!(Rgb::WHITE.to_rgba(), [1.0, 1.0, 1.0, 1.0]);
    }
}
