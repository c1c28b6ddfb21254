use glam::{Mat4, Vec3};

/// Content-addressed model ID computed from the file bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u64);

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// An inverted box that any point will grow.
    pub const EMPTY: Bounds = Bounds {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// A loaded model, flattened to a single indexed triangle mesh.
#[derive(Debug, Clone)]
pub struct SceneModel {
    pub id: ModelId,
    pub name: String,
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    pub bounds: Bounds,
}

impl SceneModel {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Matrix that scales the model uniformly so its largest extent equals
    /// `target_size`, centres it on the vertical axis and rests it on `y = 0`.
    pub fn fit_matrix(&self, target_size: f32) -> Mat4 {
        let extent = self.bounds.size().max_element();
        let scale = if extent > f32::EPSILON {
            target_size / extent
        } else {
            1.0
        };
        let c = self.bounds.center();
        let anchor = Vec3::new(c.x, self.bounds.min.y, c.z);
        Mat4::from_scale(Vec3::splat(scale)) * Mat4::from_translation(-anchor)
    }
}
