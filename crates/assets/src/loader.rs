use crate::AssetLoadError;
use crate::model::{Bounds, ModelId, ModelVertex, SceneModel};
use glam::{Mat3, Mat4, Vec3};
use gltf::mesh::Mode;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Where the demo looks for its model when none is given.
pub const DEFAULT_MODEL_PATH: &str = "static/models/bunny_plushie/scene.gltf";

/// Load a glTF (or GLB) file and flatten it into a single mesh.
///
/// Walks the default scene (or the first scene) applying node transforms.
/// Files without scenes fall back to every mesh in the document, untransformed.
/// Only geometry is read; images are left to the renderer.
pub fn load_scene_model(path: impl AsRef<Path>) -> Result<SceneModel, AssetLoadError> {
    let path = path.as_ref();
    let _span = tracing::info_span!("load_scene_model", path = %path.display()).entered();

    let bytes = std::fs::read(path).map_err(|source| AssetLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let gltf_err = |source| AssetLoadError::Gltf {
        path: path.to_path_buf(),
        source,
    };

    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(&bytes).map_err(gltf_err)?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob).map_err(gltf_err)?;

    let mut builder = MeshBuilder::default();
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());
    match &scene {
        Some(scene) => {
            for node in scene.nodes() {
                builder.add_node(&node, Mat4::IDENTITY, &buffers);
            }
        }
        None => {
            for mesh in document.meshes() {
                builder.add_mesh(&mesh, Mat4::IDENTITY, &buffers);
            }
        }
    }

    if builder.indices.len() < 3 {
        return Err(AssetLoadError::NoGeometry(path.to_path_buf()));
    }

    let name = scene
        .as_ref()
        .and_then(|s| s.name().map(str::to_string))
        .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "model".to_string());

    let model = SceneModel {
        id: content_id(&bytes),
        name,
        vertices: builder.vertices,
        indices: builder.indices,
        bounds: builder.bounds,
    };
    tracing::info!(
        id = %model.id,
        vertices = model.vertices.len(),
        triangles = model.triangle_count(),
        skipped_primitives = builder.skipped,
        "scene model loaded"
    );
    Ok(model)
}

fn content_id(bytes: &[u8]) -> ModelId {
    let digest = Sha256::digest(bytes);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    ModelId(u64::from_le_bytes(prefix))
}

struct MeshBuilder {
    vertices: Vec<ModelVertex>,
    indices: Vec<u32>,
    bounds: Bounds,
    skipped: usize,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: Bounds::EMPTY,
            skipped: 0,
        }
    }
}

impl MeshBuilder {
    fn add_node(&mut self, node: &gltf::Node<'_>, parent: Mat4, buffers: &[gltf::buffer::Data]) {
        let local = Mat4::from_cols_array_2d(&node.transform().matrix());
        let world = parent * local;
        if let Some(mesh) = node.mesh() {
            self.add_mesh(&mesh, world, buffers);
        }
        for child in node.children() {
            self.add_node(&child, world, buffers);
        }
    }

    fn add_mesh(&mut self, mesh: &gltf::Mesh<'_>, world: Mat4, buffers: &[gltf::buffer::Data]) {
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        for prim in mesh.primitives() {
            if prim.mode() != Mode::Triangles {
                self.skipped += 1;
                continue;
            }
            let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                self.skipped += 1;
                continue;
            };
            let positions: Vec<[f32; 3]> = positions.collect();
            let normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|it| it.collect())
                .unwrap_or_default();

            let base = self.vertices.len() as u32;
            for (i, p) in positions.iter().enumerate() {
                let position = world.transform_point3(Vec3::from_array(*p));
                let normal = normals
                    .get(i)
                    .map(|n| (normal_matrix * Vec3::from_array(*n)).normalize_or_zero())
                    .filter(|n| *n != Vec3::ZERO)
                    .unwrap_or(Vec3::Y);
                self.bounds.extend(position);
                self.vertices.push(ModelVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                });
            }

            let count = positions.len() as u32;
            let local: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..count).collect(),
            };
            let whole_triangles = local.len() - local.len() % 3;
            let mut dropped = false;
            for tri in local[..whole_triangles].chunks_exact(3) {
                if tri.iter().any(|&i| i >= count) {
                    dropped = true;
                    continue;
                }
                self.indices.extend(tri.iter().map(|&i| base + i));
            }
            if dropped {
                tracing::warn!(mesh = mesh.index(), "dropped triangles with out-of-range indices");
            }
        }
    }
}
