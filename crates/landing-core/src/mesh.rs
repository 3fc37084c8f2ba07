//! Model decode and fit.
//!
//! The product asset is a binary glTF with embedded, compressed buffers. The
//! `gltf` crate handles decode; this module walks the default scene, bakes
//! node world transforms into the vertex data and exposes the bounding-box
//! operations the viewer uses to fit the model (uniform scale, then translate
//! by the negative bbox centroid so the model spins around its middle).

use glam::{Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset fetch failed: {0}")]
    Fetch(String),
    #[error("glTF decode failed: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("mesh primitive has no vertex positions")]
    MissingPositions,
    #[error("asset contains no triangle geometry")]
    Empty,
}

/// One primitive's geometry, flattened into world space.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    /// PBR base color factor of the primitive's material.
    pub base_color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct Model {
    pub meshes: Vec<MeshData>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }
}

impl Model {
    /// Bounding box over every vertex, or `None` for an empty model.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let mut bbox: Option<Aabb> = None;
        for mesh in &self.meshes {
            for p in &mesh.positions {
                let p = Vec3::from_array(*p);
                match &mut bbox {
                    Some(b) => b.grow(p),
                    None => bbox = Some(Aabb { min: p, max: p }),
                }
            }
        }
        bbox
    }

    /// Uniformly scale all vertex positions about the origin.
    pub fn apply_scale(&mut self, factor: f32) {
        for mesh in &mut self.meshes {
            for p in &mut mesh.positions {
                p[0] *= factor;
                p[1] *= factor;
                p[2] *= factor;
            }
        }
    }

    /// Translate so the bounding-box centroid sits at the origin.
    pub fn recenter(&mut self) {
        let Some(bbox) = self.bounding_box() else {
            return;
        };
        let c = bbox.center();
        for mesh in &mut self.meshes {
            for p in &mut mesh.positions {
                p[0] -= c.x;
                p[1] -= c.y;
                p[2] -= c.z;
            }
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.positions.len()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.indices.len() / 3).sum()
    }
}

/// Decode a glTF asset (binary or embedded-buffer JSON) into a flat model.
pub fn decode_glb(bytes: &[u8]) -> Result<Model, AssetError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let mut meshes = Vec::new();
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::Empty)?;
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut meshes)?;
    }
    if meshes.is_empty() {
        return Err(AssetError::Empty);
    }
    Ok(Model { meshes })
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshData>,
) -> Result<(), AssetError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            out.push(read_primitive(&prim, world, buffers)?);
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn read_primitive(
    prim: &gltf::Primitive,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
) -> Result<MeshData, AssetError> {
    let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or(AssetError::MissingPositions)?
        .map(|p| world.transform_point3(Vec3::from_array(p)).to_array())
        .collect();

    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(ns) => {
            let normal_matrix = world.inverse().transpose();
            ns.map(|n| {
                normal_matrix
                    .transform_vector3(Vec3::from_array(n))
                    .normalize_or_zero()
                    .to_array()
            })
            .collect()
        }
        None => face_normals(&positions, &indices),
    };

    let base_color = prim
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    Ok(MeshData {
        positions,
        normals,
        indices,
        base_color,
    })
}

/// Area-weighted per-vertex normals for primitives that ship without them.
fn face_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from_array(positions[a]);
        let pb = Vec3::from_array(positions[b]);
        let pc = Vec3::from_array(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                [0.0, 0.0, 1.0]
            } else {
                n.to_array()
            }
        })
        .collect()
}
