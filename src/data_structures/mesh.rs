//! Renderer-ready mesh and material data.
//!
//! [`MeshData`] is the consolidated output of the import engine: a unique
//! vertex list, triangles indexing into it, and per-triangle material and
//! UV assignments. [`Material`] is the renderer-side resource built from a
//! source material, with colour channels normalised to floats and the
//! texture decoded and packed in memory.

use std::sync::Arc;

use cgmath::Vector3;
use image::RgbaImage;

/// A consolidated triangle mesh for one entity-tree node.
///
/// All index lists refer into this mesh: `triangles` index `vertices`,
/// `material_indices` index `materials`. `materials` holds the resources
/// actually referenced by at least one face, in first-seen order.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub name: String,
    /// Unique vertices in first-seen order.
    pub vertices: Vec<Vector3<f32>>,
    /// Vertex index triples.
    pub triangles: Vec<[u32; 3]>,
    /// Per-triangle index into `materials`.
    pub material_indices: Vec<usize>,
    pub materials: Vec<Arc<Material>>,
    /// Per-triangle UV block: three (u, v) pairs plus two padding floats
    /// reserved for a fourth corner. Present only when a textured material
    /// is attached.
    pub uv_layer: Option<Vec<[f32; 8]>>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// A renderer-side material resource.
#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    /// RGB base colour, 0.0–1.0 per channel.
    pub diffuse: [f32; 3],
    /// 1.0 is fully opaque.
    pub alpha: f32,
    /// Decoded texture image, packed into the resource.
    pub texture: Option<RgbaImage>,
}

impl Material {
    /// An untextured, fully opaque material.
    pub fn untextured(name: impl Into<String>, diffuse: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            diffuse,
            alpha: 1.0,
            texture: None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha < 1.0
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }
}
