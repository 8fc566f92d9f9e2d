//! Mesh consolidation for one entity-tree node.
//!
//! Takes the flat face list of a node and folds it into a single
//! [`MeshData`]: vertices deduplicated by exact value, triangles rewired to
//! mesh-global indices, one material slot per face, and one UV block per
//! triangle. Winding is normalised for the source format's triangle-fan
//! quirk along the way.

use std::collections::HashMap;
use std::sync::Arc;

use cgmath::{Vector2, Vector3};

use crate::data_structures::mesh::{Material, MeshData};
use crate::data_structures::model::Face;
use crate::import::dedup::{DedupIndex, VertexKey};
use crate::import::material::DEFAULT_MATERIAL;

/// Consolidate `faces` into one mesh.
///
/// `default_material` is the material name inherited from the node's
/// ancestors, used for faces that carry none. `materials` is the resolver's
/// name → resource map; every attached material is looked up there.
///
/// Returns `(None, false)` when the faces contribute no vertices — an empty
/// node must not create a mesh. The second value is the transparency flag:
/// true when any attached material is not fully opaque.
pub fn build_mesh(
    faces: &[Face],
    name: &str,
    default_material: &str,
    materials: &HashMap<String, Arc<Material>>,
) -> (Option<Arc<MeshData>>, bool) {
    let mut vertices: Vec<Vector3<f32>> = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();
    let mut material_indices: Vec<usize> = Vec::new();
    let mut uv_blocks: Vec<[f32; 8]> = Vec::new();
    let mut mats: DedupIndex<String> = DedupIndex::new();
    let mut seen: DedupIndex<VertexKey> = DedupIndex::new();

    for face in faces {
        let mat_slot = mats.slot(
            face.material
                .clone()
                .unwrap_or_else(|| default_material.to_string()),
        );

        // Face-local vertex index -> mesh-global index. A key whose slot
        // equals the current vertex count is new and gets appended.
        let mapping: Vec<u32> = face
            .vertices
            .iter()
            .map(|v| {
                let index = seen.slot(VertexKey::from(*v));
                if index == vertices.len() {
                    vertices.push(*v);
                }
                index as u32
            })
            .collect();

        for &triple in &face.triangles {
            let (order, uv) = wind_triangle(triple, &face.uvs);
            triangles.push(order.map(|i| mapping[i]));
            uv_blocks.push(uv);
            material_indices.push(mat_slot);
        }
    }

    if vertices.is_empty() {
        return (None, false);
    }

    let mut attached: Vec<Arc<Material>> = Vec::with_capacity(mats.len());
    let mut transparent = false;
    let mut uvs_used = false;
    for mat_name in mats.keys() {
        let resource = materials.get(mat_name).cloned().or_else(|| {
            log::warn!(
                "object {} references unknown material {:?}, substituting the default",
                name,
                mat_name
            );
            materials.get(DEFAULT_MATERIAL).cloned()
        });
        if let Some(material) = resource {
            if material.is_transparent() {
                transparent = true;
            }
            if material.has_texture() {
                uvs_used = true;
            }
            attached.push(material);
        }
    }
    if attached.is_empty() {
        log::warn!("object {} has no material", name);
    }

    let mesh = MeshData {
        name: name.to_string(),
        vertices,
        triangles,
        material_indices,
        materials: attached,
        uv_layer: uvs_used.then_some(uv_blocks),
    };
    (Some(Arc::new(mesh)), transparent)
}

/// Order one triangle's corners and assemble its UV block.
///
/// Triples whose third index is 0 encode the fan pivot in last position and
/// are rotated to `(f1, f2, f0)`, with the UV pairs mirrored to
/// `(uv[f2], uv[f1], uv[f0])`. All other triples keep their natural order.
fn wind_triangle(triple: [usize; 3], uvs: &[Vector2<f32>]) -> ([usize; 3], [f32; 8]) {
    let [f0, f1, f2] = triple;
    if f2 == 0 {
        (
            [f1, f2, f0],
            uv_block(uv_at(uvs, f2), uv_at(uvs, f1), uv_at(uvs, f0)),
        )
    } else {
        (
            [f0, f1, f2],
            uv_block(uv_at(uvs, f0), uv_at(uvs, f1), uv_at(uvs, f2)),
        )
    }
}

fn uv_at(uvs: &[Vector2<f32>], index: usize) -> Vector2<f32> {
    uvs.get(index).copied().unwrap_or(Vector2::new(0.0, 0.0))
}

/// Three (u, v) pairs plus two padding floats reserved for a fourth corner.
fn uv_block(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> [f32; 8] {
    [a.x, a.y, b.x, b.y, c.x, c.y, 0.0, 0.0]
}
