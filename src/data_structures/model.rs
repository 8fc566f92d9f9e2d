//! Parsed SketchUp model data.
//!
//! These types are the narrow seam between the binary `.skp` parser and the
//! import engine: the parser produces a [`Model`], the engine consumes it
//! read-only. Geometry is hierarchical and instance-based — a [`Group`] owns
//! its subtree, while a [`ComponentInstance`] only references a shared
//! [`ComponentDefinition`] and contributes a placement transform.

use std::path::Path;
use std::sync::Arc;

use cgmath::{Matrix4, Vector2, Vector3};

/// Root scene container produced by the parser.
#[derive(Clone, Debug)]
pub struct Model {
    pub camera: Option<Camera>,
    pub materials: Vec<MaterialData>,
    pub entities: Entities,
}

/// One level of the entity hierarchy: loose faces plus nested containers.
#[derive(Clone, Debug, Default)]
pub struct Entities {
    pub faces: Vec<Face>,
    pub groups: Vec<Group>,
    pub instances: Vec<ComponentInstance>,
}

/// A polygon with its triangulation.
///
/// `triangles` holds index triples into the face-local `vertices` and `uvs`
/// arrays. Coordinates are in the local space of the owning entity group.
#[derive(Clone, Debug)]
pub struct Face {
    pub vertices: Vec<Vector3<f32>>,
    pub triangles: Vec<[usize; 3]>,
    pub uvs: Vec<Vector2<f32>>,
    /// Material name, or `None` to inherit the ancestors' default.
    pub material: Option<String>,
}

/// A named container with its own local transform and entity subtree.
#[derive(Clone, Debug)]
pub struct Group {
    pub name: String,
    /// Local-to-parent transform.
    pub transform: Matrix4<f32>,
    /// Material override inherited by faces below that carry no material.
    pub material: Option<String>,
    pub entities: Entities,
}

/// A reusable entity subtree, shared by reference between instances.
#[derive(Clone, Debug)]
pub struct ComponentDefinition {
    pub name: String,
    pub entities: Entities,
}

/// A placement of a [`ComponentDefinition`].
#[derive(Clone, Debug)]
pub struct ComponentInstance {
    /// Local-to-parent transform.
    pub transform: Matrix4<f32>,
    pub material: Option<String>,
    pub definition: Arc<ComponentDefinition>,
}

/// Source material as stored in the file: byte colour channels plus an
/// optional embedded texture.
#[derive(Clone, Debug)]
pub struct MaterialData {
    pub name: String,
    /// RGBA, 0–255 per channel.
    pub color: [u8; 4],
    pub texture: Option<TextureData>,
}

/// An embedded texture: the path recorded in the file and the raw bytes.
#[derive(Clone, Debug)]
pub struct TextureData {
    /// Source path as written by the authoring tool, usually with Windows
    /// separators.
    pub name: String,
    pub data: Vec<u8>,
}

/// The model's active camera.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
}

/// The parser collaborator: turns a file on disk into a [`Model`].
pub trait ModelReader {
    fn read(&self, path: &Path) -> anyhow::Result<Model>;
}
