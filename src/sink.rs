//! The host scene graph seam.
//!
//! The engine never talks to a concrete host application. Everything it
//! produces — material resources, placed objects, the camera — goes through
//! the [`SceneSink`] trait. Objects are handed over as soon as their mesh is
//! built, so a sink can stream them into the host scene without buffering.
//!
//! [`MemoryScene`] is the in-memory implementation used by tests and by
//! embedders that want to inspect the import result before committing it.

use std::collections::HashMap;
use std::sync::Arc;

use cgmath::Matrix4;

use crate::data_structures::mesh::{Material, MeshData};

/// A placed object: a shared mesh plus its world transform.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Arc<MeshData>,
    pub world_transform: Matrix4<f32>,
    pub transparent: bool,
}

/// A camera placement request.
#[derive(Clone, Debug)]
pub struct SceneCamera {
    pub name: String,
    pub transform: Matrix4<f32>,
    /// Lens value taken from the model camera's field of view.
    pub lens: f32,
    pub clip_end: f32,
}

/// Consumer of the import engine's output.
///
/// Material lookups back the resolver's reuse policy: a sink that already
/// owns a material of a given name can hand it back instead of receiving a
/// duplicate.
pub trait SceneSink {
    /// Look up a previously registered material by name.
    fn material(&self, name: &str) -> Option<Arc<Material>>;

    /// Register a material resource with the scene.
    fn add_material(&mut self, material: Arc<Material>);

    /// Link a finished object into the scene.
    fn add_object(&mut self, object: SceneObject);

    /// Set the scene's active camera.
    fn set_camera(&mut self, camera: SceneCamera);
}

/// An in-memory scene that records everything the importer produces.
#[derive(Debug, Default)]
pub struct MemoryScene {
    pub objects: Vec<SceneObject>,
    pub camera: Option<SceneCamera>,
    materials: HashMap<String, Arc<Material>>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first object with the given name, if any.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl SceneSink for MemoryScene {
    fn material(&self, name: &str) -> Option<Arc<Material>> {
        self.materials.get(name).cloned()
    }

    fn add_material(&mut self, material: Arc<Material>) {
        self.materials.insert(material.name.clone(), material);
    }

    fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    fn set_camera(&mut self, camera: SceneCamera) {
        self.camera = Some(camera);
    }
}
