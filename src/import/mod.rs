//! Scene materialization: walking the entity tree into a scene sink.
//!
//! [`SceneImporter`] drives one import run. It resolves materials first,
//! then walks the entity hierarchy depth-first, consolidating each node's
//! faces into a mesh and handing placed objects to the sink as it goes.
//! Component definitions are consolidated at most once per inherited
//! default material; every further instance reuses the cached mesh and only
//! contributes its own placement transform.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use cgmath::{Matrix4, SquareMatrix};
use instant::Instant;

use crate::config::ImportOptions;
use crate::data_structures::mesh::{Material, MeshData};
use crate::data_structures::model::{Entities, Model, ModelReader};
use crate::sink::{SceneCamera, SceneObject, SceneSink};

mod camera;
mod dedup;
mod material;
pub mod mesh;

pub use material::DEFAULT_MATERIAL;

/// Errors that abort an entity walk.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// A component definition reaches itself through its own entity tree.
    /// Walking it would recurse forever, so the whole import is rejected.
    #[error("component definition {0:?} is part of a reference cycle")]
    CyclicDefinition(String),
}

/// Whether a node's mesh may be shared.
///
/// Component bodies are consolidated once per (definition, default
/// material) pair and cached; group and root bodies are always built
/// fresh, their geometry is not instanced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NodeKind {
    Group,
    Component,
}

/// One import run: options, resolved materials, and the component cache.
///
/// The cache lives exactly as long as the importer; dropping it after
/// [`import`](Self::import) discards all shared-mesh state.
pub struct SceneImporter {
    options: ImportOptions,
    materials: HashMap<String, Arc<Material>>,
    component_meshes: HashMap<(String, String), (Option<Arc<MeshData>>, bool)>,
    definition_stack: Vec<String>,
}

impl SceneImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            materials: HashMap::new(),
            component_meshes: HashMap::new(),
            definition_stack: Vec::new(),
        }
    }

    /// Import a parsed model into `sink`.
    ///
    /// Consumes the importer; the component-mesh cache does not outlive the
    /// run.
    pub fn import<S: SceneSink>(mut self, model: &Model, sink: &mut S) -> Result<(), ImportError> {
        if self.options.import_camera {
            if let Some(camera) = &model.camera {
                sink.set_camera(SceneCamera {
                    name: "Active Camera".to_string(),
                    transform: camera::camera_transform(camera),
                    lens: camera.fov,
                    clip_end: self.options.camera_far_plane as f32,
                });
            }
        }

        let t = Instant::now();
        self.materials =
            material::resolve_materials(&model.materials, self.options.reuse_material, sink);
        log::info!(
            "imported {} materials in {:.4} sec",
            model.materials.len(),
            t.elapsed().as_secs_f64()
        );

        let t = Instant::now();
        self.write_entities(
            &model.entities,
            "Sketchup",
            Matrix4::identity(),
            DEFAULT_MATERIAL,
            NodeKind::Group,
            sink,
        )?;
        log::info!("imported entities in {:.4} sec", t.elapsed().as_secs_f64());
        Ok(())
    }

    /// Consolidate one node and recurse into its children.
    ///
    /// `transform` is the accumulated world transform of this node,
    /// `default_material` the material name inherited for faces without one.
    fn write_entities<S: SceneSink>(
        &mut self,
        entities: &Entities,
        name: &str,
        transform: Matrix4<f32>,
        default_material: &str,
        kind: NodeKind,
        sink: &mut S,
    ) -> Result<(), ImportError> {
        let (mesh_data, transparent) = match kind {
            NodeKind::Component => {
                let key = (name.to_string(), default_material.to_string());
                match self.component_meshes.get(&key) {
                    Some(cached) => cached.clone(),
                    None => {
                        let built =
                            mesh::build_mesh(&entities.faces, name, default_material, &self.materials);
                        self.component_meshes.insert(key, built.clone());
                        built
                    }
                }
            }
            NodeKind::Group => {
                mesh::build_mesh(&entities.faces, name, default_material, &self.materials)
            }
        };

        if let Some(mesh_data) = mesh_data {
            sink.add_object(SceneObject {
                name: name.to_string(),
                mesh: mesh_data,
                world_transform: transform,
                transparent,
            });
        }

        for group in &entities.groups {
            let default = inherit_material(group.material.as_deref(), default_material);
            self.write_entities(
                &group.entities,
                &format!("G-{}", group.name),
                transform * group.transform,
                default,
                NodeKind::Group,
                sink,
            )?;
        }

        for instance in &entities.instances {
            let definition = &instance.definition;
            if self.definition_stack.iter().any(|n| n == &definition.name) {
                return Err(ImportError::CyclicDefinition(definition.name.clone()));
            }
            let default = inherit_material(instance.material.as_deref(), default_material);
            self.definition_stack.push(definition.name.clone());
            let result = self.write_entities(
                &definition.entities,
                &definition.name,
                transform * instance.transform,
                default,
                NodeKind::Component,
                sink,
            );
            self.definition_stack.pop();
            result?;
        }

        Ok(())
    }
}

/// Resolve the default material a child node passes on.
///
/// A node's own override wins, except that the generic fallback name never
/// replaces a more specific inherited default.
fn inherit_material<'a>(own: Option<&'a str>, inherited: &'a str) -> &'a str {
    match own {
        Some(name) if name == DEFAULT_MATERIAL && inherited != DEFAULT_MATERIAL => inherited,
        Some(name) => name,
        None => inherited,
    }
}

/// Read a model file and import it into `sink`.
///
/// A parser failure is not an error of the import call: it is logged and
/// the scene is left untouched, matching host importer conventions.
pub fn import_file<R, S>(
    reader: &R,
    path: &Path,
    options: ImportOptions,
    sink: &mut S,
) -> anyhow::Result<()>
where
    R: ModelReader,
    S: SceneSink,
{
    let started = Instant::now();
    log::info!("importing skp {:?}", path);

    let model = match reader.read(path) {
        Ok(model) => model,
        Err(e) => {
            log::error!("error reading input file {:?}: {e}", path);
            return Ok(());
        }
    };
    log::info!(
        "parsed skp {:?} in {:.4} sec",
        path,
        started.elapsed().as_secs_f64()
    );

    SceneImporter::new(options).import(&model, sink)?;

    log::info!(
        "finished importing {:?} in {:.4} sec",
        path,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_override_wins_over_the_inherited_default() {
        assert_eq!(inherit_material(Some("Brick"), "Stone"), "Brick");
        assert_eq!(inherit_material(Some("Brick"), DEFAULT_MATERIAL), "Brick");
    }

    #[test]
    fn missing_override_inherits() {
        assert_eq!(inherit_material(None, "Stone"), "Stone");
        assert_eq!(inherit_material(None, DEFAULT_MATERIAL), DEFAULT_MATERIAL);
    }

    #[test]
    fn generic_override_does_not_downgrade_a_specific_default() {
        assert_eq!(inherit_material(Some(DEFAULT_MATERIAL), "Stone"), "Stone");
        assert_eq!(
            inherit_material(Some(DEFAULT_MATERIAL), DEFAULT_MATERIAL),
            DEFAULT_MATERIAL
        );
    }
}
