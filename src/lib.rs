//! skp-import
//!
//! A SketchUp (.skp) scene import engine. This crate consumes a parsed,
//! instance-based model — faces, groups, component definitions and their
//! placements — and materializes it into a host scene graph as
//! deduplicated, renderer-ready meshes. Repeated component instances share
//! one consolidated mesh and differ only in their placement transforms.
//! The binary file parser and the host application stay behind narrow
//! trait seams, so the engine itself has no file-format or host coupling.
//!
//! High-level modules
//! - `config`: host-facing import options
//! - `data_structures`: parsed model input and consolidated mesh output
//! - `import`: the consolidation engine (mesh builder, walker, materials)
//! - `sink`: the scene graph seam and the in-memory reference scene
//!

pub mod config;
pub mod data_structures;
pub mod import;
pub mod sink;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use config::ImportOptions;
pub use import::{import_file, ImportError, SceneImporter, DEFAULT_MATERIAL};
pub use sink::{MemoryScene, SceneCamera, SceneObject, SceneSink};
