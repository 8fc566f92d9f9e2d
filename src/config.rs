//! Host-facing import configuration.
//!
//! These options mirror what a host application exposes in its import
//! dialog and addon preferences. The importer only consumes a subset
//! itself; the remaining knobs are carried so the host can forward its
//! preference block in one piece.

/// Options controlling a single import run.
#[derive(Clone, Debug)]
pub struct ImportOptions {
    /// Import the model's active camera as a scene camera.
    pub import_camera: bool,
    /// Reuse scene materials with matching names instead of creating new ones.
    pub reuse_material: bool,
    /// Far clip distance assigned to the imported camera.
    pub camera_far_plane: u32,
    /// Host hint: draw objects as bounds when the face count exceeds this.
    pub draw_bounds: u32,
    /// Host hint: switch to vertex-duplicated placement above this instance count.
    pub max_instance: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            import_camera: true,
            reuse_material: true,
            camera_far_plane: 1250,
            draw_bounds: 5000,
            max_instance: 50,
        }
    }
}
