//! Material resolution.
//!
//! Runs once per import, before the entity walk: every source material is
//! mapped to a renderer-side [`Material`] resource, either reused from the
//! sink or freshly built. Embedded textures are extracted to a temporary
//! file, decoded, and packed into the resource; the temporary file is
//! removed when the extraction scope ends, whether or not decoding worked.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;

use crate::data_structures::mesh::Material;
use crate::data_structures::model::{MaterialData, TextureData};
use crate::sink::SceneSink;

/// Name of the generic fallback material, always registered.
pub const DEFAULT_MATERIAL: &str = "Material";

/// Resolve all source materials against the sink.
///
/// With `reuse` set, a sink material of the same name wins over building a
/// new resource. The returned map always contains [`DEFAULT_MATERIAL`].
pub(crate) fn resolve_materials<S: SceneSink>(
    materials: &[MaterialData],
    reuse: bool,
    sink: &mut S,
) -> HashMap<String, Arc<Material>> {
    let mut resolved = HashMap::new();

    let fallback = reuse
        .then(|| sink.material(DEFAULT_MATERIAL))
        .flatten()
        .unwrap_or_else(|| {
            let material = Arc::new(Material::untextured(DEFAULT_MATERIAL, [0.8, 0.8, 0.8]));
            sink.add_material(Arc::clone(&material));
            material
        });
    resolved.insert(DEFAULT_MATERIAL.to_string(), fallback);

    for data in materials {
        let existing = reuse.then(|| sink.material(&data.name)).flatten();
        let material = match existing {
            Some(material) => material,
            None => {
                let material = Arc::new(build_material(data));
                sink.add_material(Arc::clone(&material));
                material
            }
        };
        resolved.insert(data.name.clone(), material);
    }

    resolved
}

/// Build a renderer resource from source material data.
fn build_material(data: &MaterialData) -> Material {
    let [r, g, b, a] = data.color;
    // byte channels, normalised by 256
    let diffuse = [r as f32 / 256.0, g as f32 / 256.0, b as f32 / 256.0];
    let alpha = if a < 255 { a as f32 / 256.0 } else { 1.0 };

    let texture = data.texture.as_ref().and_then(|tex| match extract_texture(tex) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("failed to extract texture {:?}: {e}", tex.name);
            None
        }
    });

    Material {
        name: data.name.clone(),
        diffuse,
        alpha,
        texture,
    }
}

/// Write the embedded texture bytes to a temporary file and decode them.
///
/// The temporary file is dropped before this returns, on both paths.
fn extract_texture(texture: &TextureData) -> anyhow::Result<RgbaImage> {
    // texture paths are recorded with Windows separators
    let file_name = texture
        .name
        .rsplit('\\')
        .next()
        .unwrap_or(texture.name.as_str());
    let suffix = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let tmp = tempfile::Builder::new()
        .prefix("skp-tex-")
        .suffix(&suffix)
        .tempfile()?;
    std::fs::write(tmp.path(), &texture.data)?;
    let image = image::ImageReader::open(tmp.path())?
        .with_guessed_format()?
        .decode()?;
    Ok(image.to_rgba8())
}
