use std::sync::Arc;

use cgmath::Vector3;
use skp_import::data_structures::mesh::Material;
use skp_import::data_structures::model::{Entities, MaterialData, TextureData};
use skp_import::{ImportOptions, MemoryScene, SceneImporter, SceneSink, DEFAULT_MATERIAL};

use crate::common::test_utils::{init_logger, model_with, plain_material, triangle_face};

mod common;

fn png_bytes() -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 160, 120, 255]))
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

#[test]
fn should_register_all_model_materials_plus_the_default() {
    init_logger();

    let model = model_with(
        Entities::default(),
        vec![
            plain_material("Brick", [204, 102, 51, 255]),
            plain_material("Glass", [255, 255, 255, 128]),
        ],
    );
    let mut scene = MemoryScene::new();
    SceneImporter::new(ImportOptions::default())
        .import(&model, &mut scene)
        .unwrap();

    assert_eq!(scene.material_count(), 3);
    assert!(scene.material(DEFAULT_MATERIAL).is_some());

    let brick = scene.material("Brick").unwrap();
    assert_eq!(brick.diffuse, [204.0 / 256.0, 102.0 / 256.0, 51.0 / 256.0]);
    assert!(!brick.is_transparent());

    let glass = scene.material("Glass").unwrap();
    assert_eq!(glass.alpha, 0.5);
    assert!(glass.is_transparent());
}

#[test]
fn should_reuse_scene_materials_when_enabled() {
    init_logger();

    let mut scene = MemoryScene::new();
    let existing = Arc::new(Material::untextured("Brick", [1.0, 0.0, 0.0]));
    scene.add_material(Arc::clone(&existing));

    let model = model_with(
        Entities {
            faces: vec![triangle_face(Vector3::new(0.0, 0.0, 0.0), Some("Brick"))],
            ..Entities::default()
        },
        vec![plain_material("Brick", [0, 0, 255, 255])],
    );
    SceneImporter::new(ImportOptions::default())
        .import(&model, &mut scene)
        .unwrap();

    // the preexisting resource is attached to the mesh, untouched
    let mesh = &scene.objects[0].mesh;
    assert!(Arc::ptr_eq(&mesh.materials[0], &existing));
    assert_eq!(scene.material("Brick").unwrap().diffuse, [1.0, 0.0, 0.0]);
}

#[test]
fn should_replace_scene_materials_when_reuse_is_disabled() {
    init_logger();

    let mut scene = MemoryScene::new();
    let existing = Arc::new(Material::untextured("Brick", [1.0, 0.0, 0.0]));
    scene.add_material(Arc::clone(&existing));

    let model = model_with(
        Entities::default(),
        vec![plain_material("Brick", [0, 0, 255, 255])],
    );
    let options = ImportOptions {
        reuse_material: false,
        ..ImportOptions::default()
    };
    SceneImporter::new(options).import(&model, &mut scene).unwrap();

    let replaced = scene.material("Brick").unwrap();
    assert!(!Arc::ptr_eq(&replaced, &existing));
    assert_eq!(replaced.diffuse, [0.0, 0.0, 255.0 / 256.0]);
}

#[test]
fn should_pack_textures_and_emit_a_uv_layer() {
    init_logger();

    let textured = MaterialData {
        name: "Wood".to_string(),
        color: [150, 100, 50, 255],
        texture: Some(TextureData {
            name: "C:\\Users\\demo\\textures\\wood.png".to_string(),
            data: png_bytes(),
        }),
    };
    let model = model_with(
        Entities {
            faces: vec![triangle_face(Vector3::new(0.0, 0.0, 0.0), Some("Wood"))],
            ..Entities::default()
        },
        vec![textured],
    );
    let mut scene = MemoryScene::new();
    SceneImporter::new(ImportOptions::default())
        .import(&model, &mut scene)
        .unwrap();

    let mesh = &scene.objects[0].mesh;
    assert!(mesh.materials[0].has_texture());
    let uvs = mesh.uv_layer.as_ref().expect("textured mesh carries UVs");
    assert_eq!(uvs.len(), mesh.triangle_count());
}

#[test]
fn should_fall_back_to_untextured_on_broken_texture_data() {
    init_logger();

    let broken = MaterialData {
        name: "Broken".to_string(),
        color: [150, 100, 50, 255],
        texture: Some(TextureData {
            name: "broken.png".to_string(),
            data: vec![1, 2, 3, 4],
        }),
    };
    let model = model_with(
        Entities {
            faces: vec![triangle_face(Vector3::new(0.0, 0.0, 0.0), Some("Broken"))],
            ..Entities::default()
        },
        vec![broken],
    );
    let mut scene = MemoryScene::new();
    SceneImporter::new(ImportOptions::default())
        .import(&model, &mut scene)
        .unwrap();

    let mesh = &scene.objects[0].mesh;
    assert!(!mesh.materials[0].has_texture());
    assert!(mesh.uv_layer.is_none());
}
