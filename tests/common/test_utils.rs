use cgmath::{Matrix4, Vector2, Vector3};
use skp_import::data_structures::model::{Entities, Face, MaterialData, Model};

/// Logging for failed test diagnosis; safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn plain_material(name: &str, color: [u8; 4]) -> MaterialData {
    MaterialData {
        name: name.to_string(),
        color,
        texture: None,
    }
}

/// A single triangle at `offset`, with one (u, v) pair per corner.
pub fn triangle_face(offset: Vector3<f32>, material: Option<&str>) -> Face {
    let vertices = vec![
        offset,
        offset + Vector3::new(1.0, 0.0, 0.0),
        offset + Vector3::new(0.0, 1.0, 0.0),
    ];
    let uvs = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
    ];
    Face {
        vertices,
        triangles: vec![[0, 1, 2]],
        uvs,
        material: material.map(str::to_string),
    }
}

pub fn model_with(entities: Entities, materials: Vec<MaterialData>) -> Model {
    Model {
        camera: None,
        materials,
        entities,
    }
}

pub fn assert_mat4_eq(actual: &Matrix4<f32>, expected: &Matrix4<f32>) {
    for col in 0..4 {
        for row in 0..4 {
            let a = actual[col][row];
            let e = expected[col][row];
            assert!(
                (a - e).abs() < 1e-5,
                "matrix mismatch at column {col}, row {row}: {a} vs {e}"
            );
        }
    }
}
