//! Camera orientation.

use cgmath::{InnerSpace, Matrix4};

use crate::data_structures::model::Camera;

/// Build the world transform for the model camera.
///
/// Right-handed look-at basis: forward points from the target towards the
/// camera position, right and the corrected up complete it. The columns are
/// (right, up, forward, position).
pub(crate) fn camera_transform(camera: &Camera) -> Matrix4<f32> {
    let forward = (camera.position - camera.target).normalize();
    let right = forward.cross(camera.up.normalize()).normalize();
    let up = forward.cross(right);

    Matrix4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        forward.extend(0.0),
        camera.position.extend(1.0),
    )
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;

    use super::*;

    fn column(matrix: &Matrix4<f32>, index: usize) -> Vector3<f32> {
        let col = matrix[index];
        Vector3::new(col.x, col.y, col.z)
    }

    #[test]
    fn axis_aligned_camera_produces_an_orthonormal_basis() {
        let camera = Camera {
            position: Vector3::new(0.0, -10.0, 0.0),
            target: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 0.0, 2.0),
            fov: 35.0,
        };
        let transform = camera_transform(&camera);

        assert_eq!(column(&transform, 0), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(column(&transform, 1), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(column(&transform, 2), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(column(&transform, 3), camera.position);
        assert_eq!(transform[3].w, 1.0);
    }

    #[test]
    fn basis_vectors_are_unit_length_and_orthogonal() {
        let camera = Camera {
            position: Vector3::new(3.0, -7.0, 2.5),
            target: Vector3::new(-1.0, 4.0, 0.0),
            up: Vector3::new(0.0, 0.0, 1.0),
            fov: 50.0,
        };
        let transform = camera_transform(&camera);
        let right = column(&transform, 0);
        let up = column(&transform, 1);
        let forward = column(&transform, 2);

        for axis in [right, up, forward] {
            assert!((axis.magnitude() - 1.0).abs() < 1e-5);
        }
        assert!(right.dot(up).abs() < 1e-5);
        assert!(right.dot(forward).abs() < 1e-5);
        assert!(up.dot(forward).abs() < 1e-5);
    }
}
