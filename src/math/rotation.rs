use crate::error::{GeometryError, Result};

use super::{Matrix3, Vector3, TOLERANCE};

/// Builds the 3x3 matrix rotating by `angle` (radians) around `axis`
/// (Rodrigues' rotation formula).
///
/// The axis need not be unit length; it is normalized internally.
///
/// # Errors
///
/// Returns an error if the axis is zero-length.
#[allow(clippy::many_single_char_names)]
pub fn rotation_matrix(axis: &Vector3, angle: f64) -> Result<Matrix3> {
    let len = axis.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let axis = axis / len;

    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    let m = Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    );
    Ok(m)
}
