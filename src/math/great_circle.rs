use crate::error::{GeometryError, Result};

use super::{rotation_matrix, Vector3, TOLERANCE};

/// Samples the great-circle arc between two unit vectors.
///
/// Returns `samples` points, linearly spaced in angle from `start` to `end`
/// inclusive at both ends. Each point is `start` rotated around
/// `start x end` by a fraction of the angular separation
/// `arccos(start . end)`, so for unit inputs every sample lies on the unit
/// sphere.
///
/// Coincident endpoints yield `samples` copies of `start`.
///
/// # Errors
///
/// Returns an error if fewer than 2 samples are requested, or if the
/// endpoints are antipodal (the rotation axis is undefined).
#[allow(clippy::cast_precision_loss)]
pub fn great_circle_arc(start: &Vector3, end: &Vector3, samples: usize) -> Result<Vec<Vector3>> {
    if samples < 2 {
        return Err(GeometryError::InsufficientSamples(samples).into());
    }

    let axis = start.cross(end);
    let cos_angle = start.dot(end).clamp(-1.0, 1.0);

    if axis.norm() < TOLERANCE {
        if cos_angle > 0.0 {
            return Ok(vec![*start; samples]);
        }
        return Err(GeometryError::AntipodalArc.into());
    }

    let angle = cos_angle.acos();
    let step = angle / (samples - 1) as f64;

    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let rot = rotation_matrix(&axis, step * i as f64)?;
        points.push(rot * start);
    }
    Ok(points)
}
