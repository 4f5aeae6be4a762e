use glam::DVec3;

/// A value that can be blended between two keyframes.
///
/// Implementations must return `start` bit-for-bit when `t == 0.0`.
pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: &Self, end: &Self, t: f64) -> Self;

    /// Returns `true` when every component is a finite number.
    fn is_finite_value(&self) -> bool;
}

impl Interpolatable for f64 {
    fn interpolate_linear(start: &Self, end: &Self, t: f64) -> Self {
        start + t * (end - start)
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Interpolatable for DVec3 {
    // Per-component `start + t * (end - start)`, same as the scalar form.
    fn interpolate_linear(start: &Self, end: &Self, t: f64) -> Self {
        DVec3::new(
            f64::interpolate_linear(&start.x, &end.x, t),
            f64::interpolate_linear(&start.y, &end.y, t),
            f64::interpolate_linear(&start.z, &end.z, t),
        )
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}
