// Re-export glam for convenience
pub use glam::*;

// Raycast math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// RGB color with channels in the `[0, 1]` range.
pub type Color = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_creation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_normalize_keeps_direction() {
        let v = DVec3::new(0.0, 3.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.y - 0.6).abs() < 1e-12);
        assert!((v.z - 0.8).abs() < 1e-12);
    }
}
