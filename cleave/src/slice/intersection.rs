use super::triangle::AttributedTriangle;
use crate::math::*;
use arrayvec::ArrayVec;

/// Reusable output of a single triangle/plane split.
#[derive(Debug, Clone, Default)]
pub struct IntersectionResult {
    upper: ArrayVec<AttributedTriangle, 2>,
    lower: ArrayVec<AttributedTriangle, 2>,
    points: ArrayVec<Vec3, 2>,
    is_valid: bool,
}

impl IntersectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.upper.clear();
        self.lower.clear();
        self.points.clear();
        self.is_valid = false;
    }

    pub fn add_upper(&mut self, tri: AttributedTriangle) {
        self.upper.push(tri);
        self.is_valid = true;
    }

    pub fn add_lower(&mut self, tri: AttributedTriangle) {
        self.lower.push(tri);
        self.is_valid = true;
    }

    pub fn add_point(&mut self, p: Vec3) {
        self.points.push(p);
    }

    pub fn upper(&self) -> &[AttributedTriangle] {
        &self.upper
    }

    pub fn lower(&self) -> &[AttributedTriangle] {
        &self.lower
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_once_a_triangle_is_added() {
        let mut result = IntersectionResult::new();
        assert!(!result.is_valid());

        result.add_point(Vec3::X);
        assert!(!result.is_valid());

        result.add_lower(AttributedTriangle::new(Vec3::ZERO, Vec3::X, Vec3::Y));
        assert!(result.is_valid());
        assert_eq!(result.lower().len(), 1);
        assert_eq!(result.points(), &[Vec3::X]);

        result.clear();
        assert!(!result.is_valid());
        assert!(result.upper().is_empty() && result.lower().is_empty() && result.points().is_empty());
    }
}
