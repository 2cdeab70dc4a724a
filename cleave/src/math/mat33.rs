use crate::math::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat33(pub [f32; 9]);

impl Mat33 {
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6]) + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    pub fn transpose(&self) -> Mat33 {
        let m = &self.0;
        Mat33([
            m[0], m[3], m[6], //
            m[1], m[4], m[7], //
            m[2], m[5], m[8], //
        ])
    }
}

// Vec3 = Mat33 * Vec3
impl std::ops::Mul<Vec3> for Mat33 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.0;

        Vec3 {
            x: m[0] * v.x + m[1] * v.y + m[2] * v.z,
            y: m[3] * v.x + m[4] * v.y + m[5] * v.z,
            z: m[6] * v.x + m[7] * v.y + m[8] * v.z,
        }
    }
}
