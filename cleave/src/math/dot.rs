pub trait Dot {
    fn dot(self, rhs: Self) -> f32;
}

pub fn dot<V: Dot>(v1: V, v2: V) -> f32 {
    v1.dot(v2)
}

/// Weighted sum `w.x * a + w.y * b + w.z * c`, used to blend per-vertex attributes with barycentric weights.
pub fn blend<V>(a: V, b: V, c: V, w: super::Vec3) -> V
where
    V: Copy + std::ops::Add<Output = V> + std::ops::Mul<f32, Output = V>,
{
    a * w.x + b * w.y + c * w.z
}
