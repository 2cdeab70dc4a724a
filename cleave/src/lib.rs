pub mod math;
pub mod slice;
