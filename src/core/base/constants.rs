use super::types::Float;

pub const DOUBLE_ONE_MINUS_EPSILON: f64 = 0.99999999999999989;
pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;

#[cfg(not(feature = "float-as-double"))]
mod detail {
    use super::*;

    pub const PI: Float = std::f32::consts::PI; //3.14159265358979323846;
    pub const ONE_MINUS_EPSILON: Float = FLOAT_ONE_MINUS_EPSILON;
}

#[cfg(feature = "float-as-double")]
mod detail {
    use super::*;

    pub const PI: Float = std::f64::consts::PI; //3.14159265358979323846;
    pub const ONE_MINUS_EPSILON: Float = DOUBLE_ONE_MINUS_EPSILON;
}

pub use detail::*;
