pub trait NumberType {
    fn abs(x: Self) -> Self;
}
impl NumberType for f32 {
    fn abs(x: Self) -> Self {
        Self::abs(x)
    }
}
impl NumberType for f64 {
    fn abs(x: Self) -> Self {
        Self::abs(x)
    }
}
impl NumberType for i32 {
    fn abs(x: Self) -> Self {
        Self::abs(x)
    }
}
