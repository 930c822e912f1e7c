use super::numeric_traits::*;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vector2::<T> { x, y }
    }
}

impl<T: Default> Vector2<T> {
    #[inline]
    pub fn zero() -> Self {
        Vector2::<T> {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Copy + NumberType> Vector2<T> {
    #[inline]
    pub fn abs(&self) -> Self {
        Vector2::<T> {
            x: NumberType::abs(self.x),
            y: NumberType::abs(self.y),
        }
    }
}

// Add
impl<T: std::ops::Add<Output = T>> ops::Add<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        };
    }
}

// Sub
impl<T: std::ops::Sub<Output = T>> ops::Sub<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        };
    }
}

// Mul
impl<T: std::ops::Mul<Output = T>> ops::Mul<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        };
    }
}

impl<T: std::ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector2<T> {
        return Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        };
    }
}

impl<T> ops::Index<usize> for Vector2<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {}", i),
        }
    }
}

impl<T: Copy> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from(t: (T, T)) -> Self {
        Vector2::<T> { x: t.0, y: t.1 }
    }
}

impl<T: Copy> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(t: [T; 2]) -> Self {
        Vector2::<T> { x: t[0], y: t[1] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = Vector2::<f32>::new(1.0, -2.0);
        let b = Vector2::<f32>::from((3.0, 4.0));
        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(b - a, Vector2::new(2.0, 6.0));
        assert_eq!(a * b, Vector2::new(3.0, -8.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, -4.0));
        assert_eq!(a.abs(), Vector2::new(1.0, 2.0));
        assert_eq!(a[0], 1.0);
        assert_eq!(a[1], -2.0);
        assert_eq!(Vector2::<i32>::zero(), Vector2::from([0, 0]));
    }
}
