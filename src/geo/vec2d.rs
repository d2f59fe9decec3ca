use num::{Float, Num};
use std::ops::{Add, Mul, Sub};

/// A 2D vector generic over any numeric type.
///
/// Used for projected map coordinates (map units) as well as pixel positions
/// on a raster canvas.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Vec2D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    ///
    /// # Arguments
    /// * `x` - The x-component of the vector.
    /// * `y` - The y-component of the vector.
    ///
    /// # Returns
    /// A new `Vec2D` object.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Num + Copy> Vec2D<T> {
    /// Shifts the vector along the x-axis only.
    ///
    /// # Arguments
    /// * `dx` - The horizontal displacement.
    ///
    /// # Returns
    /// The translated vector.
    pub fn translate_x(self, dx: T) -> Self { Self::new(self.x + dx, self.y) }
}

impl<T: Float> Vec2D<T> {
    /// Computes the magnitude (absolute value) of the vector.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2)).sqrt() }

    /// Computes the Euclidean distance between the current vector and another vector.
    pub fn euclid_distance(&self, other: &Self) -> T { (*other - *self).abs() }

    /// Linear interpolation between `self` and `other`.
    ///
    /// # Arguments
    /// * `other` - The target vector reached at `t = 1`.
    /// * `t` - Interpolation parameter, usually within `[0, 1]`.
    ///
    /// # Returns
    /// The interpolated point `self + (other - self) * t`.
    pub fn lerp(self, other: Self, t: T) -> Self { self + (other - self) * t }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<T: Num + Copy> Add for Vec2D<T> {
    type Output = Vec2D<T>;

    fn add(self, rhs: Vec2D<T>) -> Self::Output { Self::new(self.x + rhs.x, self.y + rhs.y) }
}

impl<T: Num + Copy> Sub for Vec2D<T> {
    type Output = Vec2D<T>;

    fn sub(self, rhs: Vec2D<T>) -> Self::Output { Self::new(self.x - rhs.x, self.y - rhs.y) }
}

impl<T: Num + Copy> Mul<T> for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `*` operator for a `Vec2D` and a scalar.
    fn mul(self, rhs: T) -> Self::Output { Self::new(self.x * rhs, self.y * rhs) }
}
