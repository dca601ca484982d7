//! City model: an immutable point in the plane.

use std::fmt;

/// A city on the 2D plane.
///
/// Coordinates are fixed at construction and never mutated; cities are
/// cheap `Copy` values shared freely across tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another city.
    ///
    /// Symmetric: `a.distance_to(&b) == b.distance_to(&a)`.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3_4_5() {
        let a = City::new(0, 0);
        let b = City::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric() {
        let pairs = [
            (City::new(0, 0), City::new(7, -2)),
            (City::new(-13, 5), City::new(40, 40)),
            (City::new(1, 1), City::new(1, 1)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = City::new(12, 34);
        assert_eq!(c.distance_to(&c), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(City::new(3, -7).to_string(), "3,-7");
    }
}
