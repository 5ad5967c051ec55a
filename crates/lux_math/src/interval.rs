/// An open range of ray parameters.
///
/// The intersection code only ever asks whether a root lies strictly
/// inside the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.001, 1.0);
        assert_eq!(interval.min, 0.001);
        assert_eq!(interval.max, 1.0);
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(1.0, f32::INFINITY);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(1.0));
        assert!(!interval.surrounds(f32::INFINITY));

        assert!(interval.surrounds(1.0001));
        assert!(interval.surrounds(1e30));

        assert!(!interval.surrounds(0.5));
        assert!(!interval.surrounds(-3.0));
        assert!(!interval.surrounds(f32::NAN));
    }

    #[test]
    fn test_inverted_interval_surrounds_nothing() {
        let inverted = Interval::new(f32::INFINITY, f32::NEG_INFINITY);
        assert!(!inverted.surrounds(0.0));
        assert!(!inverted.surrounds(1e10));
    }
}
