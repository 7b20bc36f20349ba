use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude() {
        let c = Complex {
            real: -3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_zero() {
        let c = Complex {
            real: 0.0,
            imag: 0.0,
        };
        assert_eq!(c.magnitude(), 0.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: -7.0,
        };
        let result = a + b;
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }

    #[test]
    fn test_square_plus_c() {
        // (2 + 3i)² + (1 - 1i) = -5 + 12i + 1 - 1i = -4 + 11i
        let z = Complex {
            real: 2.0,
            imag: 3.0,
        };
        let c = Complex {
            real: 1.0,
            imag: -1.0,
        };
        let result = z * z + c;
        assert_eq!(result.real, -4.0);
        assert_eq!(result.imag, 11.0);
    }
}
