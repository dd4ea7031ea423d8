//! 2D transformation matrices for positioning content.

/// A transformation matrix, applied to a content stream with the `cm` operator.
///
/// Uses the standard PDF transformation matrix where (0,0) is at the bottom-left.
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
///
/// # Composing transforms
///
/// Transforms can be chained using [`then`](Transform::then) or
/// [`with_translate`](Transform::with_translate). Operations are applied in the
/// order they're chained.
///
/// ```
/// use overlay_gen::Transform;
///
/// // work in inches, then move the origin an inch right and up
/// let transform = Transform::scale(72.0, 72.0).with_translate(72.0, 72.0);
/// assert_eq!(transform.coefficients(), [72.0, 0.0, 0.0, 72.0, 72.0, 72.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: f64, y: f64) -> Self {
        Transform {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f64, sy: f64) -> Self {
        Transform {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: f64, y: f64) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// The six matrix operands, in the order `cm` expects them
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}
