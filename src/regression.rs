use core::fmt;

use num_traits::Float;

/// Coefficients of a fitted straight line `y = k*x + b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope
    pub k: T,
    /// Intercept
    pub b: T,
}

impl<T: Float> LinearFit<T> {
    /// Evaluates the line at `x`
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::LinearFit;
    ///
    /// let line = LinearFit { k: 0.5, b: 2.0 };
    /// assert_eq!(line.predict(4.0), 4.0);
    /// ```
    pub fn predict(&self, x: T) -> T {
        self.k * x + self.b
    }
}

impl<T> From<LinearFit<T>> for (T, T) {
    fn from(fit: LinearFit<T>) -> Self {
        (fit.k, fit.b)
    }
}

impl<T: fmt::Display> fmt::Display for LinearFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*x + {}", self.k, self.b)
    }
}

/// Coefficients of a fitted parabola `y = a*x^2 + b*x + c`
///
/// The `Display` form is the algebraic expression `A*x^2 + B*x + C` with the
/// coefficients printed verbatim, so a negative coefficient reads `+ -3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicFit<T> {
    /// Quadratic coefficient
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Constant term
    pub c: T,
}

impl<T: Float> ParabolicFit<T> {
    /// Evaluates the parabola at `x`
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::ParabolicFit;
    ///
    /// let p = ParabolicFit { a: 2.0, b: -3.0, c: 1.0 };
    /// assert_eq!(p.predict(3.0), 10.0);
    /// ```
    pub fn predict(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }
}

impl<T> From<ParabolicFit<T>> for (T, T, T) {
    fn from(fit: ParabolicFit<T>) -> Self {
        (fit.a, fit.b, fit.c)
    }
}

impl<T: fmt::Display> fmt::Display for ParabolicFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*x^2 + {}*x + {}", self.a, self.b, self.c)
    }
}
