//! Scalar activation functions for use with `Matrix::map`

/// Leaky rectifier with slope `a` for negative inputs
///
/// `a = 0` gives the plain rectifier.
pub fn relu(a: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| if x >= 0.0 { x } else { a * x }
}

/// Logistic sigmoid `1 / (1 + e^-x)`
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Softplus `ln(1 + e^x)`
pub fn softplus(x: f64) -> f64 {
    x.exp().ln_1p()
}

/// Mish `x · tanh(softplus(x))`
pub fn mish(x: f64) -> f64 {
    let y = x.exp() + 1.0;
    x * (1.0 - 2.0 / y.mul_add(y, 1.0))
}
