//! Quotient-remainder stepping and integer divisibility helpers

/// Steps from `a` toward `b` in `n` increments without forming `k · (b - a)`
///
/// Each item is `(q, r)` where `q` is the current position and `r / n` the
/// fractional carry still owed. Produced by [`range_qr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotientSteps {
    q: i128,
    r: i128,
    end: i128,
    n: i128,
    quotient: i128,
    remainder: i128,
}

impl Iterator for QuotientSteps {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.n <= 0 || self.q >= self.end {
            return None;
        }
        let item = (i64::try_from(self.q).ok()?, i64::try_from(self.r).ok()?);
        self.r += self.remainder;
        self.q += self.quotient + self.r / self.n;
        self.r %= self.n;
        Some(item)
    }
}

/// Arithmetic progression over `[a, b)` in `n` steps
///
/// The step `(b - a) / n` is split into quotient and remainder and the
/// remainder carried, so positions are exact for any pair of `i64` bounds.
/// Zero or negative `n` yields nothing.
pub fn range_qr(a: i64, b: i64, n: i64) -> QuotientSteps {
    let span = i128::from(b) - i128::from(a);
    let n = i128::from(n);
    let (quotient, remainder) = if n > 0 { (span / n, span % n) } else { (0, 0) };
    QuotientSteps {
        q: i128::from(a),
        r: 0,
        end: i128::from(b),
        n,
        quotient,
        remainder,
    }
}

/// Greatest common divisor of the magnitudes
///
/// Returned unsigned so `gcd(i64::MIN, 0)` is representable.
pub const fn gcd(x: i64, y: i64) -> u64 {
    let (mut x, mut y) = (x.unsigned_abs(), y.unsigned_abs());
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}

/// Least common multiple of the magnitudes
///
/// Zero if either argument is zero, `None` if the result exceeds `u64`.
pub const fn lcm(x: i64, y: i64) -> Option<u64> {
    if x == 0 || y == 0 {
        return Some(0);
    }
    (x.unsigned_abs() / gcd(x, y)).checked_mul(y.unsigned_abs())
}
