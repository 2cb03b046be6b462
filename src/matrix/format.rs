//! Text rendering of matrices
//!
//! The compact form is `[a,b;c,d]`: commas between columns, semicolons between
//! rows. A precision (`{:.2}`) is applied to every element. A width (`{:6}`)
//! switches to one row per line with every cell right-aligned to at least that
//! many characters. The alternate flag (`{:#}`) prefixes the shape.

use std::fmt;

use crate::matrix::dense::Matrix;
use crate::matrix::element::Scalar;

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Matrix({}x{})", self.width(), self.height())?;
        }
        if self.is_empty() {
            return f.write_str("[]");
        }

        let precision = f.precision();
        let render = |value: T| match precision {
            Some(digits) => format!("{value:.digits$}"),
            None => format!("{value}"),
        };
        let rendered: Vec<String> = self.values().map(render).collect();

        let Some(min_width) = f.width() else {
            f.write_str("[")?;
            for (i, text) in rendered.iter().enumerate() {
                if i > 0 {
                    f.write_str(if i % self.width() == 0 { ";" } else { "," })?;
                }
                f.write_str(text)?;
            }
            return f.write_str("]");
        };

        let cell_width = rendered
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max(min_width);
        f.write_str("[")?;
        for (y, row) in rendered.chunks(self.width()).enumerate() {
            if y > 0 {
                f.write_str(";\n ")?;
            }
            for (x, text) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{text:>cell_width$}")?;
            }
        }
        f.write_str("]")
    }
}
