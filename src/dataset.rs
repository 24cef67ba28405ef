/// A pair of equal-length sequences to regress `y` on `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    pub x: &'static [f64],
    pub y: &'static [f64],
}

impl Dataset {
    /// Number of points in the pair.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

const X_SHARED: [f64; 11] = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];

/// Anscombe's quartet, in its conventional order.
///
/// All four pairs share (to two decimals) the same means, variances,
/// correlation and regression line, while looking nothing alike when plotted.
pub const ANSCOMBE_QUARTET: [Dataset; 4] = [
    Dataset {
        x: &X_SHARED,
        y: &[8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68],
    },
    Dataset {
        x: &X_SHARED,
        y: &[9.14, 8.14, 8.74, 8.77, 9.26, 8.1, 6.13, 3.1, 9.13, 7.26, 4.74],
    },
    Dataset {
        x: &X_SHARED,
        y: &[7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73],
    },
    // a single outlier at x = 19 carries the whole slope
    Dataset {
        x: &[8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0],
        y: &[6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.5, 5.56, 7.91, 6.89],
    },
];
