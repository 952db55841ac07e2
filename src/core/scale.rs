use crate::error::{ChartError, ChartResult};

/// Maps a value domain onto a pixel span.
///
/// The span may run backwards (`pixel_start > pixel_end`), which is how the
/// value axis puts larger values towards the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel span must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    /// Builds a domain covering `values`, padding a single-valued range
    /// by one unit (or 1% of the value, whichever is larger).
    ///
    /// Non-finite values are skipped. With nothing finite the domain is `0..1`.
    /// Padded bounds are clamped to `±f64::MAX`, so any finite input fits.
    pub fn fit_values<'a>(
        values: impl IntoIterator<Item = &'a f64>,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().copied().filter(|v| v.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }

        let (start, end) = if min > max {
            (0.0, 1.0)
        } else if min == max {
            let pad = (min.abs() * 0.01).max(1.0);
            ((min - pad).max(f64::MIN), (max + pad).min(f64::MAX))
        } else {
            (min, max)
        };
        Self::new(start, end, pixel_start, pixel_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Value at fraction `t` of the domain; `0.0` and `1.0` hit the bounds exactly.
    #[must_use]
    pub fn domain_at(self, t: f64) -> f64 {
        self.domain_start * (1.0 - t) + self.domain_end * t
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = if span.is_finite() {
            (value - self.domain_start) / span
        } else {
            // Domains wider than f64::MAX are normalized on halved operands.
            (value / 2.0 - self.domain_start / 2.0)
                / (self.domain_end / 2.0 - self.domain_start / 2.0)
        };
        Ok(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }
}
