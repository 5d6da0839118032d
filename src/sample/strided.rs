/// Offsets `0, step, 2*step, ...` strictly below `end`.
///
/// Each offset is computed as `k * step`, so long walks do not accumulate
/// floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StridedRange {
    step: f64,
    end: f64,
    k: u64,
}

impl StridedRange {
    /// A non-positive or non-finite `step`, or a non-finite `end`, yields an
    /// empty range.
    pub fn new(end: f64, step: f64) -> Self {
        let valid = step > 0.0 && step.is_finite() && end.is_finite();
        let end = if valid { end } else { f64::NEG_INFINITY };
        Self { step, end, k: 0 }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for StridedRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let v = self.k as f64 * self.step;
        if v < self.end {
            self.k += 1;
            Some(v)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.end.is_nan() || self.end <= 0.0 {
            return (0, Some(0));
        }
        let total = (self.end / self.step).ceil() as u64;
        let remaining = total.saturating_sub(self.k) as usize;
        (remaining.saturating_sub(1), Some(remaining + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_multiples_of_step() {
        let offsets: Vec<f64> = StridedRange::new(3.0, 0.5).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_end_is_exclusive() {
        let offsets: Vec<f64> = StridedRange::new(17.0, 8.5).collect();
        assert_eq!(offsets, vec![0.0, 8.5]);
    }

    #[test]
    fn test_no_drift_over_long_walk() {
        let last = StridedRange::new(10_000.0, 0.1).last();
        assert_eq!(last, Some(99_999.0 * 0.1));
    }

    #[test]
    fn test_invalid_step_is_empty() {
        assert_eq!(StridedRange::new(10.0, 0.0).count(), 0);
        assert_eq!(StridedRange::new(10.0, -1.0).count(), 0);
        assert_eq!(StridedRange::new(10.0, f64::NAN).count(), 0);
    }

    #[test]
    fn test_unbounded_end_is_empty() {
        assert_eq!(StridedRange::new(f64::INFINITY, 0.5).count(), 0);
        assert_eq!(StridedRange::new(f64::NAN, 0.5).count(), 0);
        assert_eq!(StridedRange::new(f64::INFINITY, 0.5).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_brackets_count() {
        let range = StridedRange::new(1801.0, 8.5);
        let (lo, hi) = range.size_hint();
        let n = range.count();
        assert!(lo <= n);
        assert!(hi.is_some_and(|hi| n <= hi));
    }
}
