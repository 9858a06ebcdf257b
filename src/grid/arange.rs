/// Evenly spaced values over the half-open interval `[start, stop)`.
///
/// The length is `ceil((stop - start) / step)` and element `i` is `start + i * d`, where `d` is the
/// step as actually realised by the first addition (`(start + step) - start`). Reproducing that
/// rule exactly keeps the arrays bit-identical to grids generated by earlier runs.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let len = arange_len(start, stop, step);
    if len == 0 {
        return Vec::new();
    }
    let d = (start + step) - start;
    (0..len).map(|i| start + (i as f64) * d).collect()
}

/// Number of elements [`arange`] produces
///
/// Saturates at `usize::MAX` for absurd spans, callers bound the length before allocating.
pub fn arange_len(start: f64, stop: f64, step: f64) -> usize {
    let n = span_len(start, stop, step);
    if n.is_nan() || n <= 0. {
        0
    } else {
        n as usize
    }
}

/// Unclamped `ceil((stop - start) / step)`, may be negative, infinite or NaN
pub fn span_len(start: f64, stop: f64, step: f64) -> f64 {
    ((stop - start) / step).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_steps() {
        assert_eq!(arange(-80., 8., 1.).len(), 88);
        assert_eq!(arange(-2., 0., 1.), vec![-2., -1.]);
        assert_eq!(arange(27., 67., 1.).last(), Some(&66.));
    }

    #[test]
    fn stop_is_excluded() {
        assert_eq!(arange(0., 3., 1.), vec![0., 1., 2.]);
        assert_eq!(arange(0., 3.5, 1.), vec![0., 1., 2., 3.]);
    }

    #[test]
    fn empty_when_stop_not_after_start() {
        assert!(arange(1., 1., 1.).is_empty());
        assert!(arange(2., 1., 1.).is_empty());
        assert_eq!(arange_len(2., 1., 1.), 0);
    }

    #[test]
    fn span_len_is_unclamped() {
        assert_eq!(span_len(0., 3., 1.), 3.);
        assert_eq!(span_len(2., 1., 1.), -1.);
        assert!(span_len(0., 1., 1e-300) > 1e299);
    }

    #[test]
    fn fractional_step_uses_realised_delta() {
        let step = 1. / 60.;
        let values = arange(-80. - step, -79., step);
        let d = (-80. - step + step) - (-80. - step);
        assert_eq!(values.len(), arange_len(-80. - step, -79., step));
        assert_eq!(values[0], -80. - step);
        assert_eq!(values[10], (-80. - step) + 10. * d);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
        assert!(*values.last().unwrap() < -79.);
    }
}
