//! Easing curves on the unit interval.
//!
//! Inputs are clamped to `0.0..=1.0`, so both curves map the unit interval
//! onto itself and are monotonically non-decreasing.

/// `1 - (1 - x)^2`
pub fn ease_out_quad(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x) * (1.0 - x)
}

/// `1 - (1 - x)^3`
pub fn ease_out_cubic(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn known_values() {
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-6);
        assert!((ease_out_cubic(0.1) - 0.271).abs() < 1e-6);
        assert!((ease_out_cubic(0.2) - 0.488).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(ease_out_quad(1.5), 1.0);
        assert_eq!(ease_out_quad(-0.5), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn curves_lie_above_identity() {
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            assert!(ease_out_quad(x) >= x);
            assert!(ease_out_cubic(x) >= x);
        }
    }
}
