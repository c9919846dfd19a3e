//! Stateless geometry helpers shared by the collision resolver and the
//! opponent's trajectory prediction.

/// Restrict `v` to `[lo, hi]`. Callers guarantee `lo <= hi`.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Linear interpolation. `t` is intentionally unrestricted.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Two-valued sign: zero maps to `+1.0`.
pub fn sign(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Map an unbounded coordinate into `[min, max]` by simulating elastic
/// reflection off both bounds, as if the value had been bouncing between two
/// walls starting at `min` heading upward.
///
/// Wall bounces and the opponent's arrival prediction both use this, so the
/// reflection semantics must stay identical between the two.
pub fn fold_reflect(y: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        // Degenerate field: safe fallback, not a fault
        return min;
    }
    let period = 2.0 * span;
    let mut v = (y - min).rem_euclid(period);
    if v > span {
        v = period - v;
    }
    v + min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_range_is_identity() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_outside_range() {
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(13.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_lerp_allows_overshoot() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_sign_is_two_valued() {
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(0.0), 1.0, "Zero maps to +1");
    }

    #[test]
    fn test_fold_reflect_identity_inside_range() {
        for y in [0.0, 2.5, 5.0, 9.9, 10.0] {
            assert_eq!(fold_reflect(y, 0.0, 10.0), y);
        }
    }

    #[test]
    fn test_fold_reflect_above_max() {
        assert_eq!(fold_reflect(11.0, 0.0, 10.0), 9.0);
        assert_eq!(fold_reflect(13.0, 0.0, 10.0), 7.0);
    }

    #[test]
    fn test_fold_reflect_below_min() {
        assert_eq!(fold_reflect(-1.0, 0.0, 10.0), 1.0);
        assert_eq!(fold_reflect(-2.0, 0.0, 10.0), 2.0);
    }

    #[test]
    fn test_fold_reflect_multiple_periods() {
        // One full period away lands on the same point
        assert_eq!(fold_reflect(25.0, 0.0, 10.0), 5.0);
        assert_eq!(fold_reflect(-15.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn test_fold_reflect_nonzero_min() {
        assert_eq!(fold_reflect(12.0, 4.0, 10.0), 8.0);
        assert_eq!(fold_reflect(2.0, 4.0, 10.0), 6.0);
    }

    #[test]
    fn test_fold_reflect_degenerate_span() {
        assert_eq!(fold_reflect(7.0, 5.0, 5.0), 5.0);
        assert_eq!(fold_reflect(7.0, 5.0, 3.0), 5.0);
    }

    #[test]
    fn test_fold_reflect_stays_in_range() {
        for i in -50..50 {
            let y = i as f32 * 1.7;
            let folded = fold_reflect(y, 3.0, 17.0);
            assert!((3.0..=17.0).contains(&folded), "{y} folded to {folded}");
        }
    }
}
