/// Bounds a progress percentage into `[0, 100]`.
///
/// Total function with no error cases: out-of-range input is normalized,
/// never rejected. Idempotent.
pub fn clamp_progress(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_through() {
        assert_eq!(clamp_progress(0), 0);
        assert_eq!(clamp_progress(40), 40);
        assert_eq!(clamp_progress(100), 100);
    }

    #[test]
    fn out_of_range_values_saturate() {
        assert_eq!(clamp_progress(-1), 0);
        assert_eq!(clamp_progress(-1000), 0);
        assert_eq!(clamp_progress(101), 100);
        assert_eq!(clamp_progress(i32::MAX), 100);
        assert_eq!(clamp_progress(i32::MIN), 0);
    }

    #[test]
    fn idempotent() {
        for x in [-500, -1, 0, 37, 100, 101, 99999] {
            let once = clamp_progress(x);
            assert_eq!(clamp_progress(i32::from(once)), once);
        }
    }
}
