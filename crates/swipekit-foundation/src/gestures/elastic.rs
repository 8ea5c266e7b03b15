//! Rubber-band damping for drags past a limit.

/// Damps `offset` beyond `±limit`.
///
/// Inside the limit the offset passes through unchanged. Past it, only
/// `ratio` of the excess is kept, so a ratio of `1.0` disables damping and
/// `0.0` pins the offset at the limit.
pub fn elastic_offset(offset: f32, limit: f32, ratio: f32) -> f32 {
    let limit = limit.max(0.0);
    let distance = offset.abs();
    if distance <= limit {
        return offset;
    }
    let excess = distance - limit;
    offset - (1.0 - ratio) * excess * offset.signum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_limit_is_untouched() {
        assert_eq!(elastic_offset(50.0, 100.0, 0.4), 50.0);
        assert_eq!(elastic_offset(-100.0, 100.0, 0.4), -100.0);
    }

    #[test]
    fn excess_is_scaled_by_ratio() {
        assert_eq!(elastic_offset(150.0, 100.0, 0.4), 120.0);
        assert_eq!(elastic_offset(-150.0, 100.0, 0.4), -120.0);
    }

    #[test]
    fn zero_limit_damps_everything() {
        assert_eq!(elastic_offset(-10.0, 0.0, 0.4), -4.0);
    }

    #[test]
    fn unit_ratio_disables_damping() {
        assert_eq!(elastic_offset(300.0, 10.0, 1.0), 300.0);
    }
}
