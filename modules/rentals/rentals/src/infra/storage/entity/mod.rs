use time::OffsetDateTime;

pub mod profile;
pub mod property;
pub mod review;
pub mod role;

/// Unix nanoseconds of `at`, stored next to `created_at` as a fixed-width
/// ordering key. Saturates outside the `i64` range (before 1677, after 2262).
#[must_use]
pub fn created_at_key(at: OffsetDateTime) -> i64 {
    let nanos = at.unix_timestamp_nanos();
    i64::try_from(nanos).unwrap_or(if nanos < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::created_at_key;
    use time::{Duration, OffsetDateTime};

    #[test]
    fn key_orders_sub_second_instants() {
        let base = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let half = base + Duration::milliseconds(500);
        let later = half + Duration::microseconds(10);

        assert!(created_at_key(base) < created_at_key(half));
        assert!(created_at_key(half) < created_at_key(later));
        assert_eq!(created_at_key(base), 1_700_000_000_000_000_000);
    }
}
