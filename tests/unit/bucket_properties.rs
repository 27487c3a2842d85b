//! Properties every bucket conversion must hold, checked over ranges of
//! timestamps rather than single points.

use crate::common::{utc, SAMPLE_BUCKET, SAMPLE_SECONDS};
use chrono::{FixedOffset, TimeZone, Utc};
use minute_bucket::bucket::{
    bucket_end, bucket_start, bucket_to_unix, bucket_to_unix_micros, bucket_to_unix_millis,
    bucket_to_unix_nanos, bucket_to_unix_seconds, current_bucket, time_to_bucket,
    unix_seconds_to_bucket, unix_to_bucket, Resolution, SECONDS_PER_BUCKET,
};

#[test]
fn test_sample_scenario() {
    assert_eq!(time_to_bucket(&utc(SAMPLE_SECONDS)), SAMPLE_BUCKET);
    assert_eq!(bucket_to_unix_seconds(SAMPLE_BUCKET), 1_699_999_980);
    assert_eq!(time_to_bucket(&utc(1_700_000_060)), SAMPLE_BUCKET + 1);
}

#[test]
fn test_every_second_of_a_window_shares_the_bucket() {
    let start = bucket_to_unix_seconds(SAMPLE_BUCKET);
    for offset in 0..SECONDS_PER_BUCKET {
        assert_eq!(time_to_bucket(&utc(start + offset)), SAMPLE_BUCKET);
    }
    assert_eq!(time_to_bucket(&utc(start - 1)), SAMPLE_BUCKET - 1);
    assert_eq!(
        time_to_bucket(&utc(start + SECONDS_PER_BUCKET)),
        SAMPLE_BUCKET + 1
    );
}

#[test]
fn test_round_trip_lands_within_window() {
    let mut t = -10_000;
    while t < 10_000 {
        let start = bucket_to_unix_seconds(time_to_bucket(&utc(t)));
        assert!(start <= t, "start {} after {}", start, t);
        assert!(t - start < SECONDS_PER_BUCKET, "{} too far from {}", t, start);
        t += 7;
    }

    for t in [SAMPLE_SECONDS, 0, 4_102_444_800, -2_208_988_800] {
        let start = bucket_to_unix_seconds(unix_seconds_to_bucket(t));
        assert!((0..SECONDS_PER_BUCKET).contains(&(t - start)));
    }
}

#[test]
fn test_monotonic() {
    let mut previous = time_to_bucket(&utc(-3_600));
    for t in (-3_599..3_600).step_by(13) {
        let bucket = time_to_bucket(&utc(t));
        assert!(previous <= bucket);
        assert!(bucket - previous <= 1);
        previous = bucket;
    }
}

#[test]
fn test_resolutions_scale_from_seconds() {
    for bucket in [-1_000_000, -1, 0, 1, SAMPLE_BUCKET, 150_000_000] {
        let seconds = bucket_to_unix_seconds(bucket);
        assert_eq!(bucket_to_unix_millis(bucket), seconds * 1_000);
        assert_eq!(bucket_to_unix_micros(bucket), seconds * 1_000_000);
        assert_eq!(bucket_to_unix_nanos(bucket), seconds * 1_000_000_000);

        for resolution in Resolution::ALL {
            let ts = bucket_to_unix(bucket, resolution);
            assert_eq!(ts, seconds * resolution.units_per_second());
            assert_eq!(unix_to_bucket(ts, resolution), bucket);
            assert_eq!(unix_to_bucket(ts - 1, resolution), bucket - 1);
        }
    }
}

#[test]
fn test_timezones_agree() {
    let instant = utc(SAMPLE_SECONDS + 30);
    for offset_hours in -12..=14 {
        let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        assert_eq!(time_to_bucket(&instant.with_timezone(&tz)), SAMPLE_BUCKET);
    }
    assert_eq!(
        time_to_bucket(&instant.with_timezone(&chrono::Local)),
        SAMPLE_BUCKET
    );
}

#[test]
fn test_window_bounds_contain_only_their_bucket() {
    for bucket in [-2, -1, 0, SAMPLE_BUCKET] {
        let start = bucket_start(bucket).unwrap();
        let end = bucket_end(bucket).unwrap();
        assert_eq!(time_to_bucket(&start), bucket);
        assert_eq!(time_to_bucket(&end), bucket);
        let next = end + chrono::Duration::nanoseconds(1);
        assert_eq!(time_to_bucket(&next), bucket + 1);
    }
}

#[test]
fn test_current_bucket_tracks_clock() {
    let first = current_bucket();
    let now = Utc::now();
    let second = current_bucket();

    let expected = time_to_bucket(&now);
    assert!(first <= expected && expected <= second);
    assert!(second - first <= 1);
    assert_eq!(
        time_to_bucket(&Utc.timestamp_opt(now.timestamp(), 0).single().unwrap()),
        expected
    );
}

#[test]
fn test_concurrent_callers_agree() {
    let instant = utc(SAMPLE_SECONDS);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || time_to_bucket(&instant)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), SAMPLE_BUCKET);
    }
}
