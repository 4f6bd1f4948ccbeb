use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Synthesizes the render timeline: `total_steps` timestamps starting at
/// `start`, spaced `step_time` seconds apart. Fractional step times are
/// rounded to whole milliseconds.
pub fn generate(start: DateTime<Utc>, total_steps: u64, step_time: f64) -> Vec<DateTime<Utc>> {
    (0..total_steps)
        .map(|step| {
            let offset_ms = (step as f64 * step_time * 1000.0).round() as i64;
            start + TimeDelta::milliseconds(offset_ms)
        })
        .collect()
}

/// ISO-8601 rendering with microsecond precision and an explicit UTC offset,
/// as consumed by `Cesium.JulianDate.fromIso8601`.
pub fn iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timeline_length_and_spacing() {
        let start = Utc::now();
        let series = generate(start, 6, 3600.0);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0], start);
        for pair in series.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::seconds(3600));
        }
    }

    #[test]
    fn fractional_step_times_round_to_milliseconds() {
        let start = Utc::now();
        let series = generate(start, 3, 0.5);
        assert_eq!(series[1] - series[0], TimeDelta::milliseconds(500));
        assert_eq!(series[2] - series[0], TimeDelta::seconds(1));
    }

    #[test]
    fn iso8601_keeps_explicit_utc_offset() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(iso8601(&timestamp), "2024-05-01T12:00:00.000000+00:00");
    }
}
