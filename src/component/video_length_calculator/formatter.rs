//! 總長度輸出格式

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// 以多種單位表示的總長度
#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    /// "X days, X hours, X minutes, X seconds"，各單位皆無條件捨去
    pub day_hr_min_sec: String,
}

impl DurationReport {
    #[must_use]
    pub fn from_seconds(total_seconds: f64) -> Self {
        let days = (total_seconds / SECONDS_PER_DAY).floor();
        let hours = ((total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR).floor();
        let minutes = ((total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor();
        let seconds = (total_seconds % SECONDS_PER_MINUTE).floor();

        Self {
            seconds: total_seconds,
            minutes: total_seconds / SECONDS_PER_MINUTE,
            hours: total_seconds / SECONDS_PER_HOUR,
            days: total_seconds / SECONDS_PER_DAY,
            day_hr_min_sec: format!(
                "{} days, {} hours, {} minutes, {} seconds",
                days as u64, hours as u64, minutes as u64, seconds as u64
            ),
        }
    }

    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("  * Seconds: {:.2}", self.seconds),
            format!("  * Day, Hour, Minute, Second: {}", self.day_hr_min_sec),
            format!("  * Minutes: {:.2}", self.minutes),
            format!("  * Hours: {:.2}", self.hours),
            format!("  * Days: {:.2}", self.days),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite_parts(report: &DurationReport) -> Vec<u64> {
        report
            .day_hr_min_sec
            .split(", ")
            .map(|part| part.split(' ').next().unwrap().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_zero() {
        let report = DurationReport::from_seconds(0.0);
        assert_eq!(report.day_hr_min_sec, "0 days, 0 hours, 0 minutes, 0 seconds");
        assert_eq!(report.minutes, 0.0);
        assert_eq!(report.days, 0.0);
    }

    #[test]
    fn test_one_minute() {
        let report = DurationReport::from_seconds(60.0);
        assert_eq!(report.day_hr_min_sec, "0 days, 0 hours, 1 minutes, 0 seconds");
        assert!((report.minutes - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mixed_units_floor() {
        // 1 天 1 小時 1 分 1.9 秒
        let report = DurationReport::from_seconds(90_061.9);
        assert_eq!(report.day_hr_min_sec, "1 days, 1 hours, 1 minutes, 1 seconds");
        assert!((report.hours - 25.017_194).abs() < 0.0001);
    }

    #[test]
    fn test_just_below_boundary_does_not_round_up() {
        let report = DurationReport::from_seconds(3599.999);
        assert_eq!(report.day_hr_min_sec, "0 days, 0 hours, 59 minutes, 59 seconds");
    }

    #[test]
    fn test_composite_reconstruction_within_one_second() {
        for total in [0.0, 0.5, 59.99, 61.0, 3661.25, 86_399.9, 86_400.0, 1_234_567.89] {
            let parts = composite_parts(&DurationReport::from_seconds(total));
            let rebuilt = (parts[0] * 86_400 + parts[1] * 3600 + parts[2] * 60 + parts[3]) as f64;
            assert!(rebuilt <= total && total < rebuilt + 1.0, "total {total}");
        }
    }

    #[test]
    fn test_report_lines() {
        let lines = DurationReport::from_seconds(9000.0).report_lines();
        assert_eq!(
            lines,
            vec![
                "  * Seconds: 9000.00",
                "  * Day, Hour, Minute, Second: 0 days, 2 hours, 30 minutes, 0 seconds",
                "  * Minutes: 150.00",
                "  * Hours: 2.50",
                "  * Days: 0.10",
            ]
        );
    }
}
