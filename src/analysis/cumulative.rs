/// Running-total transform for accumulating parameters.
///
/// Precipitation gauges report the amount that fell in each interval, but a
/// hydrograph shows how much has fallen since the record last broke. A
/// missing value breaks the record: the total restarts from zero after it.

use crate::model::Point;

/// Rounds to two decimal places, the precision precipitation is reported in.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Replaces each value with the sum of values since the last missing one.
///
/// Points without a value are copied unchanged and reset the total. Only
/// the output is rounded; the running sum keeps full precision.
pub fn accumulate(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .scan(0.0_f64, |total, point| {
            let transformed = match point.value {
                Some(value) => {
                    *total += value;
                    Point {
                        value: Some(round_hundredths(*total)),
                        ..point.clone()
                    }
                }
                None => {
                    *total = 0.0;
                    point.clone()
                }
            };
            Some(transformed)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn values(points: &[Point]) -> Vec<Option<f64>> {
        points.iter().map(|p| p.value).collect()
    }

    fn series(raw: &[Option<f64>]) -> Vec<Point> {
        raw.iter()
            .enumerate()
            .map(|(i, v)| Point::new(*v, i as i64 * 900_000, &["P"]))
            .collect()
    }

    #[test]
    fn test_running_total_resets_after_missing_value() {
        let out = accumulate(&series(&[Some(0.01), Some(0.02), None, Some(0.04)]));
        assert_eq!(values(&out), vec![Some(0.01), Some(0.03), None, Some(0.04)]);
    }

    #[test]
    fn test_value_after_reset_stands_alone() {
        let out = accumulate(&series(&[Some(1.5), Some(2.5), None, Some(0.25), Some(0.25)]));
        assert_eq!(out[3].value, Some(0.25), "total must restart after a gap");
        assert_eq!(out[4].value, Some(0.5));
    }

    #[test]
    fn test_rounding_does_not_drift_the_running_sum() {
        // Ten increments of 0.001 round to 0.00 individually but still add up.
        let out = accumulate(&series(&[Some(0.001); 10]));
        assert_eq!(out[0].value, Some(0.0));
        assert_eq!(out[9].value, Some(0.01));
    }

    #[test]
    fn test_timestamps_and_qualifiers_preserved() {
        let input = vec![
            Point::new(Some(0.1), 1_000, &["A"]),
            Point::new(None, 2_000, &["P", "Eqp"]),
        ];
        let out = accumulate(&input);
        assert_eq!(out.len(), input.len());
        assert_eq!(out[0].date_time, 1_000);
        assert_eq!(out[0].qualifiers, vec!["A".to_string()]);
        assert_eq!(out[1], input[1], "missing-value point is copied as-is");
    }

    #[test]
    fn test_leading_missing_value_is_harmless() {
        let out = accumulate(&series(&[None, Some(0.2), Some(0.3)]));
        assert_eq!(values(&out), vec![None, Some(0.2), Some(0.5)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(accumulate(&[]).is_empty());
    }
}
