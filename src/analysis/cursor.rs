/// Cursor lookup: which point a tooltip should describe.

use crate::model::Point;

/// Returns the point closest in time to `date_time`.
///
/// `points` must be sorted by `date_time`. Ties between an earlier and a
/// later point resolve to the earlier one.
pub fn nearest_point(points: &[Point], date_time: i64) -> Option<&Point> {
    let idx = points.partition_point(|p| p.date_time < date_time);
    let before = idx.checked_sub(1).and_then(|i| points.get(i));
    let after = points.get(idx);

    match (before, after) {
        (Some(b), Some(a)) => {
            if date_time - b.date_time <= a.date_time - date_time {
                Some(b)
            } else {
                Some(a)
            }
        }
        (b, a) => b.or(a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_at(times: &[i64]) -> Vec<Point> {
        times.iter().map(|t| Point::new(Some(*t as f64), *t, &["P"])).collect()
    }

    #[test]
    fn test_empty_series_has_no_nearest_point() {
        assert!(nearest_point(&[], 10).is_none());
    }

    #[test]
    fn test_exact_match() {
        let points = points_at(&[0, 100, 200]);
        assert_eq!(nearest_point(&points, 100).map(|p| p.date_time), Some(100));
    }

    #[test]
    fn test_picks_closer_neighbour() {
        let points = points_at(&[0, 100, 200]);
        assert_eq!(nearest_point(&points, 130).map(|p| p.date_time), Some(100));
        assert_eq!(nearest_point(&points, 170).map(|p| p.date_time), Some(200));
    }

    #[test]
    fn test_tie_goes_to_earlier_point() {
        let points = points_at(&[0, 100]);
        assert_eq!(nearest_point(&points, 50).map(|p| p.date_time), Some(0));
    }

    #[test]
    fn test_cursor_outside_range_clamps_to_ends() {
        let points = points_at(&[100, 200]);
        assert_eq!(nearest_point(&points, -5).map(|p| p.date_time), Some(100));
        assert_eq!(nearest_point(&points, 999).map(|p| p.date_time), Some(200));
    }
}
