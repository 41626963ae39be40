use log::debug;

use crate::types::{LabelMode, Point, ProjectedPoint};

/// Maps a projected point to its on-screen pixel position.
pub trait ScreenTransform {
    fn to_screen(&self, point: &ProjectedPoint) -> Point;
}

impl<F> ScreenTransform for F
where
    F: Fn(&ProjectedPoint) -> Point,
{
    fn to_screen(&self, point: &ProjectedPoint) -> Point {
        self(point)
    }
}

// Stable, so equal magnitudes keep their input order.
fn brightest_first(points: &[ProjectedPoint]) -> Vec<&ProjectedPoint> {
    let mut sorted: Vec<&ProjectedPoint> = points.iter().collect();
    sorted.sort_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));
    sorted
}

/// Choose which points get a label.
///
/// - `All` keeps every point in input order.
/// - `Top` keeps the `max_labels` brightest.
/// - `Smart` walks points brightest first and keeps one only when its screen
///   position is farther than `cluster_px` from every point already kept, so
///   the brightest member of a cluster wins.
pub fn select_labels<'p, T>(
    transform: &T,
    points: &'p [ProjectedPoint],
    mode: LabelMode,
    max_labels: usize,
    cluster_px: f64,
) -> Vec<&'p ProjectedPoint>
where
    T: ScreenTransform + ?Sized,
{
    let selected: Vec<&ProjectedPoint> = match mode {
        LabelMode::All => points.iter().collect(),
        LabelMode::Top => brightest_first(points)
            .into_iter()
            .take(max_labels)
            .collect(),
        LabelMode::Smart => {
            let mut kept: Vec<(&ProjectedPoint, Point)> = Vec::new();
            for p in brightest_first(points) {
                if kept.len() >= max_labels {
                    break;
                }
                let s = transform.to_screen(p);
                if kept.iter().all(|(_, q)| s.distance(*q) > cluster_px) {
                    kept.push((p, s));
                }
            }
            kept.into_iter().map(|(p, _)| p).collect()
        }
    };
    debug!(
        "label selection {:?}: {} of {} points",
        mode,
        selected.len(),
        points.len()
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_screen, polar_point};

    fn names(sel: &[&ProjectedPoint]) -> Vec<String> {
        sel.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn clustered_pair_keeps_only_the_brighter() {
        let points = vec![
            polar_point("Venus", 0.5, 40.0, -4.0),
            polar_point("Mars", 0.51, 40.1, 1.0),
        ];
        let selected = select_labels(&mock_screen, &points, LabelMode::Smart, 5, 50.0);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name(), "Venus");

        // Input order does not matter, brightness does
        let reversed = vec![points[1].clone(), points[0].clone()];
        let selected = select_labels(&mock_screen, &reversed, LabelMode::Smart, 5, 50.0);
        assert_eq!(names(&selected), vec!["Venus"]);
    }

    #[test]
    fn smart_keeps_separated_points_brightest_first() {
        let points = vec![
            polar_point("Mars", 0.5, 40.0, 0.5),
            polar_point("Jupiter", 2.0, 60.0, -2.7),
            polar_point("Saturn", 4.0, 20.0, 0.8),
        ];
        let selected = select_labels(&mock_screen, &points, LabelMode::Smart, 5, 22.0);
        assert_eq!(names(&selected), vec!["Jupiter", "Mars", "Saturn"]);

        let capped = select_labels(&mock_screen, &points, LabelMode::Smart, 2, 22.0);
        assert_eq!(names(&capped), vec!["Jupiter", "Mars"]);
    }

    #[test]
    fn smart_threshold_is_strict() {
        // Exactly cluster_px apart is still a cluster
        let points = vec![
            polar_point("A", 0.0, 0.0, 0.0),
            polar_point("B", 0.25, 0.0, 1.0),
        ];
        let selected = select_labels(&mock_screen, &points, LabelMode::Smart, 5, 25.0);
        assert_eq!(names(&selected), vec!["A"]);
        let selected = select_labels(&mock_screen, &points, LabelMode::Smart, 5, 24.0);
        assert_eq!(names(&selected), vec!["A", "B"]);
    }

    #[test]
    fn all_returns_everything_in_input_order() {
        let points = vec![
            polar_point("Mars", 0.5, 40.0, 1.0),
            polar_point("Venus", 0.5, 40.0, -4.0),
        ];
        let selected = select_labels(&mock_screen, &points, LabelMode::All, 0, 50.0);
        assert_eq!(names(&selected), vec!["Mars", "Venus"]);
    }

    #[test]
    fn top_sorts_by_magnitude_and_truncates() {
        let points = vec![
            polar_point("Saturn", 0.1, 10.0, 0.8),
            polar_point("Moon", 0.1, 10.0, -12.0),
            polar_point("Mars", 0.1, 10.0, 0.5),
            polar_point("Mercury", 0.1, 10.0, 0.5),
        ];
        let selected = select_labels(&mock_screen, &points, LabelMode::Top, 3, 50.0);
        // Ties keep input order
        assert_eq!(names(&selected), vec!["Moon", "Mars", "Mercury"]);
    }

    #[test]
    fn zero_max_labels_selects_nothing_for_top_and_smart() {
        let points = vec![polar_point("Sun", 0.1, 10.0, -26.7)];
        assert!(select_labels(&mock_screen, &points, LabelMode::Top, 0, 50.0).is_empty());
        assert!(select_labels(&mock_screen, &points, LabelMode::Smart, 0, 50.0).is_empty());
        assert_eq!(
            select_labels(&mock_screen, &points, LabelMode::All, 0, 50.0).len(),
            1
        );
    }

    #[test]
    fn empty_input_gives_empty_output_for_every_mode() {
        for mode in [LabelMode::All, LabelMode::Top, LabelMode::Smart] {
            assert!(select_labels(&mock_screen, &[], mode, 5, 22.0).is_empty());
        }
    }
}
