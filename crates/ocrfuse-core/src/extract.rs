//! Conversion of raw detector output into unit-square detection boxes.

use crate::error::{AlignError, Result};
use crate::geometry::Rect;
use crate::types::{DetectionBox, RawDetection};

/// Convert raw polygon detections into axis-aligned boxes normalized to the
/// unit square.
///
/// `width` and `height` are the pixel dimensions of the source image.
/// Degenerate detections are dropped without error: polygons with fewer
/// than three points, rects with zero area, and text that is empty after
/// trimming. The order of surviving boxes is preserved. Coordinates are
/// not clamped, so a detection hanging off the page stays off the page.
///
/// # Errors
///
/// Returns [`AlignError::InvalidDimensions`] when `width` or `height` is
/// zero, and [`AlignError::NonFiniteCoordinate`] when a polygon contains a
/// NaN or infinite coordinate.
pub fn extract_boxes(
    detections: &[RawDetection],
    width: u32,
    height: u32,
) -> Result<Vec<DetectionBox>> {
    if width == 0 || height == 0 {
        return Err(AlignError::InvalidDimensions(width, height));
    }
    let w = f64::from(width);
    let h = f64::from(height);

    let mut boxes = Vec::with_capacity(detections.len());
    for (index, detection) in detections.iter().enumerate() {
        if detection.polygon.iter().any(|p| !p.is_finite()) {
            return Err(AlignError::NonFiniteCoordinate(index));
        }
        if detection.polygon.len() < 3 {
            log::debug!(
                "Dropping detection {index}: degenerate polygon with {} point(s)",
                detection.polygon.len()
            );
            continue;
        }

        let first = detection.polygon[0];
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for point in &detection.polygon[1..] {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        let rect = Rect::new(min_x / w, min_y / h, max_x / w, max_y / h);
        if rect.area() == 0.0 {
            log::debug!("Dropping detection {index}: zero-area rect");
            continue;
        }
        if detection.text.trim().is_empty() {
            log::debug!("Dropping detection {index}: empty text");
            continue;
        }
        boxes.push(DetectionBox::new(rect, detection.text.clone()));
    }
    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn quad(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn test_normalizes_to_unit_square() {
        let detections = vec![RawDetection::new(quad(100.0, 50.0, 300.0, 150.0), "Title")];
        let boxes = extract_boxes(&detections, 1000, 500).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].rect, Rect::new(0.1, 0.1, 0.3, 0.3));
        assert_eq!(boxes[0].text, "Title");
    }

    #[test]
    fn test_rect_from_rotated_polygon() {
        // Min/max over the corners, not the corner order
        let polygon = vec![
            Point::new(300.0, 50.0),
            Point::new(100.0, 150.0),
            Point::new(200.0, 100.0),
        ];
        let boxes = extract_boxes(&[RawDetection::new(polygon, "skewed")], 1000, 500).unwrap();
        assert_eq!(boxes[0].rect, Rect::new(0.1, 0.1, 0.3, 0.3));
    }

    #[test]
    fn test_zero_dimensions_error() {
        let detections = vec![RawDetection::new(quad(0.0, 0.0, 10.0, 10.0), "x")];
        match extract_boxes(&detections, 0, 500) {
            Err(AlignError::InvalidDimensions(0, 500)) => {}
            other => panic!("Expected InvalidDimensions, got {other:?}"),
        }
        assert!(extract_boxes(&detections, 500, 0).is_err());
    }

    #[test]
    fn test_non_finite_coordinate_error() {
        let detections = vec![
            RawDetection::new(quad(0.0, 0.0, 10.0, 10.0), "ok"),
            RawDetection::new(
                vec![
                    Point::new(f64::NAN, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(10.0, 10.0),
                ],
                "bad",
            ),
        ];
        match extract_boxes(&detections, 100, 100) {
            Err(AlignError::NonFiniteCoordinate(1)) => {}
            other => panic!("Expected NonFiniteCoordinate(1), got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_polygon_dropped() {
        let detections = vec![
            RawDetection::new(vec![], "no points"),
            RawDetection::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)], "two"),
            RawDetection::new(quad(0.0, 0.0, 10.0, 10.0), "kept"),
        ];
        let boxes = extract_boxes(&detections, 100, 100).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].text, "kept");
    }

    #[test]
    fn test_zero_area_dropped() {
        // All points on one vertical line
        let polygon = vec![
            Point::new(50.0, 10.0),
            Point::new(50.0, 20.0),
            Point::new(50.0, 30.0),
        ];
        let boxes = extract_boxes(&[RawDetection::new(polygon, "line")], 100, 100).unwrap();
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_blank_text_dropped() {
        let detections = vec![
            RawDetection::new(quad(0.0, 0.0, 10.0, 10.0), "  \t "),
            RawDetection::new(quad(0.0, 20.0, 10.0, 30.0), ""),
        ];
        let boxes = extract_boxes(&detections, 100, 100).unwrap();
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let detections = vec![
            RawDetection::new(quad(0.0, 0.0, 10.0, 10.0), "first"),
            RawDetection::new(quad(0.0, 0.0, 0.0, 10.0), "dropped"),
            RawDetection::new(quad(0.0, 20.0, 10.0, 30.0), "second"),
            RawDetection::new(quad(0.0, 40.0, 10.0, 50.0), "third"),
        ];
        let boxes = extract_boxes(&detections, 100, 100).unwrap();
        let texts: Vec<&str> = boxes.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_out_of_frame_not_clamped() {
        let detections = vec![RawDetection::new(quad(50.0, 50.0, 150.0, 120.0), "edge")];
        let boxes = extract_boxes(&detections, 100, 100).unwrap();
        assert_eq!(boxes[0].rect, Rect::new(0.5, 0.5, 1.5, 1.2));
    }
}
