//! Tests for half-open rectangles

#[cfg(test)]
mod tests {
    use rastermatrix::spatial::Rect;
    use rastermatrix::spatial::rect::to_coord;

    #[test]
    fn test_new_normalizes_corners() {
        let r = Rect::new(5, 7, 1, 2);
        assert_eq!(r.min, [1, 2]);
        assert_eq!(r.max, [5, 7]);
        assert_eq!((r.width(), r.height(), r.area()), (4, 5, 20));
    }

    // Tests half-open containment on every edge
    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(0, 0, 2, 2);
        assert!(r.contains(0, 0));
        assert!(r.contains(1, 1));
        assert!(!r.contains(2, 1));
        assert!(!r.contains(1, 2));
        assert!(!r.contains(-1, 0));
        assert!(!Rect::default().contains(0, 0));
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0, 0, 3, 0).is_empty());
        assert!(!Rect::from_size(1, 1).is_empty());
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, -1, 6, 3);
        assert_eq!(a.intersect(&b), Rect::new(2, 0, 4, 3));
        assert_eq!(b.intersect(&a), Rect::new(2, 0, 4, 3));

        // Disjoint rectangles collapse onto the receiver's corner
        let far = Rect::new(10, 10, 12, 12);
        let none = a.intersect(&far);
        assert!(none.is_empty());
        assert_eq!(none.min, [0, 0]);
        assert_eq!(none.max, [0, 0]);
    }

    #[test]
    fn test_to_origin_and_points() {
        let r = Rect::new(3, 5, 5, 7);
        assert_eq!(r.to_origin(), Rect::from_size(2, 2));
        let points: Vec<_> = r.points().collect();
        assert_eq!(points, vec![(3, 5), (4, 5), (3, 6), (4, 6)]);
        assert_eq!(Rect::default().points().count(), 0);
    }

    #[test]
    fn test_display_and_to_coord() {
        assert_eq!(Rect::new(-1, 2, 3, 4).to_string(), "(-1,2)-(3,4)");
        assert_eq!(to_coord(12), 12);
        assert_eq!(to_coord(usize::MAX), i32::MAX);
    }
}
