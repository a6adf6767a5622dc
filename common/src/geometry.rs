//! Minute segment geometry.
//!
//! Two canonical polygons tile the screen border: a straight one for the edges
//! (even segments) and a diagonal one for the corners (odd segments). Each
//! segment places its polygon by rotating it about the origin by
//! `(segment / 2) * 90` degrees and then moving it to a hand-tuned anchor.
//!
//! | Segment | Shape    | Rotation | Anchor      |
//! |---------|----------|----------|-------------|
//! | 0       | straight | 0        | origin      |
//! | 1       | diagonal | 0        | origin      |
//! | 2       | straight | 90       | (144, 12)   |
//! | 3       | diagonal | 90       | (144, 24)   |
//! | 4       | straight | 180      | (144, 168)  |
//! | 5       | diagonal | 180      | (142, 168)  |
//! | 6       | straight | 270      | (-1, 156)   |
//! | 7       | diagonal | 270      | (-1, 143)   |
//!
//! The anchors were fitted by eye to the 144x168 panel. They have no formula
//! and must stay literal.
//!
//! Rotation follows the screen convention (y grows downwards), so positive
//! angles turn clockwise. Only quarter turns are needed, which keeps the
//! transform exact in integer arithmetic.

use embedded_graphics::prelude::Point;

use crate::segment::{SEGMENT_COUNT, Segment};

// =============================================================================
// Canonical Shapes
// =============================================================================

/// Trapezoid along the top edge.
pub const STRAIGHT_PATH_POINTS: [Point; 4] = [
    Point::new(30, 0),
    Point::new(114, 0),
    Point::new(104, 30),
    Point::new(40, 30),
];

/// Pentagon filling the top-right corner.
pub const DIAGONAL_PATH_POINTS: [Point; 5] = [
    Point::new(114, 0),
    Point::new(144, 0),
    Point::new(144, 42),
    Point::new(114, 52),
    Point::new(104, 30),
];

/// Which canonical polygon a segment uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// Edge segment.
    Straight,
    /// Corner segment.
    Diagonal,
}

impl Shape {
    /// Untransformed points of the shape.
    pub const fn points(self) -> &'static [Point] {
        match self {
            Self::Straight => &STRAIGHT_PATH_POINTS,
            Self::Diagonal => &DIAGONAL_PATH_POINTS,
        }
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Clockwise rotation about the origin in quarter turns.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation by `turns` quarter turns (taken modulo 4).
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Rotate a point about the origin.
    pub const fn apply(
        self,
        p: Point,
    ) -> Point {
        match self {
            Self::Deg0 => p,
            Self::Deg90 => Point::new(-p.y, p.x),
            Self::Deg180 => Point::new(-p.x, -p.y),
            Self::Deg270 => Point::new(p.y, -p.x),
        }
    }
}

// =============================================================================
// Per-Segment Placement
// =============================================================================

/// Anchor each segment's rotated shape is moved to. `None` keeps it at the origin.
pub const SEGMENT_ANCHORS: [Option<Point>; SEGMENT_COUNT] = [
    None,
    None,
    Some(Point::new(144, 12)),
    Some(Point::new(144, 24)),
    Some(Point::new(144, 168)),
    Some(Point::new(142, 168)),
    Some(Point::new(-1, 156)),
    Some(Point::new(-1, 143)),
];

/// Shape drawn for a segment: straight on even, diagonal on odd.
pub const fn shape_for(segment: Segment) -> Shape {
    if segment.is_straight() { Shape::Straight } else { Shape::Diagonal }
}

/// Rotation applied to a segment's shape.
pub const fn rotation_for(segment: Segment) -> Rotation { Rotation::from_quarter_turns(segment.index() / 2) }

/// Anchor a segment's shape is translated to after rotation.
pub const fn anchor_for(segment: Segment) -> Option<Point> { SEGMENT_ANCHORS[segment.index() as usize] }

// =============================================================================
// Transformed Paths
// =============================================================================

/// A canonical shape with a mutable rotation and offset.
///
/// Points are produced rotated first and translated second.
#[derive(Clone, Debug)]
pub struct MinutePath {
    shape: Shape,
    rotation: Rotation,
    offset: Point,
}

impl MinutePath {
    /// Untransformed path for `shape`.
    pub const fn new(shape: Shape) -> Self {
        Self {
            shape,
            rotation: Rotation::Deg0,
            offset: Point::zero(),
        }
    }

    /// Set the translation applied after rotation.
    #[inline]
    pub fn move_to(
        &mut self,
        offset: Point,
    ) {
        self.offset = offset;
    }

    /// Set the rotation about the origin.
    #[inline]
    pub fn rotate_to(
        &mut self,
        rotation: Rotation,
    ) {
        self.rotation = rotation;
    }

    /// Transformed points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.shape.points().iter().map(move |&p| self.rotation.apply(p) + self.offset)
    }
}

/// The two paths owned by the minute layer.
#[derive(Clone, Debug)]
pub struct MinutePaths {
    straight: MinutePath,
    diagonal: MinutePath,
}

impl MinutePaths {
    pub const fn new() -> Self {
        Self {
            straight: MinutePath::new(Shape::Straight),
            diagonal: MinutePath::new(Shape::Diagonal),
        }
    }

    /// Pick the path for `segment` and set its rotation and position.
    pub fn place(
        &mut self,
        segment: Segment,
    ) -> &MinutePath {
        let path = match shape_for(segment) {
            Shape::Straight => &mut self.straight,
            Shape::Diagonal => &mut self.diagonal,
        };

        path.move_to(Point::zero());
        path.rotate_to(rotation_for(segment));
        if let Some(anchor) = anchor_for(segment) {
            path.move_to(anchor);
        }
        path
    }
}

impl Default for MinutePaths {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment_for_minute;

    fn seg(index: u8) -> Segment { Segment::new(index).unwrap() }

    fn cross(
        o: Point,
        a: Point,
        b: Point,
    ) -> i32 {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    }

    fn is_convex(points: &[Point]) -> bool {
        let n = points.len();
        let signs: Vec<i32> = (0..n)
            .map(|i| cross(points[i], points[(i + 1) % n], points[(i + 2) % n]).signum())
            .collect();
        signs.iter().all(|&s| s >= 0) || signs.iter().all(|&s| s <= 0)
    }

    #[test]
    fn test_shape_alternates_with_parity() {
        for s in Segment::ALL {
            let expected = if s.index() % 2 == 0 { Shape::Straight } else { Shape::Diagonal };
            assert_eq!(shape_for(s), expected);
        }
    }

    #[test]
    fn test_rotation_pairs() {
        let expected = [
            Rotation::Deg0,
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg180,
            Rotation::Deg270,
            Rotation::Deg270,
        ];
        for s in Segment::ALL {
            assert_eq!(rotation_for(s), expected[s.index() as usize]);
        }
        assert_eq!(rotation_for(seg(0)), rotation_for(seg(1)));
        assert_eq!(rotation_for(seg(6)), Rotation::Deg270);
    }

    #[test]
    fn test_anchor_table() {
        assert_eq!(anchor_for(seg(0)), None);
        assert_eq!(anchor_for(seg(1)), None);
        assert_eq!(anchor_for(seg(2)), Some(Point::new(144, 12)));
        assert_eq!(anchor_for(seg(3)), Some(Point::new(144, 24)));
        assert_eq!(anchor_for(seg(4)), Some(Point::new(144, 168)));
        assert_eq!(anchor_for(seg(5)), Some(Point::new(142, 168)));
        assert_eq!(anchor_for(seg(6)), Some(Point::new(-1, 156)));
        assert_eq!(anchor_for(seg(7)), Some(Point::new(-1, 143)));
    }

    #[test]
    fn test_quarter_turn_is_clockwise_on_screen() {
        // A point right of the origin ends up below it
        assert_eq!(Rotation::Deg90.apply(Point::new(10, 0)), Point::new(0, 10));
        assert_eq!(Rotation::Deg180.apply(Point::new(10, 3)), Point::new(-10, -3));
        assert_eq!(Rotation::Deg270.apply(Point::new(10, 0)), Point::new(0, -10));
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::Deg90);
    }

    #[test]
    fn test_canonical_shapes_are_convex() {
        assert!(is_convex(&STRAIGHT_PATH_POINTS));
        assert!(is_convex(&DIAGONAL_PATH_POINTS));
    }

    #[test]
    fn test_minute_22_places_diagonal_in_bottom_right() {
        let segment = segment_for_minute(22);
        let mut paths = MinutePaths::new();
        let path = paths.place(segment);

        assert_eq!(path.shape, Shape::Diagonal);
        assert_eq!(path.rotation, Rotation::Deg90);
        assert_eq!(path.offset, Point::new(144, 24));

        let points: Vec<Point> = path.points().collect();
        assert_eq!(
            points,
            [
                Point::new(144, 138),
                Point::new(144, 168),
                Point::new(102, 168),
                Point::new(92, 138),
                Point::new(114, 128),
            ]
        );
    }

    #[test]
    fn test_minute_0_is_untransformed_straight() {
        let mut paths = MinutePaths::new();
        let path = paths.place(segment_for_minute(0));

        assert_eq!(path.shape, Shape::Straight);
        assert_eq!(path.rotation, Rotation::Deg0);
        assert_eq!(path.offset, Point::zero());
        assert!(path.points().eq(STRAIGHT_PATH_POINTS.iter().copied()));
    }

    #[test]
    fn test_placement_resets_previous_transform() {
        let mut paths = MinutePaths::new();
        paths.place(seg(4));
        let path = paths.place(seg(0));
        assert_eq!(path.offset, Point::zero());
        assert_eq!(path.rotation, Rotation::Deg0);
    }

    #[test]
    fn test_all_segments_hug_the_screen() {
        let mut paths = MinutePaths::new();
        for s in Segment::ALL {
            let points: Vec<Point> = paths.place(s).points().collect();
            for p in &points {
                assert!((-2..=144).contains(&p.x), "segment {} x {}", s.index(), p.x);
                assert!((-1..=168).contains(&p.y), "segment {} y {}", s.index(), p.y);
            }
            assert!(is_convex(&points), "segment {} lost convexity", s.index());
        }
    }
}
