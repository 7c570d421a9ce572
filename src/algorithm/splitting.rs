//! Splitting edges at vertical grid lines so each piece stays inside one column

use std::collections::BTreeMap;

use crate::algorithm::edges::{Edge, Point};
use crate::math::interpolation::y_at_x;
use crate::math::rounding::{ceil_to_int, floor_to_int};

/// A tile-space edge piece ordered left to right
///
/// Ordering by x loses the edge's direction, so it is kept in `reversed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Endpoint with the smaller x (the start point for vertical edges)
    pub left: Point,
    /// Endpoint with the larger x
    pub right: Point,
    /// Whether the original edge ran right to left
    pub reversed: bool,
}

impl Segment {
    /// Order an edge's endpoints by x, remembering its direction
    pub const fn from_edge(edge: Edge) -> Self {
        if edge.start.x <= edge.end.x {
            Self {
                left: edge.start,
                right: edge.end,
                reversed: false,
            }
        } else {
            Self {
                left: edge.end,
                right: edge.start,
                reversed: true,
            }
        }
    }

    /// Reconstruct the directed edge this segment came from
    pub const fn edge(&self) -> Edge {
        if self.reversed {
            Edge::new(self.right, self.left)
        } else {
            Edge::new(self.left, self.right)
        }
    }

    /// Column whose interval contains this segment
    pub fn column(&self) -> i32 {
        floor_to_int(self.left.x)
    }

    /// Test whether both endpoints share an x coordinate
    // Vertical means exactly vertical; tile-space grid lines are exact
    #[allow(clippy::float_cmp)]
    pub const fn is_vertical(&self) -> bool {
        self.left.x == self.right.x
    }

    /// Test whether both endpoints share a y coordinate
    #[allow(clippy::float_cmp)]
    pub const fn is_horizontal(&self) -> bool {
        self.left.y == self.right.y
    }

    /// Both endpoints, left first
    pub const fn endpoints(&self) -> [Point; 2] {
        [self.left, self.right]
    }
}

/// Cut an edge at every vertical grid line it crosses
///
/// Pieces are returned in increasing-x order and each spans at most one
/// column. Edges already inside one column, including vertical edges, come
/// back as a single segment.
pub fn split_edge(edge: Edge) -> Vec<Segment> {
    let segment = Segment::from_edge(edge);
    let left_grid = floor_to_int(segment.left.x);
    let right_grid = ceil_to_int(segment.right.x);

    if i64::from(right_grid) - i64::from(left_grid) <= 1 {
        return vec![segment];
    }

    let Segment {
        left,
        right,
        reversed,
    } = segment;

    let crossings = (left_grid + 1..right_grid).filter_map(|grid_line| {
        let x = f64::from(grid_line);
        y_at_x(left.x, left.y, right.x, right.y, x).map(|y| Point::new(x, y))
    });

    let mut points = Vec::with_capacity((right_grid - left_grid) as usize + 1);
    points.push(left);
    points.extend(crossings);
    points.push(right);

    points
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(Segment {
                left: *from,
                right: *to,
                reversed,
            }),
            _ => None,
        })
        .collect()
}

/// Split every edge, keeping edge order and left-to-right order within edges
pub fn split_edges(edges: &[Edge]) -> Vec<Segment> {
    edges.iter().flat_map(|&edge| split_edge(edge)).collect()
}

/// Partition segments by the column their left endpoint falls in
pub fn group_by_column(segments: Vec<Segment>) -> BTreeMap<i32, Vec<Segment>> {
    let mut columns: BTreeMap<i32, Vec<Segment>> = BTreeMap::new();
    for segment in segments {
        columns.entry(segment.column()).or_default().push(segment);
    }
    columns
}
