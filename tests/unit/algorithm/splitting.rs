//! Tests for splitting edges at vertical grid lines

#[cfg(test)]
mod tests {
    use tilecover::Point;
    use tilecover::algorithm::edges::Edge;
    use tilecover::algorithm::splitting::{Segment, group_by_column, split_edge, split_edges};

    fn edge(x0: f64, y0: f64, x1: f64, y1: f64) -> Edge {
        Edge::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    // Tests left-to-right edges keep their direction
    // Verified by always flagging segments reversed
    #[test]
    fn test_from_edge_orders_by_x() {
        let forward = Segment::from_edge(edge(1.0, 2.0, 3.0, 4.0));
        assert!(!forward.reversed);
        assert_eq!(forward.left, Point::new(1.0, 2.0));

        let backward = Segment::from_edge(edge(3.0, 4.0, 1.0, 2.0));
        assert!(backward.reversed);
        assert_eq!(backward.left, Point::new(1.0, 2.0));
        assert_eq!(backward.right, Point::new(3.0, 4.0));
        assert_eq!(backward.edge(), edge(3.0, 4.0, 1.0, 2.0));
    }

    // Tests an edge crossing three grid lines yields four chained pieces
    // Verified by omitting the last interior crossing
    #[test]
    fn test_split_across_columns() {
        let pieces = split_edge(edge(0.5, 0.0, 3.5, 3.0));

        assert_eq!(pieces.len(), 4);
        let columns = pieces.iter().map(Segment::column).collect::<Vec<_>>();
        assert_eq!(columns, vec![0, 1, 2, 3]);

        assert_eq!(pieces[0].left, Point::new(0.5, 0.0));
        assert_eq!(pieces[0].right, Point::new(1.0, 0.5));
        assert_eq!(pieces[1].left, Point::new(1.0, 0.5));
        assert_eq!(pieces[2].right, Point::new(3.0, 2.5));
        assert_eq!(pieces[3].right, Point::new(3.5, 3.0));

        for pair in pieces.windows(2) {
            if let [a, b] = pair {
                assert_eq!(a.right, b.left);
            }
        }
    }

    // Tests reversed edges split in increasing x and keep the direction flag
    // Verified by emitting pieces in original edge order
    #[test]
    fn test_split_reversed_edge() {
        let pieces = split_edge(edge(4.0, 6.0, 2.0, 6.0));

        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|piece| piece.reversed));
        assert_eq!(pieces[0].left, Point::new(2.0, 6.0));
        assert_eq!(pieces[0].right, Point::new(3.0, 6.0));
        assert_eq!(pieces[1].right, Point::new(4.0, 6.0));
    }

    // Tests edges already inside one column pass through unchanged
    // Verified by splitting whenever endpoints differ in x
    #[test]
    fn test_single_column_edges_unchanged() {
        assert_eq!(split_edge(edge(0.2, 0.0, 0.8, 5.0)).len(), 1);
        assert_eq!(split_edge(edge(2.0, 1.0, 3.0, 4.0)).len(), 1);
        assert_eq!(split_edge(edge(2.5, 1.0, 3.0, 4.0)).len(), 1);
    }

    // Tests vertical edges on a grid line are preserved, not split
    // Verified by splitting vertical edges at their own x
    #[test]
    fn test_vertical_on_grid_line_preserved() {
        let pieces = split_edge(edge(3.0, 5.0, 3.0, 1.0));

        assert_eq!(pieces.len(), 1);
        assert!(pieces[0].is_vertical());
        assert_eq!(pieces[0].column(), 3);
        assert_eq!(pieces[0].edge(), edge(3.0, 5.0, 3.0, 1.0));
    }

    // Tests every piece spans at most one column interval
    // Verified by using ceil for the column index
    #[test]
    fn test_pieces_fit_their_column() {
        let edges = [
            edge(-2.3, 1.0, 4.7, 9.1),
            edge(6.0, 0.0, 0.25, 3.0),
            edge(1.5, 1.5, 1.5, 8.0),
        ];
        for piece in split_edges(&edges) {
            let column = f64::from(piece.column());
            assert!(piece.left.x >= column);
            assert!(piece.right.x <= column + 1.0);
        }
    }

    // Tests grouping uses the left endpoint's column
    // Verified by grouping on the right endpoint
    #[test]
    fn test_group_by_column() {
        let segments = split_edges(&[edge(0.5, 0.0, 2.0, 0.0), edge(1.0, 3.0, 1.0, 0.0)]);
        let groups = group_by_column(segments);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(groups.get(&0).map(Vec::len), Some(1));
        assert_eq!(groups.get(&1).map(Vec::len), Some(2));
    }

    // Tests a right-to-left edge starting on a grid line groups by its left endpoint
    // Verified by grouping on the directed edge's start point
    #[test]
    fn test_group_reversed_edge_by_left_endpoint() {
        let segments = split_edges(&[edge(3.0, 1.0, 2.5, 4.0)]);
        assert_eq!(segments.len(), 1);

        let groups = group_by_column(segments);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![2]);
        let grouped = groups.get(&2).and_then(|group| group.first()).copied();
        assert_eq!(grouped.map(|segment| segment.reversed), Some(true));
        assert_eq!(
            grouped.map(|segment| segment.edge().start),
            Some(Point::new(3.0, 1.0))
        );
    }
}
