use geo::Point;
use overgrid::{Bounds, Config, MatchPolicy, RegionTree, Role, Session};

fn canvas() -> Bounds {
    Bounds::new(0.0, 0.0, 600.0, 400.0).unwrap()
}

fn default_tree() -> RegionTree {
    RegionTree::new(canvas(), 1, 8).unwrap()
}

/// A deterministic scatter of points covering all four quadrants.
fn scatter() -> Vec<Point<f64>> {
    let mut points = Vec::new();
    for i in 0..60 {
        let x = (i as f64 * 37.0) % 600.0;
        let y = (i as f64 * 23.0) % 400.0;
        points.push(Point::new(x, y));
    }
    points
}

#[test]
fn containment_invariant_holds_for_accepted_points() {
    let mut tree = default_tree();
    let bounds = canvas();

    let mut inserted = Vec::new();
    for point in scatter().into_iter().chain([
        Point::new(-5.0, 10.0),
        Point::new(650.0, 10.0),
        Point::new(10.0, 450.0),
    ]) {
        if tree.insert(point) {
            inserted.push(point);
        }
    }

    let stored = tree.query_range(&bounds);
    assert_eq!(stored.len(), inserted.len());
    for point in stored {
        assert!(bounds.contains(&point), "stored point escaped root bounds");
    }
}

#[test]
fn partition_invariant_leaves_tile_the_canvas() {
    let mut tree = default_tree();
    for point in scatter() {
        tree.insert(point);
    }

    let outlines = tree.outline();
    assert!(outlines.len() > 1, "scatter should force subdivision");

    // No gaps and no overlaps beyond shared edges: the leaf areas sum to the
    // canvas area, and every leaf center lies strictly inside exactly one leaf.
    let total_area: f64 = outlines
        .iter()
        .map(|leaf| leaf.bounds.width() * leaf.bounds.height())
        .sum();
    assert!((total_area - 600.0 * 400.0).abs() < 1e-6);

    for leaf in &outlines {
        assert!(canvas().contains(&leaf.center));
        let holders = outlines
            .iter()
            .filter(|other| {
                leaf.center.x() > other.bounds.min_x()
                    && leaf.center.x() < other.bounds.max_x()
                    && leaf.center.y() > other.bounds.min_y()
                    && leaf.center.y() < other.bounds.max_y()
            })
            .count();
        assert_eq!(holders, 1, "leaf center must lie strictly inside its own leaf only");
    }
}

#[test]
fn range_query_matches_brute_force() {
    let points = scatter();
    let mut tree = default_tree();
    for point in &points {
        tree.insert(*point);
    }

    let ranges = [
        Bounds::new(0.0, 0.0, 600.0, 400.0).unwrap(),
        Bounds::new(0.0, 0.0, 10.0, 10.0).unwrap(),
        Bounds::new(150.0, 100.0, 450.0, 300.0).unwrap(),
        Bounds::new(590.0, 390.0, 600.0, 400.0).unwrap(),
        Bounds::at_point(&points[7]).unwrap(),
    ];

    for range in ranges {
        let mut expected: Vec<Point<f64>> = points
            .iter()
            .copied()
            .filter(|p| range.contains(p))
            .collect();
        let mut actual = tree.query_range(&range);

        let key = |p: &Point<f64>| (p.x().to_bits(), p.y().to_bits());
        expected.sort_by_key(key);
        actual.sort_by_key(key);
        assert_eq!(actual, expected);
    }
}

#[test]
fn order_independence_of_query_results() {
    let points = scatter();
    let mut reversed = points.clone();
    reversed.reverse();

    let mut forward_tree = default_tree();
    let mut reverse_tree = default_tree();
    for point in &points {
        forward_tree.insert(*point);
    }
    for point in &reversed {
        reverse_tree.insert(*point);
    }

    let key = |p: &Point<f64>| (p.x().to_bits(), p.y().to_bits());
    for range in [
        canvas(),
        Bounds::new(100.0, 50.0, 400.0, 350.0).unwrap(),
        Bounds::new(0.0, 0.0, 50.0, 50.0).unwrap(),
    ] {
        let mut a = forward_tree.query_range(&range);
        let mut b = reverse_tree.query_range(&range);
        a.sort_by_key(key);
        b.sort_by_key(key);
        assert_eq!(a, b, "structure may differ but results must not");
    }
}

#[test]
fn overlap_correctness_is_set_intersection() {
    let pa: Vec<Point<f64>> = (0..20).map(|i| Point::new(i as f64 * 10.0, 50.0)).collect();
    let pb: Vec<Point<f64>> = (10..30).map(|i| Point::new(i as f64 * 10.0, 50.0)).collect();

    let mut a = default_tree();
    let mut b = default_tree();
    for p in &pa {
        a.insert(*p);
    }
    // Insert b's points in reverse to show insertion order is irrelevant.
    for p in pb.iter().rev() {
        b.insert(*p);
    }

    let mut common = a.common_points(&b, MatchPolicy::Exact);
    let mut expected: Vec<Point<f64>> = pa.iter().copied().filter(|p| pb.contains(p)).collect();

    let key = |p: &Point<f64>| (p.x().to_bits(), p.y().to_bits());
    common.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(common, expected);
    assert_eq!(common.len(), 10);
}

#[test]
fn scenario_duplicate_inserts_both_stored() {
    // Root bounds (0,0)-(600,400), capacity 1, depth 8.
    let mut tree = default_tree();
    assert!(tree.insert(Point::new(10.0, 10.0)));
    assert!(
        tree.insert(Point::new(10.0, 10.0)),
        "capacity logic must not reject duplicates"
    );
    assert_eq!(tree.query_range(&canvas()).len(), 2);
}

#[test]
fn scenario_far_points_land_in_separate_leaves() {
    let mut tree = default_tree();
    tree.insert(Point::new(5.0, 5.0));
    tree.insert(Point::new(595.0, 395.0));

    assert!(tree.is_subdivided());
    let hits = tree.query_range(&Bounds::new(0.0, 0.0, 10.0, 10.0).unwrap());
    assert_eq!(hits, vec![Point::new(5.0, 5.0)]);
}

#[test]
fn scenario_common_points_exact_result() {
    let mut a = default_tree();
    let mut b = default_tree();
    a.insert(Point::new(100.0, 100.0));
    b.insert(Point::new(100.0, 100.0));
    b.insert(Point::new(200.0, 200.0));

    assert_eq!(
        a.common_points(&b, MatchPolicy::Exact),
        vec![Point::new(100.0, 100.0)]
    );
}

#[test]
fn scenario_corner_point_inclusive() {
    let mut tree = default_tree();
    assert!(tree.insert(Point::new(600.0, 400.0)));
    assert!(!tree.insert(Point::new(601.0, 400.0)));
}

#[test]
fn session_end_to_end() {
    let config = Config::default().with_canvas_size(600.0, 400.0);
    let mut session = Session::new(config).unwrap();

    // Admin draws a square-ish boundary, densified every 5px along the top.
    let mut admin_points: Vec<Point<f64>> =
        (0..=20).map(|i| Point::new(100.0 + i as f64 * 5.0, 100.0)).collect();
    admin_points.push(Point::new(150.0, 180.0));
    session.finalize_polygon(admin_points, [255, 0, 0]).unwrap();

    // User draws a boundary crossing the admin one through shared pixels.
    session.set_active_role(Role::User);
    let user_points = vec![
        Point::new(150.0, 100.0),
        Point::new(155.0, 100.0),
        Point::new(300.0, 300.0),
    ];
    session.finalize_polygon(user_points, [0, 0, 255]).unwrap();

    let overlap = session.overlap();
    assert_eq!(overlap.len(), 2);
    assert!(overlap.contains(&Point::new(150.0, 100.0)));
    assert!(overlap.contains(&Point::new(155.0, 100.0)));

    // Each polygon carries its own debug tree over the same canvas.
    for polygon in session.polygons() {
        assert_eq!(polygon.tree().bounds(), &canvas());
        assert!(!polygon.tree().is_empty());
        assert!(!polygon.tree().outline().is_empty());
    }
}
