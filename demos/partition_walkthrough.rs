use geo::Point;
use overgrid::{Bounds, RegionTree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Overgrid - Partition Walkthrough ===\n");

    let mut tree = RegionTree::new(Bounds::new(0.0, 0.0, 600.0, 400.0)?, 1, 8)?;

    let points = [
        Point::new(5.0, 5.0),
        Point::new(595.0, 395.0),
        Point::new(300.0, 200.0),
        Point::new(120.0, 340.0),
        Point::new(480.0, 60.0),
    ];

    for point in points {
        let accepted = tree.insert(point);
        println!("insert ({:>5.1}, {:>5.1}) -> {}", point.x(), point.y(), accepted);
    }

    println!("\nLeaf rectangles after subdivision (quadrant order):");
    for leaf in tree.outline() {
        println!(
            "  [{:>5.1}, {:>5.1}] - [{:>5.1}, {:>5.1}]  center ({:.1}, {:.1})",
            leaf.bounds.min_x(),
            leaf.bounds.min_y(),
            leaf.bounds.max_x(),
            leaf.bounds.max_y(),
            leaf.center.x(),
            leaf.center.y()
        );
    }

    let window = Bounds::new(0.0, 0.0, 150.0, 150.0)?;
    println!("\nPoints in [0,0]-[150,150]: {:?}", tree.query_range(&window));

    Ok(())
}
