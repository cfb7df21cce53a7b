use geo::Point;
use overgrid::{Config, Role, Session};

/// Interpolate a closed polygon's vertex list into a dense boundary sequence,
/// stepping roughly 5px along each edge. In the real application this is done
/// by the drawing surface; the demo fakes it.
fn densify(vertices: &[(f64, f64)], step: f64) -> Vec<Point<f64>> {
    let mut points = Vec::new();
    for i in 0..vertices.len() {
        let (x0, y0) = vertices[i];
        let (x1, y1) = vertices[(i + 1) % vertices.len()];
        let length = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
        let segments = (length / step).ceil().max(1.0) as usize;
        for s in 0..segments {
            let t = s as f64 / segments as f64;
            points.push(Point::new(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    points
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Overgrid - Overlap Detection Demo ===\n");

    // A 1px tolerance so interpolated boundaries from independent drawings
    // can still register as overlapping.
    let config = Config::default()
        .with_canvas_size(600.0, 400.0)
        .with_match_tolerance(1.0);
    let mut session = Session::new(config)?;
    println!("✓ Started session over a 600x400 canvas\n");

    // === 1. ADMIN DRAWS ===
    println!("1. Admin Polygons");
    println!("-----------------");

    let admin_region = densify(&[(100.0, 100.0), (300.0, 100.0), (300.0, 250.0), (100.0, 250.0)], 5.0);
    session.finalize_polygon(admin_region, [220, 40, 40])?;
    println!("   Finalized admin rectangle ({} boundary points)", session.stats().admin_points);

    // === 2. USER DRAWS ===
    println!("\n2. User Polygons");
    println!("----------------");

    session.set_active_role(Role::User);
    let user_region = densify(&[(250.0, 100.0), (450.0, 120.0), (400.0, 300.0), (250.0, 250.0)], 5.0);
    session.finalize_polygon(user_region, [40, 40, 220])?;
    println!("   Finalized user quadrilateral ({} boundary points)", session.stats().user_points);

    // === 3. OVERLAP ===
    println!("\n3. Overlap Highlighting");
    println!("-----------------------");

    let overlap = session.overlap();
    println!("   {} admin boundary points coincide with the user boundary:", overlap.len());
    for point in overlap.iter().take(8) {
        println!("     ({:.1}, {:.1})", point.x(), point.y());
    }
    if overlap.len() > 8 {
        println!("     ... and {} more", overlap.len() - 8);
    }

    // === 4. PARTITION DEBUG VIEW ===
    println!("\n4. Partition Debug View");
    println!("-----------------------");

    let first = &session.polygons()[0];
    let outlines = first.tree().outline();
    println!(
        "   The first polygon's tree partitioned the canvas into {} leaves",
        outlines.len()
    );

    Ok(())
}
