// demos/00-geodesics.rs

// Using the Vincenty solvers to compute distances, bearings and destinations.
// Run with:
// cargo run --example 00-geodesics
// or, to see what the solvers are up to:
// RUST_LOG=trace cargo run --example 00-geodesics

use vincenty::prelude::*;

// Use Anyhow for convenient error handling
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Points are bound to a datum, which carries the ellipsoid. The
    // registry of well known datums is built on first use, and lives
    // for the rest of the program.
    let wgs84 = datum("WGS84")?;
    let cph = GeodeticPoint::new(55., 12., wgs84)?; // Copenhagen
    let osl = GeodeticPoint::new(60., 10., wgs84)?; // Oslo
    let sth = GeodeticPoint::new(59., 18., wgs84)?; // Stockholm
    let hel = GeodeticPoint::new(60., 25., wgs84)?; // Helsinki

    // The inverse problem: From two points to distance and bearings.
    // The solver tolerance and iteration limit may be tuned through the
    // options. Here, we go with the defaults.
    let options = GeodesicOptions::default();
    println!("Distances from Copenhagen:");
    for (name, city) in [("Oslo", &osl), ("Stockholm", &sth), ("Helsinki", &hel)] {
        let geodesic = compute_inverse(&cph, city, &options)?;
        println!(
            "    {name:<10} {:>12.3} m, leaving at {:>7.3}°, arriving at {:>7.3}°",
            geodesic.distance, geodesic.initial_bearing, geodesic.final_bearing
        );
    }

    // The direct problem: From a point, a bearing and a distance, to the
    // destination. Travelling 1000 km due east from Copenhagen, we end up
    // further south than we started, since the geodesic is not a parallel.
    let result = compute_direct(&cph, 90., 1_000_000., &options)?;
    let dest = result.destination;
    println!(
        "1000 km east of Copenhagen: ({:.6}, {:.6}), heading {:.3}°",
        dest.latitude(),
        dest.longitude(),
        result.final_bearing
    );

    // The same thing, using the point methods, which always use the
    // default options
    assert_eq!(cph.destination(90., 1_000_000.)?, dest);

    // The iterative solution of the inverse problem may fail to converge
    // for nearly antipodal points. Then we have to be more patient.
    let wellington = GeodeticPoint::wgs84(-41.32, 174.81)?;
    let salamanca = GeodeticPoint::wgs84(40.96, -5.50)?;
    match compute_inverse(&wellington, &salamanca, &options) {
        Err(e) => println!("Wellington-Salamanca: {e}"),
        Ok(geodesic) => println!("Wellington-Salamanca: {:.3} m", geodesic.distance),
    }
    let patient = options.with_max_iterations(200);
    let geodesic = compute_inverse(&wellington, &salamanca, &patient)?;
    println!(
        "Wellington-Salamanca: {:.3} m after {} iterations",
        geodesic.distance, geodesic.iterations
    );

    // Coincident points have no well defined bearings, hence are
    // reported as an error by the solver, while the convenience method
    // `distance_to` just says zero.
    assert!(compute_inverse(&cph, &cph, &options).is_err());
    assert_eq!(cph.distance_to(&cph)?, 0.);

    // Does a polygon enclose a pole?
    let nordic = [cph, osl, hel, sth];
    let arctic = [
        GeodeticPoint::wgs84(80., 0.)?,
        GeodeticPoint::wgs84(80., 120.)?,
        GeodeticPoint::wgs84(80., 240.)?,
    ];
    println!("Nordic polygon encloses a pole: {}", encloses_pole(&nordic, false)?);
    println!("Arctic polygon encloses a pole: {}", encloses_pole(&arctic, false)?);

    // Geodesics between points on different ellipsoids are undefined,
    // so convert to a common datum first.
    let ed50 = GeodeticPoint::new(55., 12., datum("ED50")?)?;
    if let Err(e) = compute_inverse(&ed50, &osl, &options) {
        println!("ED50 to WGS84: {e}");
    }

    Ok(())
}
