// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

// extern crate we're testing, same as any other code would do.
extern crate latlng;

use angle_sc::is_within_tolerance;
use core::f64::consts::FRAC_PI_2;
use latlng::sphere::earth::RADIUS_KM;
use latlng::{coord, distance, heading, intermediate, Coordinate, Degrees};

/// A spread of coordinates covering both hemispheres and the poles.
fn sample_coordinates() -> Vec<Coordinate<Degrees>> {
    let mut coordinates = Vec::new();
    for lat in (-90..=90).step_by(30) {
        for lng in (-180..=180).step_by(45) {
            coordinates.push(Coordinate::new(
                Degrees(f64::from(lat)),
                Degrees(f64::from(lng)),
            ));
        }
    }
    coordinates
}

#[test]
fn test_distance_symmetry_and_identity() {
    let coordinates = sample_coordinates();
    for a in &coordinates {
        assert_eq!(0.0, distance(a, a, true));
        assert_eq!(0.0, distance(a, a, false));

        for b in &coordinates {
            assert_eq!(distance(a, b, true), distance(b, a, true));

            let arc = distance(a, b, false);
            assert!((0.0..=core::f64::consts::PI).contains(&arc), "arc: {arc}");
        }
    }
}

#[test]
fn test_heading_range() {
    let coordinates = sample_coordinates();
    for a in &coordinates {
        for b in &coordinates {
            let result = heading(a, b, true);
            assert!((0.0..360.0).contains(&result), "heading: {result}");
        }
    }
}

#[test]
fn test_coord_reaches_finish() {
    // Avoid the poles, coincident and antipodal pairs: the heading is undefined
    let mut coordinates = Vec::new();
    for lat in (-75..=75).step_by(25) {
        for lng in (-150..=150).step_by(50) {
            coordinates.push(Coordinate::new(
                Degrees(f64::from(lat)),
                Degrees(f64::from(lng)),
            ));
        }
    }

    for a in &coordinates {
        for b in &coordinates {
            let arc = distance(a, b, false);
            if arc < 1e-3 || core::f64::consts::PI - arc < 1e-3 {
                continue;
            }

            let result = coord(a, Degrees(heading(a, b, true)), distance(a, b, true));
            assert!(
                is_within_tolerance(b.lat().0, result.lat().0, 1e-6),
                "a: {a:?} b: {b:?} result: {result:?}"
            );

            // the destination longitude is not normalised
            let delta_lng = latlng::sphere::wrap_positive(result.lng().0 - b.lng().0 + 180.0, 360.0);
            assert!(
                is_within_tolerance(180.0, delta_lng, 1e-6),
                "a: {a:?} b: {b:?} result: {result:?}"
            );
        }
    }
}

#[test]
fn test_intermediate_end_points() {
    let london = Coordinate::new(Degrees(51.5074), Degrees(-0.1278));
    let tokyo = Coordinate::new(Degrees(35.6762), Degrees(139.6503));

    let result = intermediate(&london, &tokyo, 0.0);
    assert!(is_within_tolerance(london.lat().0, result.lat().0, 1e-9));
    assert!(is_within_tolerance(london.lng().0, result.lng().0, 1e-9));

    let result = intermediate(&london, &tokyo, 1.0);
    assert!(is_within_tolerance(tokyo.lat().0, result.lat().0, 1e-9));
    assert!(is_within_tolerance(tokyo.lng().0, result.lng().0, 1e-9));

    // Points along the arc are on the great circle
    let total = distance(&london, &tokyo, true);
    for i in 1..10 {
        let fraction = f64::from(i) / 10.0;
        let point = intermediate(&london, &tokyo, fraction);
        assert!(is_within_tolerance(
            fraction * total,
            distance(&london, &point, true),
            1e-6
        ));
        assert!(is_within_tolerance(
            (1.0 - fraction) * total,
            distance(&point, &tokyo, true),
            1e-6
        ));
    }
}

#[test]
fn test_quarter_circumference_scenarios() {
    let origin = Coordinate::new(Degrees(0.0), Degrees(0.0));
    let east = Coordinate::new(Degrees(0.0), Degrees(90.0));
    let quarter = RADIUS_KM * FRAC_PI_2;

    assert!(is_within_tolerance(quarter, distance(&origin, &east, true), 1e-9));
    assert!(is_within_tolerance(90.0, heading(&origin, &east, true), 1e-12));

    let result = coord(&origin, Degrees(90.0), quarter);
    assert!(is_within_tolerance(0.0, result.lat().0, 1e-12));
    assert!(is_within_tolerance(90.0, result.lng().0, 1e-12));

    let result = intermediate(&origin, &east, 0.5);
    assert!(is_within_tolerance(0.0, result.lat().0, 1e-12));
    assert!(is_within_tolerance(45.0, result.lng().0, 1e-12));
}
