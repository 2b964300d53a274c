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

//! latlng
//!
//! A library for performing navigation calculations between latitude and
//! longitude coordinates on a spherical Earth model.
//!
//! ## Great circle navigation
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle).
//! This library calculates:
//!
//! - the length of the great circle arc between two coordinates, using the
//!   [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula);
//! - the initial heading (bearing) of the arc, clockwise from North;
//! - the coordinate reached by travelling a distance along a heading,
//!   the "direct" problem;
//! - and intermediate coordinates along the arc, by spherical linear
//!   interpolation.
//!
//! See: [Aviation Formulary](https://edwilliams.org/avform147.htm) and
//! [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong.html).
//!
//! ## Design
//!
//! The Earth is modelled as a sphere with a radius of
//! [`sphere::earth::RADIUS_KM`] kilometres. Distances are in kilometres,
//! angles are in `Degrees` at the public interface and `Radians` internally.
//!
//! The functions are pure: they do not validate their inputs, nor normalise
//! their outputs. Out of range or non finite inputs produce the `NaN` or
//! infinite values defined by IEEE-754 arithmetic. Callers that need to
//! check coordinates can use the [`Validate`] trait.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod sphere;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use sphere::earth::{METRES_PER_KM, RADIUS_KM};

/// A latitude and longitude pair.
///
/// `T` is the angle type of the components: `Degrees` for the public
/// functions and `Radians` for the `sphere` calculations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate<T> {
    /// The latitude, positive North of the Equator.
    lat: T,
    /// The longitude, positive East of the Prime Meridian.
    lng: T,
}

impl<T: Copy> Coordinate<T> {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lng` - the longitude.
    #[must_use]
    pub const fn new(lat: T, lng: T) -> Self {
        Self { lat, lng }
    }

    /// The latitude.
    #[must_use]
    pub const fn lat(&self) -> T {
        self.lat
    }

    /// The longitude.
    #[must_use]
    pub const fn lng(&self) -> T {
        self.lng
    }
}

impl Validate for Coordinate<Degrees> {
    /// Test whether a `Coordinate` is valid.
    /// Whether -90° <= `lat` <= 90° and -180° <= `lng` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0) && (-180.0..=180.0).contains(&self.lng.0)
    }
}

impl From<&LatLong> for Coordinate<Degrees> {
    /// Construct a `Coordinate` from a `unit_sphere::LatLong`.
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

impl From<Coordinate<Degrees>> for LatLong {
    /// Construct a `unit_sphere::LatLong` from a `Coordinate`.
    fn from(a: Coordinate<Degrees>) -> Self {
        Self::new(a.lat(), a.lng())
    }
}

/// Convert a `Coordinate` from degrees to radians.
/// # Examples
/// ```
/// use latlng::{to_radians, Coordinate, Degrees};
///
/// let result = to_radians(&Coordinate::new(Degrees(90.0), Degrees(-180.0)));
/// assert_eq!(core::f64::consts::FRAC_PI_2, result.lat().0);
/// assert_eq!(-core::f64::consts::PI, result.lng().0);
/// ```
#[must_use]
pub fn to_radians(a: &Coordinate<Degrees>) -> Coordinate<Radians> {
    Coordinate::new(Radians(a.lat.0.to_radians()), Radians(a.lng.0.to_radians()))
}

/// Convert a `Coordinate` from radians to degrees.
/// # Examples
/// ```
/// use latlng::{to_degrees, Coordinate, Radians};
///
/// let result = to_degrees(&Coordinate::new(Radians(core::f64::consts::FRAC_PI_2), Radians(0.0)));
/// assert_eq!(90.0, result.lat().0);
/// assert_eq!(0.0, result.lng().0);
/// ```
#[must_use]
pub fn to_degrees(a: &Coordinate<Radians>) -> Coordinate<Degrees> {
    Coordinate::new(Degrees(a.lat.0.to_degrees()), Degrees(a.lng.0.to_degrees()))
}

/// Calculate the great circle arc length between a pair of coordinates.
/// * `a`, `b` - the coordinates.
///
/// returns the central angle between the coordinates.
#[must_use]
pub fn arc_length(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>) -> Radians {
    let a_rad = to_radians(a);
    let b_rad = to_radians(b);

    // The differences are taken in degrees before conversion.
    let delta_lat = Radians((a.lat.0 - b.lat.0).to_radians());
    let delta_lng = Radians((a.lng.0 - b.lng.0).to_radians());

    sphere::calculate_haversine_arc(a_rad.lat, b_rad.lat, delta_lat, delta_lng)
}

/// Calculate the great circle distance between a pair of coordinates.
/// * `a`, `b` - the coordinates.
/// * `use_earth_radius` - if true, multiply the arc length by the Earth radius.
///
/// returns the distance in kilometres if `use_earth_radius` is true,
/// otherwise the arc length in radians.
///
/// # Examples
/// ```
/// use latlng::{distance, Coordinate, Degrees};
/// use angle_sc::is_within_tolerance;
///
/// let a = Coordinate::new(Degrees(0.0), Degrees(0.0));
/// let b = Coordinate::new(Degrees(0.0), Degrees(90.0));
///
/// assert!(is_within_tolerance(10018.696, distance(&a, &b, true), 1e-3));
/// assert!(is_within_tolerance(core::f64::consts::FRAC_PI_2, distance(&a, &b, false), 1e-15));
/// ```
#[must_use]
pub fn distance(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>, use_earth_radius: bool) -> f64 {
    let arc = arc_length(a, b).0;
    if use_earth_radius {
        RADIUS_KM * arc
    } else {
        arc
    }
}

/// Calculate the great circle distance between a pair of coordinates in
/// kilometres.
/// * `a`, `b` - the coordinates.
#[must_use]
pub fn distance_km(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>) -> f64 {
    distance(a, b, true)
}

/// Calculate the great circle distance between a pair of coordinates in
/// `Metres`.
/// * `a`, `b` - the coordinates.
///
/// # Examples
/// ```
/// use latlng::{distance_metres, Coordinate, Degrees, NauticalMiles};
///
/// let istanbul = Coordinate::new(Degrees(42.0), Degrees(29.0));
/// let washington = Coordinate::new(Degrees(39.0), Degrees(-77.0));
///
/// let distance_nm = NauticalMiles::from(distance_metres(&istanbul, &washington));
/// println!("Istanbul-Washington distance: {:?}", distance_nm);
/// ```
#[must_use]
pub fn distance_metres(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>) -> Metres {
    Metres(METRES_PER_KM * distance_km(a, b))
}

/// Calculate the initial heading (bearing) of the great circle from `a` to `b`.
/// * `a`, `b` - the start and finish coordinates.
/// * `degrees` - if true, return the heading in degrees, otherwise in radians.
///
/// returns the heading clockwise from North: 0 <= heading < 360 in degrees,
/// 0 <= heading < 2π in radians.
///
/// # Examples
/// ```
/// use latlng::{heading, Coordinate, Degrees};
///
/// let a = Coordinate::new(Degrees(0.0), Degrees(0.0));
/// let b = Coordinate::new(Degrees(0.0), Degrees(90.0));
///
/// assert_eq!(90.0, heading(&a, &b, true));
/// assert_eq!(180.0, heading(&Coordinate::new(Degrees(10.0), Degrees(0.0)), &a, true));
/// ```
#[must_use]
pub fn heading(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>, degrees: bool) -> f64 {
    let result = sphere::calculate_initial_heading(&to_radians(a), &to_radians(b)).0;
    if degrees {
        sphere::wrap_positive(result.to_degrees(), 360.0)
    } else {
        result
    }
}

/// Calculate the initial heading of the great circle from `a` to `b` in `Degrees`.
/// * `a`, `b` - the start and finish coordinates.
#[must_use]
pub fn initial_heading(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>) -> Degrees {
    Degrees(heading(a, b, true))
}

/// Calculate the coordinate reached by travelling from `start` along a
/// great circle.
/// * `start` - the start coordinate.
/// * `heading` - the initial heading, clockwise from North.
/// * `distance_km` - the distance to travel in kilometres.
///
/// returns the destination coordinate. Its longitude is **not** normalised
/// to the range: -180 <= lng <= 180.
///
/// # Examples
/// ```
/// use latlng::{coord, Coordinate, Degrees};
/// use angle_sc::is_within_tolerance;
///
/// let origin = Coordinate::new(Degrees(0.0), Degrees(0.0));
/// let result = coord(&origin, Degrees(90.0), 10018.75);
///
/// assert!(is_within_tolerance(0.0, result.lat().0, 1e-9));
/// assert!(is_within_tolerance(90.0, result.lng().0, 1e-3));
/// ```
#[must_use]
pub fn coord(start: &Coordinate<Degrees>, heading: Degrees, distance_km: f64) -> Coordinate<Degrees> {
    let arc_length = Radians(distance_km / RADIUS_KM);
    let heading = Radians(heading.0.to_radians());
    to_degrees(&sphere::calculate_destination(
        &to_radians(start),
        heading,
        arc_length,
    ))
}

/// Calculate the coordinate reached by travelling a distance in `Metres`
/// from `start` along a great circle.
/// * `start` - the start coordinate.
/// * `heading` - the initial heading, clockwise from North.
/// * `distance` - the distance to travel.
#[must_use]
pub fn coord_metres(start: &Coordinate<Degrees>, heading: Degrees, distance: Metres) -> Coordinate<Degrees> {
    coord(start, heading, distance.0 / METRES_PER_KM)
}

/// Calculate a coordinate along the great circle arc between a pair of
/// coordinates.
/// * `a`, `b` - the start and finish coordinates.
/// * `fraction` - the fraction of the distance from `a` to `b`:
///   0 returns `a` and 1 returns `b`. It is not range checked.
///
/// Note: the result is `NaN` when `a` and `b` coincide, since the arc
/// between them is undefined. Nearly antipodal coordinates are ill-conditioned.
///
/// # Examples
/// ```
/// use latlng::{intermediate, Coordinate, Degrees};
/// use angle_sc::is_within_tolerance;
///
/// let a = Coordinate::new(Degrees(0.0), Degrees(0.0));
/// let b = Coordinate::new(Degrees(0.0), Degrees(90.0));
/// let result = intermediate(&a, &b, 0.5);
///
/// assert!(is_within_tolerance(0.0, result.lat().0, 1e-12));
/// assert!(is_within_tolerance(45.0, result.lng().0, 1e-12));
///
/// let result = intermediate(&a, &a, 0.5);
/// assert!(result.lat().0.is_nan());
/// ```
#[must_use]
pub fn intermediate(a: &Coordinate<Degrees>, b: &Coordinate<Degrees>, fraction: f64) -> Coordinate<Degrees> {
    let arc_length = arc_length(a, b);
    to_degrees(&sphere::calculate_intermediate(
        &to_radians(a),
        &to_radians(b),
        arc_length,
        fraction,
    ))
}
