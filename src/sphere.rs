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

//! The sphere module contains functions for calculating great circle arc
//! lengths, headings and positions on the surface of a sphere.
//!
//! The functions take and return angles in `Radians`; conversion to and from
//! `Degrees` is performed by the public functions in the crate root.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

pub mod earth;

use crate::Coordinate;
use angle_sc::Radians;
use core::f64::consts::TAU;

/// Wrap a value into the half open range: 0 <= value < period.
///
/// Unlike the `%` operator and `fmod`, negative values are wrapped into the
/// positive range.
/// * `value` - the value to wrap.
/// * `period` - the period of the range, must be positive.
///
/// # Examples
/// ```
/// use latlng::sphere::wrap_positive;
///
/// assert_eq!(270.0, wrap_positive(-90.0, 360.0));
/// assert_eq!(0.0, wrap_positive(360.0, 360.0));
/// assert_eq!(10.0, wrap_positive(370.0, 360.0));
/// ```
#[must_use]
pub fn wrap_positive(value: f64, period: f64) -> f64 {
    let remainder = libm::fmod(value, period);
    if remainder < 0.0 {
        // A tiny negative remainder rounds up to the period itself.
        let wrapped = remainder + period;
        if wrapped < period {
            wrapped
        } else {
            0.0
        }
    } else {
        remainder
    }
}

/// Calculate the great circle arc length between a pair of points using the
/// haversine formula.
/// * `lat1`, `lat2` - the latitudes of the start and finish points.
/// * `delta_lat`, `delta_lng` - the latitude and longitude differences
///   between the points.
///
/// returns the central angle between the points.
#[must_use]
pub fn calculate_haversine_arc(
    lat1: Radians,
    lat2: Radians,
    delta_lat: Radians,
    delta_lng: Radians,
) -> Radians {
    let sin_half_dlat = libm::sin(delta_lat.0 / 2.0);
    let sin_half_dlng = libm::sin(delta_lng.0 / 2.0);
    let h = sin_half_dlat * sin_half_dlat
        + libm::cos(lat1.0) * libm::cos(lat2.0) * sin_half_dlng * sin_half_dlng;

    // Rounding can push h above 1 for antipodal points.
    let h = if h > 1.0 { 1.0 } else { h };
    Radians(2.0 * libm::asin(libm::sqrt(h)))
}

/// Calculate the initial heading of the great circle from `a` to `b`.
/// * `a`, `b` - the start and finish points.
///
/// returns the heading clockwise from North, in the range: 0 <= heading < 2π
#[must_use]
pub fn calculate_initial_heading(a: &Coordinate<Radians>, b: &Coordinate<Radians>) -> Radians {
    let (lat1, lat2) = (a.lat().0, b.lat().0);
    let delta_lng = b.lng().0 - a.lng().0;

    let y = libm::sin(delta_lng) * libm::cos(lat2);
    let x = libm::cos(lat1) * libm::sin(lat2)
        - libm::sin(lat1) * libm::cos(lat2) * libm::cos(delta_lng);
    Radians(wrap_positive(libm::atan2(y, x), TAU))
}

/// Calculate the point reached by travelling along a great circle,
/// the "direct" problem.
/// * `start` - the start point.
/// * `heading` - the initial heading, clockwise from North.
/// * `arc_length` - the great circle arc length to travel.
///
/// returns the finish point. Its longitude is **not** normalised.
#[must_use]
pub fn calculate_destination(
    start: &Coordinate<Radians>,
    heading: Radians,
    arc_length: Radians,
) -> Coordinate<Radians> {
    let (sin_lat1, cos_lat1) = (libm::sin(start.lat().0), libm::cos(start.lat().0));
    let (sin_arc, cos_arc) = (libm::sin(arc_length.0), libm::cos(arc_length.0));

    let lat2 = libm::asin(sin_lat1 * cos_arc + cos_lat1 * sin_arc * libm::cos(heading.0));
    let delta_lng = libm::atan2(
        libm::sin(heading.0) * sin_arc * cos_lat1,
        cos_arc - sin_lat1 * libm::sin(lat2),
    );
    Coordinate::new(Radians(lat2), Radians(start.lng().0 + delta_lng))
}

/// Calculate a point along the great circle arc between a pair of points
/// by spherical linear interpolation.
/// * `a`, `b` - the start and finish points.
/// * `arc_length` - the great circle arc length between `a` and `b`.
/// * `fraction` - the fraction of the arc length: 0 at `a`, 1 at `b`.
///
/// Note: the interpolation weights are divided by `sin(arc_length)`, so the
/// result is `NaN` when `a` and `b` coincide and ill-conditioned when they
/// are nearly antipodal.
#[must_use]
pub fn calculate_intermediate(
    a: &Coordinate<Radians>,
    b: &Coordinate<Radians>,
    arc_length: Radians,
    fraction: f64,
) -> Coordinate<Radians> {
    let sin_arc = libm::sin(arc_length.0);
    let weight_a = libm::sin((1.0 - fraction) * arc_length.0) / sin_arc;
    let weight_b = libm::sin(fraction * arc_length.0) / sin_arc;

    let (cos_lat1, cos_lat2) = (libm::cos(a.lat().0), libm::cos(b.lat().0));
    let x = weight_a * cos_lat1 * libm::cos(a.lng().0) + weight_b * cos_lat2 * libm::cos(b.lng().0);
    let y = weight_a * cos_lat1 * libm::sin(a.lng().0) + weight_b * cos_lat2 * libm::sin(b.lng().0);
    let z = weight_a * libm::sin(a.lat().0) + weight_b * libm::sin(b.lat().0);

    Coordinate::new(
        Radians(libm::atan2(z, libm::sqrt(x * x + y * y))),
        Radians(libm::atan2(y, x)),
    )
}
