/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fmt;
use serde::{Deserialize,Serialize};
use aer_common::{angle::normalize_180, atan2, cos, pow2, rad, deg, sin, sqrt};
use crate::{
    ellipsoid::EllipsoidModel,
    errors::{AerError, Result, degenerate, geodetic_error},
    frames::EcefVector,
};

const MAX_ITERATIONS: usize = 10;
const LAT_CONVERGENCE_RAD: f64 = 1e-14;

/// geodetic observer or satellite position.
/// latitude and longitude are in degrees, altitude in km above the ellipsoid
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeodeticPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl GeodeticPosition {
    /// create a validated position. Longitudes can be given as [-180..180] or [0..360) and are
    /// kept as given
    pub fn new (latitude: f64, longitude: f64, altitude: f64)->Result<Self> {
        let pos = GeodeticPosition { latitude, longitude, altitude };
        pos.validate()?;
        Ok(pos)
    }

    pub fn validate (&self)->Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() || !self.altitude.is_finite() {
            return Err( geodetic_error!("non-finite position {}", self))
        }
        if self.latitude < -90.0 || self.latitude > 90.0 {
            return Err( geodetic_error!("latitude {} outside of [-90,90]", self.latitude))
        }
        if self.longitude < -180.0 || self.longitude >= 360.0 {
            return Err( geodetic_error!("longitude {} outside of [-180,360)", self.longitude))
        }
        Ok(())
    }

    #[inline] pub fn latitude_rad (&self)->f64 { rad(self.latitude) }
    #[inline] pub fn longitude_rad (&self)->f64 { rad(self.longitude) }
}

impl fmt::Display for GeodeticPosition {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "({}°, {}°, {} km)", self.latitude, self.longitude, self.altitude)
    }
}

/// convert geodetic position into ECEF coordinates (km) of the given earth model
pub fn geodetic_to_ecef (pos: &GeodeticPosition, model: &EllipsoidModel)->Result<EcefVector> {
    pos.validate()?;
    if !model.is_valid() {
        return Err( geodetic_error!("invalid earth model {:?}", model))
    }

    let lat = pos.latitude_rad();
    let lon = pos.longitude_rad();
    let h = pos.altitude;

    let e2 = model.eccentricity_squared();
    let n = model.prime_vertical_radius(lat);

    let x = (n + h) * cos(lat) * cos(lon);
    let y = (n + h) * cos(lat) * sin(lon);
    let z = ((1.0 - e2) * n + h) * sin(lat);

    Ok( EcefVector::new( x, y, z))
}

/// iterative inverse of [`geodetic_to_ecef`], seeded with Bowring's parametric latitude.
/// The returned longitude is in (-180..180]
pub fn ecef_to_geodetic (ecef: &EcefVector, model: &EllipsoidModel)->Result<GeodeticPosition> {
    if !ecef.is_finite() {
        return Err( geodetic_error!("non-finite ECEF vector {:?}", ecef))
    }
    if !model.is_valid() {
        return Err( geodetic_error!("invalid earth model {:?}", model))
    }

    let (x,y,z) = (ecef.x(), ecef.y(), ecef.z());
    let a = model.semi_major_axis();
    let b = model.semi_minor_axis();
    let e2 = model.eccentricity_squared();
    let ep2 = model.second_eccentricity_squared();

    let p = sqrt( pow2(x) + pow2(y));
    if p < f64::EPSILON * a && z.abs() < f64::EPSILON * a {
        return Err( degenerate!("no geodetic position for earth center"))
    }

    let lon = atan2( y, x);

    let theta = atan2( z * a, p * b);
    let mut lat = atan2( z + ep2 * b * sin(theta).powi(3), p - e2 * a * cos(theta).powi(3));

    for _ in 0..MAX_ITERATIONS {
        let n = model.prime_vertical_radius(lat);
        let h = p * cos(lat) + z * sin(lat) - a * sqrt( 1.0 - e2 * pow2( sin(lat)));
        let next = atan2( z, p * (1.0 - e2 * n / (n + h)));
        let converged = (next - lat).abs() < LAT_CONVERGENCE_RAD;
        lat = next;
        if converged { break }
    }

    // this form of the height has no singularity at the poles
    let alt = p * cos(lat) + z * sin(lat) - a * sqrt( 1.0 - e2 * pow2( sin(lat)));

    Ok( GeodeticPosition { latitude: deg(lat), longitude: normalize_180( deg(lon)), altitude: alt })
}
