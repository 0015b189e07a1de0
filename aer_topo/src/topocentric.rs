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
use tracing::debug;
use aer_common::{angle::normalize_360, atan2, deg, pow2, sqrt};
use crate::{
    ellipsoid::EllipsoidModel,
    errors::{AerError, Result, degenerate},
    frames::{build_topocentric_rotation, Ecef, EcefVector, Rotation, Sez, SezVector},
    geodetic::{geodetic_to_ecef, GeodeticPosition},
};

/// ranges (km) below this have no defined look direction
pub const DEGENERATE_RANGE_EPSILON: f64 = 1e-9;

/// azimuth (degrees clockwise from north in [0,360)), elevation (degrees in [-90,90]) and
/// range (km) of a target as seen from an observer
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Aer {
    pub azimuth: f64,
    pub elevation: f64,
    pub range: f64,
}

impl Aer {
    pub fn is_above_horizon (&self)->bool { self.elevation > 0.0 }
}

impl fmt::Display for Aer {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "az: {:.4}°, el: {:.4}°, range: {:.3} km", self.azimuth, self.elevation, self.range)
    }
}

/// everything we need to know about an observer to compute look angles. This is computed once per
/// observer and then shared (read-only) between all conversions for this observer
#[derive(Debug,Clone)]
pub struct ObserverFrame {
    geodetic: GeodeticPosition,
    model: EllipsoidModel,
    position: EcefVector,
    sez: Rotation<Ecef,Sez>,
}

impl ObserverFrame {
    pub fn new (geodetic: &GeodeticPosition, model: &EllipsoidModel)->Result<Self> {
        let position = geodetic_to_ecef( geodetic, model)?;
        let sez = build_topocentric_rotation( geodetic.latitude, geodetic.longitude);
        debug!("observer frame for {} ({:?}): {:?}", geodetic, model, position);

        Ok( ObserverFrame { geodetic: *geodetic, model: *model, position, sez } )
    }

    #[inline] pub fn geodetic (&self)->&GeodeticPosition { &self.geodetic }
    #[inline] pub fn model (&self)->&EllipsoidModel { &self.model }
    #[inline] pub fn position (&self)->&EcefVector { &self.position }
    #[inline] pub fn sez_rotation (&self)->&Rotation<Ecef,Sez> { &self.sez }

    /// the observer relative SEZ vector of an ECEF target position
    pub fn to_sez (&self, target: &EcefVector)->SezVector {
        self.sez.apply( &(target - &self.position))
    }
}

/// convert an observer relative SEZ vector into azimuth, elevation and range
pub fn sez_to_aer (sez: &SezVector)->Result<Aer> {
    if !sez.is_finite() {
        return Err( degenerate!("non-finite topocentric vector {:?}", sez))
    }

    let (s, e, z) = (sez.x(), sez.y(), sez.z());
    let range = sez.norm();
    if range < DEGENERATE_RANGE_EPSILON {
        return Err( degenerate!("target coincides with observer (range {} km)", range))
    }

    // atan2 is the same as asin(z/range) but can't leave the asin domain due to rounding
    let elevation = deg( atan2( z, sqrt( pow2(s) + pow2(e))));
    let azimuth = normalize_360( deg( atan2( e, -s)));

    Ok( Aer { azimuth, elevation, range } )
}

pub fn ecef_to_aer (target: &EcefVector, observer: &ObserverFrame)->Result<Aer> {
    sez_to_aer( &observer.to_sez( target))
}
