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

use chrono::{DateTime, TimeZone, Utc};
use satkit::{Instant, TLE, sgp4::sgp4};
use tracing::debug;
use crate::{
    elements::ElementSet,
    errors::{AerError, Result, propagation_error},
    frames::EciVector,
};

/// something that turns element sets into inertial positions (km) at given instants
pub trait Propagator {
    fn propagate (&self, es: &ElementSet, t: &DateTime<Utc>)->Result<EciVector>;

    /// propagate to a sequence of instants. The default just calls `propagate` for each of them
    fn propagate_all (&self, es: &ElementSet, ts: &[DateTime<Utc>])->Result<Vec<(DateTime<Utc>,EciVector)>> {
        ts.iter().map( |t| self.propagate( es, t).map( |p| (*t,p))).collect()
    }
}

pub fn instant_from_datetime<Z> (dt: &DateTime<Z>)->Instant where Z: TimeZone {
    Instant::from_unixtime( dt.timestamp_millis() as f64 / 1000.0)
}

/// SGP4 propagation. The TEME output is used as ECI position
#[derive(Debug,Clone,Copy,Default)]
pub struct Sgp4Propagator;

impl Sgp4Propagator {
    fn load_tle (es: &ElementSet)->Result<TLE> {
        TLE::load_2line( es.line1.trim(), es.line2.trim()).map_err(|e| propagation_error!("2 line TLE import of '{}' failed {:?}", es.name, e))
    }
}

impl Propagator for Sgp4Propagator {
    fn propagate (&self, es: &ElementSet, t: &DateTime<Utc>)->Result<EciVector> {
        let mut tle = Self::load_tle( es)?;
        let (pteme, _vteme, _errs) = sgp4( &mut tle, &[instant_from_datetime(t)]);

        let p = pteme.column(0);
        let eci = EciVector::new( p[0] / 1000.0, p[1] / 1000.0, p[2] / 1000.0); // satkit positions are in meters
        if !eci.is_finite() {
            return Err( propagation_error!("no valid position for '{}' at {}", es.name, t))
        }

        debug!("propagated '{}' to {}: {:?}", es.name, t, eci);
        Ok(eci)
    }

    fn propagate_all (&self, es: &ElementSet, ts: &[DateTime<Utc>])->Result<Vec<(DateTime<Utc>,EciVector)>> {
        let mut tle = Self::load_tle( es)?;
        let tvec: Vec<Instant> = ts.iter().map( instant_from_datetime).collect();
        let (pteme, _vteme, _errs) = sgp4( &mut tle, &tvec); // this mutates the TLE

        let mut samples = Vec::with_capacity( ts.len());
        for (i,t) in ts.iter().enumerate() {
            let p = pteme.column(i);
            let eci = EciVector::new( p[0] / 1000.0, p[1] / 1000.0, p[2] / 1000.0);
            if !eci.is_finite() {
                return Err( propagation_error!("no valid position for '{}' at {}", es.name, t))
            }
            samples.push( (*t,eci));
        }
        Ok(samples)
    }
}
