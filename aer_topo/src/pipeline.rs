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

//! single-shot and batch look angle computation. Batches never abort on a single record - each
//! input produces exactly one `Result` at the same position in the output

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, error, warn};
use aer_common::MinMaxAvg;
use crate::{
    ellipsoid::EllipsoidModel,
    errors::Result,
    frames::{eci_to_ecef, EcefVector, EciVector},
    geodetic::GeodeticPosition,
    sidereal::compute_gst,
    topocentric::{ecef_to_aer, Aer, ObserverFrame},
};

/// the ordered per-record outcome of a batch run
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<Result<Aer>>,
}

impl BatchReport {
    pub fn len (&self)->usize { self.results.len() }

    pub fn is_empty (&self)->bool { self.results.is_empty() }

    pub fn n_ok (&self)->usize { self.results.iter().filter( |r| r.is_ok()).count() }

    pub fn n_failed (&self)->usize { self.results.iter().filter( |r| r.is_err()).count() }

    /// successfully converted records together with their input index
    pub fn successes (&self)->impl Iterator<Item=(usize,&Aer)> {
        self.results.iter().enumerate().filter_map( |(i,r)| r.as_ref().ok().map( |aer| (i,aer)))
    }

    /// (azimuth,elevation,range) statistics over the successful records
    pub fn stats (&self)->(MinMaxAvg,MinMaxAvg,MinMaxAvg) {
        let mut az = MinMaxAvg::new();
        let mut el = MinMaxAvg::new();
        let mut range = MinMaxAvg::new();

        for (_,aer) in self.successes() {
            az.add( aer.azimuth);
            el.add( aer.elevation);
            range.add( aer.range);
        }
        (az,el,range)
    }

    fn log_failures (&self) {
        for (i,r) in self.results.iter().enumerate() {
            match r {
                Err(e) if e.is_record_error() => warn!("record {} failed: {}", i+1, e),
                Err(e) => error!("record {} failed: {}", i+1, e),
                Ok(_) => {}
            }
        }
    }
}

//--- single shot

/// look angles of a satellite ECEF position for the given observer
pub fn ecef_look_angles (observer: &GeodeticPosition, model: &EllipsoidModel, sat: &EcefVector)->Result<Aer> {
    let frame = ObserverFrame::new( observer, model)?;
    ecef_to_aer( sat, &frame)
}

/// look angles of a satellite ECI position at the given instant
pub fn eci_look_angles (observer: &GeodeticPosition, model: &EllipsoidModel, sat: &EciVector, t: &DateTime<Utc>)->Result<Aer> {
    let frame = ObserverFrame::new( observer, model)?;
    eci_to_aer( sat, t, &frame)
}

/// rotate ECI into ECEF with the Greenwich sidereal time of `t` and compute look angles
pub fn eci_to_aer (sat: &EciVector, t: &DateTime<Utc>, frame: &ObserverFrame)->Result<Aer> {
    let gst = compute_gst( t);
    ecef_to_aer( &eci_to_ecef( sat, gst), frame)
}

//--- batch

/// compute the observer frame once and convert all satellite positions with it. This only fails if
/// the observer position itself is invalid
pub fn batch (observer: &GeodeticPosition, model: &EllipsoidModel, sats: &[EcefVector])->Result<BatchReport> {
    let frame = ObserverFrame::new( observer, model)?;
    Ok( batch_with_frame( &frame, sats))
}

pub fn batch_with_frame (frame: &ObserverFrame, sats: &[EcefVector])->BatchReport {
    debug!("converting batch of {} ECEF positions", sats.len());
    let results = sats.iter().map( |sat| ecef_to_aer( sat, frame)).collect();
    let report = BatchReport { results };
    report.log_failures();
    report
}

/// batch over parsed input records. Records that failed to parse keep their error
pub fn batch_records (frame: &ObserverFrame, records: Vec<Result<EcefVector>>)->BatchReport {
    debug!("converting batch of {} input records", records.len());
    let results = records.into_iter().map( |rec| rec.and_then( |sat| ecef_to_aer( &sat, frame))).collect();
    let report = BatchReport { results };
    report.log_failures();
    report
}

/// parallel version of [`batch_with_frame`]. Results are in input order
pub fn batch_par (frame: &ObserverFrame, sats: &[EcefVector])->BatchReport {
    debug!("converting batch of {} ECEF positions in parallel", sats.len());
    let results = sats.par_iter().map( |sat| ecef_to_aer( sat, frame)).collect();
    let report = BatchReport { results };
    report.log_failures();
    report
}

/// look angles for a time series of ECI samples (e.g. propagated satellite positions)
pub fn track (frame: &ObserverFrame, samples: &[(DateTime<Utc>,EciVector)])->BatchReport {
    debug!("converting track of {} ECI samples", samples.len());
    let results = samples.iter().map( |(t,sat)| eci_to_aer( sat, t, frame)).collect();
    let report = BatchReport { results };
    report.log_failures();
    report
}
