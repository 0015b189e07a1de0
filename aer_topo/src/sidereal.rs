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

//! Greenwich sidereal time for UTC instants. All instants are explicit `DateTime<Utc>` values,
//! there is no implicit time zone or clock offset anywhere in here

use chrono::{DateTime, NaiveDate, Utc};
use aer_common::{angle::Angle360, datetime};
use crate::errors::{AerError, Result, clock_error};

pub const UNIX_EPOCH_JD: f64 = 2440587.5;
pub const J2000_JD: f64 = 2451545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
const SECS_PER_DAY: f64 = 86400.0;

/// sidereal rotation in degrees per elapsed UT minute
pub const SIDEREAL_DEG_PER_MINUTE: f64 = 0.25068447733746215;

/// Julian date of the given instant (including the fraction of the day)
pub fn julian_date (t: &DateTime<Utc>)->f64 {
    datetime::to_epoch_secs_f64(t) / SECS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian date of 00:00 UTC of the day of the given instant (always ends in .5)
pub fn julian_date_at_midnight (t: &DateTime<Utc>)->f64 {
    julian_date( &datetime::utc_midnight(t))
}

/// Greenwich sidereal time at 00:00 UTC of the day of `t`
pub fn gst_at_midnight (t: &DateTime<Utc>)->Angle360 {
    let jc = (julian_date_at_midnight(t) - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let gst0 = 100.4606184 + 36000.77005361 * jc + 0.00038793 * jc*jc - 2.583e-8 * jc*jc*jc;
    Angle360::from_degrees( gst0)
}

/// Greenwich sidereal time of the instant: GST at midnight plus the sidereal rotation for the
/// (fractional) minutes elapsed since 00:00 UTC
pub fn compute_gst (t: &DateTime<Utc>)->Angle360 {
    let minutes = (datetime::to_epoch_secs_f64(t) - datetime::to_epoch_secs_f64( &datetime::utc_midnight(t))) / 60.0;
    let gst = gst_at_midnight(t).degrees() + SIDEREAL_DEG_PER_MINUTE * minutes;
    Angle360::from_degrees( gst)
}

/// local sidereal time for an observer longitude (degrees, east positive)
pub fn local_sidereal_time (gst: Angle360, longitude: f64)->Angle360 {
    Angle360::from_degrees( gst.degrees() + longitude)
}

//--- fallible instant construction

pub fn instant_from_unix_secs (secs: f64)->Result<DateTime<Utc>> {
    datetime::from_epoch_secs_f64( secs).ok_or_else( || clock_error!("no valid UTC instant for epoch seconds {}", secs))
}

pub fn instant_from_components (year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64)->Result<DateTime<Utc>> {
    if !second.is_finite() || second < 0.0 || second >= 60.0 {
        return Err( clock_error!("invalid seconds {}", second))
    }

    let whole = second.trunc();
    let nanos = ((second - whole) * 1e9).round().min(999_999_999.0) as u32;

    NaiveDate::from_ymd_opt( year, month, day)
        .and_then( |d| d.and_hms_nano_opt( hour, minute, whole as u32, nanos))
        .map( |ndt| ndt.and_utc())
        .ok_or_else( || clock_error!("invalid date/time {year}-{month}-{day} {hour}:{minute}:{second}"))
}

/// parse RFC 3339 (or offset-less ISO 8601, taken as UTC) instant specs
pub fn parse_instant (spec: &str)->Result<DateTime<Utc>> {
    datetime::parse_datetime( spec.trim()).ok_or_else( || clock_error!("invalid instant spec '{}'", spec))
}
