/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// this should be used wherever we might have to use a sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    let ndt = NaiveDateTime::new(nd, NaiveTime::MIN);
    DateTime::from_naive_utc_and_offset(ndt,Utc)
}

/// the start (00:00:00 UTC) of the day of the given DateTime
pub fn utc_midnight (dt: &DateTime<Utc>) -> DateTime<Utc> {
    naive_utc_date_to_utc_datetime( dt.date_naive())
}

/// fractional seconds since epoch. Returns None for non-finite or out of range values
pub fn from_epoch_secs_f64 (secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() { return None }

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 { return None }
    DateTime::<Utc>::from_timestamp( whole as i64, nanos)
}

/// fractional seconds since epoch (including sub-second part)
pub fn to_epoch_secs_f64 (dt: &DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9
}

//--- misc string format parsing

/// parse RFC 3339 / ISO 8601 datetime specs with explicit offset. Input without offset is taken as UTC
pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    match DateTime::parse_from_str(s, "%+") {
        Ok(dt) => Some(dt.to_utc()),
        Err(_) => {
            NaiveDateTime::parse_from_str( s, "%Y-%m-%dT%H:%M:%S%.f").ok()
                .or_else( || NaiveDateTime::parse_from_str( s, "%Y-%m-%d %H:%M:%S%.f").ok())
                .map( |ndt| DateTime::from_naive_utc_and_offset(ndt,Utc))
        }
    }
}
