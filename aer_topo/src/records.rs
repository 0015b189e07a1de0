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

//! position file input and look angle file output.
//!
//! Input lines are whitespace delimited, either as `epoch x y z vx vy vz` (orbit ephemeris
//! layout, only the position columns are used) or as a plain `x y z` triple, all in km. Empty
//! lines and lines starting with '#' are not records

use std::{fs::File, io::{BufRead, BufReader, Write}, path::Path};
use tracing::{debug, info};
use aer_common::fs::create_file_in_writable_dir;
use crate::{
    errors::{AerError, Result, malformed},
    frames::EcefVector,
    pipeline::BatchReport,
};

const OEM_COLUMNS: usize = 7;

/// parse a single input line (`line_no` is 1-based and only used for error reporting).
/// Returns `None` if the line is not a record
pub fn parse_record (line_no: usize, line: &str)->Option<Result<EcefVector>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') { return None }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let xyz = match fields.len() {
        3 => &fields[0..3],
        n if n >= OEM_COLUMNS => &fields[1..4],
        n => return Some( Err( malformed!( line_no, "expected 3 or {} columns, got {}", OEM_COLUMNS, n)))
    };

    Some( parse_xyz( line_no, xyz))
}

fn parse_xyz (line_no: usize, xyz: &[&str])->Result<EcefVector> {
    let mut v = [0.0f64; 3];
    for (i,s) in xyz.iter().enumerate() {
        let x: f64 = s.parse().map_err( |_| malformed!( line_no, "not a number: '{}'", s))?;
        if !x.is_finite() {
            return Err( malformed!( line_no, "not a finite number: '{}'", s))
        }
        v[i] = x;
    }
    Ok( EcefVector::from(v))
}

/// read all records in input order. Only I/O errors fail the whole read, malformed lines are
/// returned as errors in their record position
pub fn read_records<R> (reader: R)->Result<Vec<Result<EcefVector>>> where R: BufRead {
    let mut records = Vec::new();

    for (i,line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(rec) = parse_record( i+1, &line) {
            records.push( rec);
        }
    }

    Ok(records)
}

/// read records from a position file. An empty file is a valid input without records
pub fn read_records_from_file (path: impl AsRef<Path>)->Result<Vec<Result<EcefVector>>> {
    let path = path.as_ref();
    let file = File::open( path)?;
    let records = read_records( BufReader::new( file))?;
    debug!("read {} records from {:?}", records.len(), path);
    Ok(records)
}

/// write one line per batch record: `az el` or `az el range`. Failed records are written as
/// comment lines so that output lines still correspond to input records
pub fn write_results<W> (writer: &mut W, report: &BatchReport, write_range: bool)->Result<()> where W: Write {
    for (i,res) in report.results.iter().enumerate() {
        match res {
            Ok(aer) => {
                if write_range {
                    writeln!( writer, "{} {} {}", aer.azimuth, aer.elevation, aer.range)?;
                } else {
                    writeln!( writer, "{} {}", aer.azimuth, aer.elevation)?;
                }
            }
            Err(e) => writeln!( writer, "# record {}: {}", i+1, e)?
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results_to_file (path: impl AsRef<Path>, report: &BatchReport, write_range: bool)->Result<()> {
    let path = path.as_ref();
    let mut file: File = create_file_in_writable_dir( path)?;
    write_results( &mut file, report, write_range)?;
    info!("wrote {} results to {:?}", report.len(), path);
    Ok(())
}
