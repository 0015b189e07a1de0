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

use std::io::Cursor;
use aer_topo::{
    ellipsoid::EllipsoidModel,
    errors::AerError,
    frames::EcefVector,
    geodetic::GeodeticPosition,
    pipeline::{batch_records, BatchReport},
    records::{parse_record, read_records, read_records_from_file, write_results},
    topocentric::{Aer, ObserverFrame},
};

/* #region test-data *************************************************************/

const INPUT: &'static str = r#"# epoch x y z vx vy vz
2025-03-17T00:00:00.000 -30487.146 29135.270 -14.611 -2.124 -2.223 0.001
2025-03-17T00:01:00.000 -30614.322 29001.442 -14.536 -2.115 -2.237 0.001

2025-03-17T00:02:00.000 -30740.907 nan -14.460 -2.106 -2.250 0.001
2025-03-17T00:03:00.000 -30866.894 28731.302
   1000.0   2000.0   3000.0
"#;

/* #endregion test-data */

#[test]
fn test_parse_record () {
    let rec = parse_record( 1, "2025-03-17T00:00:00 1.5 -2.5 3.0 0.1 0.2 0.3").unwrap().unwrap();
    assert_eq!( rec, EcefVector::new( 1.5, -2.5, 3.0));

    let rec = parse_record( 2, "  1.5\t-2.5   3e3 ").unwrap().unwrap();
    assert_eq!( rec, EcefVector::new( 1.5, -2.5, 3000.0));

    assert!( parse_record( 3, "").is_none());
    assert!( parse_record( 4, "   ").is_none());
    assert!( parse_record( 5, "# comment").is_none());

    match parse_record( 6, "1.0 2.0").unwrap() {
        Err(AerError::MalformedInputRecord{ line, reason }) => {
            println!("line {line}: {reason}");
            assert_eq!( line, 6);
        }
        other => panic!("expected malformed record, got {other:?}")
    }
    assert!( matches!( parse_record( 7, "epoch 1.0 x 3.0 0 0 0"), Some(Err(AerError::MalformedInputRecord{ line: 7, .. }))));
    assert!( matches!( parse_record( 8, "inf 1.0 2.0"), Some(Err(AerError::MalformedInputRecord{ line: 8, .. }))));
}

#[test]
fn test_read_records () {
    let records = read_records( Cursor::new( INPUT)).unwrap();
    assert_eq!( records.len(), 5);

    assert_eq!( records[0].as_ref().unwrap(), &EcefVector::new( -30487.146, 29135.270, -14.611));
    assert!( records[1].is_ok());
    assert!( matches!( records[2], Err(AerError::MalformedInputRecord{ line: 5, .. })));
    assert!( matches!( records[3], Err(AerError::MalformedInputRecord{ line: 6, .. })));
    assert_eq!( records[4].as_ref().unwrap(), &EcefVector::new( 1000.0, 2000.0, 3000.0));
}

#[test]
fn test_read_missing_file () {
    let res = read_records_from_file( "no/such/positions.txt");
    assert!( matches!( res, Err(AerError::IOError(_))));
}

#[test]
fn test_read_empty_file () {
    let path = std::env::temp_dir().join( format!("aer_topo_empty_{}.txt", std::process::id()));
    std::fs::write( &path, "").unwrap();

    let records = read_records_from_file( &path).unwrap();
    assert!( records.is_empty());

    // a file without records is a batch without results, not a failure
    let frame = ObserverFrame::new( &GeodeticPosition::new( 46.0556, 14.5083, 0.295).unwrap(), &EllipsoidModel::Wgs84).unwrap();
    let report = batch_records( &frame, records);
    assert!( report.is_empty());
    assert_eq!( report.n_failed(), 0);

    let _ = std::fs::remove_file( &path);
}

#[test]
fn test_write_results () {
    let report = BatchReport {
        results: vec![
            Ok( Aer { azimuth: 180.5, elevation: 36.25, range: 37000.0 }),
            Err( AerError::DegenerateGeometry( "target coincides with observer".to_string())),
            Ok( Aer { azimuth: 0.0, elevation: -1.5, range: 12.0 }),
        ]
    };

    let mut buf: Vec<u8> = Vec::new();
    write_results( &mut buf, &report, false).unwrap();
    let text = String::from_utf8( buf).unwrap();
    assert_eq!( text, "180.5 36.25\n# record 2: degenerate geometry: target coincides with observer\n0 -1.5\n");

    let mut buf: Vec<u8> = Vec::new();
    write_results( &mut buf, &report, true).unwrap();
    let text = String::from_utf8( buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!( lines.len(), 3);
    assert_eq!( lines[0], "180.5 36.25 37000");
    assert_eq!( lines[2], "0 -1.5 12");
}
