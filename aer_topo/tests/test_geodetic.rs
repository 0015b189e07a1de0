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

use rand::Rng;
use aer_common::angle::normalize_180;
use aer_topo::{
    ellipsoid::{wgs84, EllipsoidModel},
    errors::AerError,
    frames::EcefVector,
    geodetic::{ecef_to_geodetic, geodetic_to_ecef, GeodeticPosition},
};

fn pos (lat: f64, lon: f64, alt: f64)->GeodeticPosition {
    GeodeticPosition { latitude: lat, longitude: lon, altitude: alt }
}

#[test]
fn test_equator_and_pole () {
    let p = geodetic_to_ecef( &pos( 0.0, 0.0, 0.0), &EllipsoidModel::Wgs84).unwrap();
    assert!( (p.x() - wgs84::A).abs() < 1e-9);
    assert!( p.y().abs() < 1e-9 && p.z().abs() < 1e-9);

    let p = geodetic_to_ecef( &pos( 0.0, 90.0, 1.0), &EllipsoidModel::Wgs84).unwrap();
    assert!( (p.y() - (wgs84::A + 1.0)).abs() < 1e-9);

    // poles are valid and end up at the semi-minor axis
    let p = geodetic_to_ecef( &pos( 90.0, 0.0, 0.0), &EllipsoidModel::Wgs84).unwrap();
    println!("north pole: {p:?}");
    assert!( p.x().abs() < 1e-9 && p.y().abs() < 1e-9);
    assert!( (p.z() - wgs84::B).abs() < 1e-9);

    let p = geodetic_to_ecef( &pos( -90.0, 123.0, 2.0), &EllipsoidModel::Wgs84).unwrap();
    assert!( (p.z() + wgs84::B + 2.0).abs() < 1e-9);
}

#[test]
fn test_spherical_model () {
    let model = EllipsoidModel::spherical( 6378.137);
    assert_eq!( model.eccentricity_squared(), 0.0);

    // altitude is not dropped in spherical mode
    let p = geodetic_to_ecef( &pos( 0.0, 0.0, 1.0), &model).unwrap();
    assert!( (p.x() - 6379.137).abs() < 1e-9);

    let p = geodetic_to_ecef( &pos( 45.0, 0.0, 0.0), &model).unwrap();
    assert!( (p.norm() - 6378.137).abs() < 1e-9);
    assert!( (p.x() - p.z()).abs() < 1e-9);
}

#[test]
fn test_longitude_domains () {
    let a = geodetic_to_ecef( &pos( 30.0, -90.0, 0.0), &EllipsoidModel::Wgs84).unwrap();
    let b = geodetic_to_ecef( &pos( 30.0, 270.0, 0.0), &EllipsoidModel::Wgs84).unwrap();
    assert!( (a - b).norm() < 1e-9);

    // positions keep the longitude as given, the inverse returns it in (-180,180]
    assert_eq!( pos( 30.0, 270.0, 0.0).longitude, 270.0);
    let q = ecef_to_geodetic( &b, &EllipsoidModel::Wgs84).unwrap();
    assert!( (q.longitude + 90.0).abs() < 1e-9);

    let q = ecef_to_geodetic( &geodetic_to_ecef( &pos( 0.0, 180.0, 0.0), &EllipsoidModel::Wgs84).unwrap(), &EllipsoidModel::Wgs84).unwrap();
    assert!( q.longitude > -180.0 && q.longitude <= 180.0);
    assert!( (q.longitude.abs() - 180.0).abs() < 1e-9);
}

#[test]
fn test_invalid_input () {
    let model = EllipsoidModel::Wgs84;

    for p in [pos( 90.5, 0.0, 0.0), pos( -91.0, 0.0, 0.0), pos( f64::NAN, 0.0, 0.0), pos( 0.0, f64::INFINITY, 0.0),
              pos( 0.0, 0.0, f64::NAN), pos( 0.0, 360.0, 0.0), pos( 0.0, -180.5, 0.0)] {
        match geodetic_to_ecef( &p, &model) {
            Err(AerError::InvalidGeodeticInput(msg)) => println!("rejected {p:?}: {msg}"),
            other => panic!("expected InvalidGeodeticInput for {p:?}, got {other:?}")
        }
    }

    assert!( GeodeticPosition::new( 46.0, 14.5, 0.3).is_ok());
    assert!( GeodeticPosition::new( 100.0, 14.5, 0.3).is_err());

    let res = geodetic_to_ecef( &pos( 0.0, 0.0, 0.0), &EllipsoidModel::Spherical(-1.0));
    assert!( matches!( res, Err(AerError::InvalidGeodeticInput(_))));
}

#[test]
fn test_earth_center () {
    let res = ecef_to_geodetic( &EcefVector::zero(), &EllipsoidModel::Wgs84);
    assert!( matches!( res, Err(AerError::DegenerateGeometry(_))));
}

#[test]
fn test_round_trip () {
    let mut rng = rand::rng();

    for model in [EllipsoidModel::Wgs84, EllipsoidModel::Wgs72, EllipsoidModel::default_sphere()] {
        for _ in 0..1000 {
            let p = pos( rng.random_range(-89.0..89.0), rng.random_range(-180.0..180.0), rng.random_range(0.0..40000.0));
            let ecef = geodetic_to_ecef( &p, &model).unwrap();
            let q = ecef_to_geodetic( &ecef, &model).unwrap();

            let d_lat = (q.latitude - p.latitude).abs();
            let d_lon = normalize_180( q.longitude - p.longitude).abs();
            let d_alt = (q.altitude - p.altitude).abs();

            assert!( d_lat < 1e-6 * p.latitude.abs().max(1.0), "lat {} -> {} ({model:?})", p.latitude, q.latitude);
            assert!( d_lon < 1e-6 * p.longitude.abs().max(1.0), "lon {} -> {} ({model:?})", p.longitude, q.longitude);
            assert!( d_alt < 1e-6 * p.altitude.max(1.0), "alt {} -> {} ({model:?})", p.altitude, q.altitude);
        }
    }
}

#[test]
fn test_round_trip_near_poles () {
    let model = EllipsoidModel::Wgs84;
    for lat in [89.999, 90.0, -90.0, -89.5] {
        let p = pos( lat, 10.0, 0.5);
        let q = ecef_to_geodetic( &geodetic_to_ecef( &p, &model).unwrap(), &model).unwrap();
        println!("{p} -> {q}");
        assert!( (q.latitude - lat).abs() < 1e-6);
        assert!( (q.altitude - 0.5).abs() < 1e-6);
    }
}
