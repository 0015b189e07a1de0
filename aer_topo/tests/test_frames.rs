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
use aer_common::angle::Angle360;
use aer_topo::frames::{
    apply_rotation, build_topocentric_rotation, ecef_to_eci, eci_to_ecef, eci_to_ecef_rotation,
    EcefVector, EciVector, Frame, FrameVector, SezVector,
};

fn assert_close<F: Frame> (a: &FrameVector<F>, b: &FrameVector<F>, eps: f64) {
    assert!( (*a - *b).norm() < eps, "{a:?} != {b:?}");
}

#[test]
fn test_topocentric_orthonormal () {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let lat = rng.random_range(-90.0..=90.0);
        let lon = rng.random_range(-180.0..360.0);
        let r = build_topocentric_rotation( lat, lon);
        assert!( r.is_orthonormal( 1e-12), "not orthonormal for {lat},{lon}: {r:?}");
    }
}

#[test]
fn test_topocentric_axes () {
    // observer at lat 0, lon 0: up is ECEF x, east is ECEF y, north is ECEF z
    let r = build_topocentric_rotation( 0.0, 0.0);

    assert_close( &r.apply( &EcefVector::new( 1.0, 0.0, 0.0)), &SezVector::new( 0.0, 0.0, 1.0), 1e-12);
    assert_close( &r.apply( &EcefVector::new( 0.0, 1.0, 0.0)), &SezVector::new( 0.0, 1.0, 0.0), 1e-12);
    assert_close( &r.apply( &EcefVector::new( 0.0, 0.0, 1.0)), &SezVector::new( -1.0, 0.0, 0.0), 1e-12);

    // at the north pole zenith is ECEF z
    let r = build_topocentric_rotation( 90.0, 0.0);
    assert_close( &apply_rotation( &r, &EcefVector::new( 0.0, 0.0, 1.0)), &SezVector::new( 0.0, 0.0, 1.0), 1e-12);
}

#[test]
fn test_eci_ecef_rotation () {
    // a quarter turn moves the ECI x axis to ECEF -y
    let ecef = eci_to_ecef( &EciVector::new( 1.0, 0.0, 0.0), Angle360::from_degrees( 90.0));
    assert_close( &ecef, &EcefVector::new( 0.0, -1.0, 0.0), 1e-12);

    // the earth axis is not affected
    let ecef = eci_to_ecef( &EciVector::new( 0.0, 0.0, 7000.0), Angle360::from_degrees( 123.4));
    assert_close( &ecef, &EcefVector::new( 0.0, 0.0, 7000.0), 1e-9);

    let ecef = eci_to_ecef( &EciVector::new( 42164.0, 0.0, 0.0), Angle360::from_degrees( 0.0));
    assert_close( &ecef, &EcefVector::new( 42164.0, 0.0, 0.0), 1e-9);
}

#[test]
fn test_eci_round_trip () {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let gst = Angle360::from_degrees( rng.random_range(0.0..360.0));
        assert!( eci_to_ecef_rotation( gst).is_orthonormal( 1e-12));

        let eci = EciVector::new( rng.random_range(-5e4..5e4), rng.random_range(-5e4..5e4), rng.random_range(-5e4..5e4));
        let ecef = eci_to_ecef( &eci, gst);
        assert!( (ecef.norm() - eci.norm()).abs() < 1e-8);
        assert_close( &ecef_to_eci( &ecef, gst), &eci, 1e-8);
    }
}

#[test]
fn test_transpose_and_chain () {
    let r = build_topocentric_rotation( 46.05, 14.5);
    let v = EcefVector::new( 1.0, 2.0, 3.0);

    let back = r.transpose().apply( &r.apply( &v));
    assert_close( &back, &v, 1e-12);

    let gst = Angle360::from_degrees( 33.0);
    let chained = eci_to_ecef_rotation( gst).then( &r);
    let eci = EciVector::new( 7000.0, -300.0, 1200.0);
    assert_close( &chained.apply( &eci), &r.apply( &eci_to_ecef( &eci, gst)), 1e-9);
}
