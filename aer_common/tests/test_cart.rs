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

use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize,Serialize};
use aer_common::{cartesian3::Cartesian3, MinMaxAvg};

#[derive(Serialize,Deserialize,Debug,PartialEq)]
struct Sample {
    id: u32,
    pos: Cartesian3,
}

#[test]
fn test_vector3_conversion () {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let v = Vector3::new( rng.random_range(-5e4..5e4), rng.random_range(-5e4..5e4), rng.random_range(-5e4..5e4));
        let p = Cartesian3::from_vector3( &v);
        assert_eq!( (p.x, p.y, p.z), (v.x, v.y, v.z));
        assert_eq!( p.to_vector3(), v);
    }
}

#[test]
fn test_ron_format () {
    let s: Sample = ron::from_str( "(id: 42, pos: (x: 6378.137, y: 0.0, z: -1.5))").unwrap();
    assert_eq!( s.pos, Cartesian3::new( 6378.137, 0.0, -1.5));

    let text = ron::to_string( &s).unwrap();
    println!("{text}");
    assert!( text.contains("6378.137"));

    // all three components are required
    let res: Result<Sample,_> = ron::from_str( "(id: 1, pos: (x: 1.0, y: 2.0))");
    assert!( res.is_err());
}

#[test]
fn test_min_max_avg () {
    let mut stats = MinMaxAvg::new();
    assert!( stats.avg.is_nan());

    for x in [2.0, 4.0, 9.0] { stats.add(x) }
    assert_eq!( stats.n, 3);
    assert_eq!( stats.min, 2.0);
    assert_eq!( stats.max, 9.0);
    assert!( (stats.avg - 5.0).abs() < 1e-12);
}
