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

use aer_build::load_config_path;
use aer_topo::{
    load_config, BatchConfig, ObserverConfig,
    elements::ElementSetConfig,
    ellipsoid::EllipsoidModel,
    errors::AerError,
};

#[test]
fn test_observer_config () {
    let config: ObserverConfig = load_config( "observer.ron").unwrap();
    println!("{config:?}");
    assert_eq!( config.ellipsoid, EllipsoidModel::Wgs84);

    let pos = config.geodetic_position().unwrap();
    assert!( (pos.latitude - 46.0556).abs() < 1e-12);
    assert!( (pos.altitude - 0.295).abs() < 1e-12); // meters in config, km in computation
}

#[test]
fn test_observer_config_variants () {
    let config: ObserverConfig = ron::from_str(
        "ObserverConfig( latitude: -33.9, longitude: 210.0, altitude: 10.0, ellipsoid: Spherical(6371.0))"
    ).unwrap();
    assert_eq!( config.ellipsoid, EllipsoidModel::Spherical(6371.0));
    assert!( (config.geodetic_position().unwrap().longitude + 150.0).abs() < 1e-12);

    // ellipsoid defaults to WGS84
    let config: ObserverConfig = ron::from_str( "ObserverConfig( latitude: 0.0, longitude: 0.0, altitude: 0.0)").unwrap();
    assert_eq!( config.ellipsoid, EllipsoidModel::Wgs84);

    // out of range latitudes are config errors
    let res: Result<ObserverConfig,_> = ron::from_str( "ObserverConfig( latitude: 91.0, longitude: 0.0, altitude: 0.0)");
    assert!( res.is_err());
}

#[test]
fn test_tool_configs () {
    let batch: BatchConfig = load_config_path( "configs/ecef2aer.ron").unwrap();
    assert!( !batch.input_file.is_empty() && !batch.output_file.is_empty());

    let es: ElementSetConfig = load_config( "celestrak.ron").unwrap();
    assert!( es.url.starts_with("https://"));
}

#[test]
fn test_missing_config () {
    let res: aer_build::Result<ObserverConfig> = load_config( "no_such_observer.ron");
    let err: AerError = res.unwrap_err().into();
    assert!( matches!( err, AerError::ConfigError(_)));
}
