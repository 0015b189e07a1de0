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

//! observer-centric look angles for satellites.
//!
//! Satellite positions are converted between earth centered inertial (ECI), earth centered earth
//! fixed (ECEF) and observer centered south-east-zenith (SEZ) frames, and finally into azimuth,
//! elevation and range. All lengths are in kilometers, all angles in degrees

use serde::{Deserialize,Serialize};
use uom::si::f64::Length;
use aer_build::define_load_config;
use aer_common::{angle::{Latitude,Longitude}, uom::{as_kilometers, de_length_from_meters, ser_length_as_meters}};

pub mod errors;
pub mod ellipsoid;
pub mod geodetic;
pub mod sidereal;
pub mod frames;
pub mod topocentric;
pub mod pipeline;
pub mod records;
pub mod elements;
pub mod propagator;

use errors::Result;
use ellipsoid::EllipsoidModel;
use geodetic::GeodeticPosition;

define_load_config!{}

/// observer location as stored in config files (altitude in meters)
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ObserverConfig {
    pub latitude: Latitude,
    pub longitude: Longitude,

    #[serde(serialize_with="ser_length_as_meters", deserialize_with="de_length_from_meters")]
    pub altitude: Length,

    #[serde(default)]
    pub ellipsoid: EllipsoidModel,
}

impl ObserverConfig {
    pub fn geodetic_position (&self)->Result<GeodeticPosition> {
        GeodeticPosition::new( self.latitude.degrees(), self.longitude.degrees(), as_kilometers( &self.altitude))
    }
}

/// configuration for batch position file conversion
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct BatchConfig {
    pub input_file: String,
    pub output_file: String,

    #[serde(default)]
    pub write_range: bool,
}
