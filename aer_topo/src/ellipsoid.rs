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

use serde::{Deserialize,Serialize};

/// reference ellipsoid constants. All lengths are in kilometers
pub mod wgs84 {
    pub const A: f64 = 6378.137;              // semi-major axis
    pub const F: f64 = 1.0 / 298.257223563;   // flattening
    pub const B: f64 = A * (1.0 - F);         // semi-minor axis
    pub const E2: f64 = 2.0*F - F*F;          // first eccentricity squared
}

/// the constants of the legacy position file conversion (WGS72 values)
pub mod wgs72 {
    pub const A: f64 = 6378.135;
    pub const F: f64 = 1.0 / 298.26;
}

/// radius used for the spherical earth model if none is given
pub const DEFAULT_SPHERE_RADIUS: f64 = wgs84::A;

/// the earth model used to turn geodetic observer positions into ECEF vectors.
/// In RON configs this is given as `Wgs84`, `Wgs72` or `Spherical(<radius in km>)`
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum EllipsoidModel {
    Wgs84,
    Wgs72,
    Spherical(f64),
}

impl EllipsoidModel {
    pub fn wgs84()->Self { EllipsoidModel::Wgs84 }

    pub fn spherical (radius: f64)->Self { EllipsoidModel::Spherical(radius) }

    pub fn default_sphere()->Self { EllipsoidModel::Spherical(DEFAULT_SPHERE_RADIUS) }

    /// semi-major axis (or sphere radius) in km
    #[inline]
    pub fn semi_major_axis (&self)->f64 {
        match self {
            EllipsoidModel::Wgs84 => wgs84::A,
            EllipsoidModel::Wgs72 => wgs72::A,
            EllipsoidModel::Spherical(r) => *r,
        }
    }

    #[inline]
    pub fn flattening (&self)->f64 {
        match self {
            EllipsoidModel::Wgs84 => wgs84::F,
            EllipsoidModel::Wgs72 => wgs72::F,
            EllipsoidModel::Spherical(_) => 0.0,
        }
    }

    #[inline]
    pub fn semi_minor_axis (&self)->f64 {
        self.semi_major_axis() * (1.0 - self.flattening())
    }

    /// first eccentricity squared (e² = 2f - f²), zero for spheres
    #[inline]
    pub fn eccentricity_squared (&self)->f64 {
        let f = self.flattening();
        2.0*f - f*f
    }

    /// second eccentricity squared (e'² = (a² - b²)/b²)
    pub fn second_eccentricity_squared (&self)->f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// prime vertical radius of curvature N at the given geodetic latitude (radians)
    #[inline]
    pub fn prime_vertical_radius (&self, lat_rad: f64)->f64 {
        let sin_lat = lat_rad.sin();
        self.semi_major_axis() / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    pub fn is_spherical (&self)->bool {
        matches!( self, EllipsoidModel::Spherical(_))
    }

    /// can this model be used for conversions
    pub fn is_valid (&self)->bool {
        let a = self.semi_major_axis();
        a.is_finite() && a > 0.0
    }
}

impl Default for EllipsoidModel {
    fn default()->Self { EllipsoidModel::Wgs84 }
}
