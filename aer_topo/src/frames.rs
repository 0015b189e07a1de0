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

//! reference frame tagged vectors and rotations.
//!
//! The frame is a zero sized type parameter so that vectors of different frames cannot be
//! combined, and rotations can only be applied to vectors of their source frame. The only way
//! to get from one frame into another is through a [`Rotation`] (or a translation + rotation such as
//! the topocentric transform)

use std::{fmt, marker::PhantomData, ops};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use aer_common::{angle::Angle360, cartesian3::Cartesian3, cos, sin};

pub trait Frame: Copy + Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    const NAME: &'static str;
}

/// earth centered inertial
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Eci;
impl Frame for Eci { const NAME: &'static str = "ECI"; }

/// earth centered earth fixed
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Ecef;
impl Frame for Ecef { const NAME: &'static str = "ECEF"; }

/// observer centered south-east-zenith
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Sez;
impl Frame for Sez { const NAME: &'static str = "SEZ"; }

/* #region FrameVector ***************************************************************************************/

#[derive(Clone,Copy,PartialEq)]
pub struct FrameVector<F> where F: Frame {
    v: Vector3<f64>,
    frame: PhantomData<F>,
}

pub type EciVector = FrameVector<Eci>;
pub type EcefVector = FrameVector<Ecef>;
pub type SezVector = FrameVector<Sez>;

impl<F> FrameVector<F> where F: Frame {
    pub fn new (x: f64, y: f64, z: f64)->Self {
        FrameVector { v: Vector3::new( x, y, z), frame: PhantomData }
    }

    pub fn zero()->Self { Self::new( 0.0, 0.0, 0.0) }

    pub fn from_vector3 (v: Vector3<f64>)->Self {
        FrameVector { v, frame: PhantomData }
    }

    #[inline] pub fn x (&self)->f64 { self.v.x }
    #[inline] pub fn y (&self)->f64 { self.v.y }
    #[inline] pub fn z (&self)->f64 { self.v.z }

    #[inline] pub fn as_vector3 (&self)->&Vector3<f64> { &self.v }

    pub fn norm (&self)->f64 { self.v.norm() }

    pub fn dot (&self, other: &Self)->f64 { self.v.dot( &other.v) }

    pub fn is_finite (&self)->bool {
        self.v.x.is_finite() && self.v.y.is_finite() && self.v.z.is_finite()
    }

    pub fn frame_name (&self)->&'static str { F::NAME }

    pub fn to_cartesian (&self)->Cartesian3 { Cartesian3::from_vector3( &self.v) }
}

impl<F> From<Cartesian3> for FrameVector<F> where F: Frame {
    fn from (p: Cartesian3)->Self { FrameVector::from_vector3( p.to_vector3()) }
}

impl<F> From<[f64;3]> for FrameVector<F> where F: Frame {
    fn from (a: [f64;3])->Self { FrameVector::new( a[0], a[1], a[2]) }
}

impl<F> fmt::Debug for FrameVector<F> where F: Frame {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}({}, {}, {})", F::NAME, self.v.x, self.v.y, self.v.z)
    }
}

impl<F> fmt::Display for FrameVector<F> where F: Frame {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} {} {}", self.v.x, self.v.y, self.v.z)
    }
}

// only vectors of the same frame can be added or subtracted
impl<F> ops::Sub for FrameVector<F> where F: Frame {
    type Output = Self;
    fn sub (self, rhs: Self)->Self { FrameVector::from_vector3( self.v - rhs.v) }
}
impl<F> ops::Sub for &FrameVector<F> where F: Frame {
    type Output = FrameVector<F>;
    fn sub (self, rhs: Self)->FrameVector<F> { FrameVector::from_vector3( self.v - rhs.v) }
}
impl<F> ops::Add for FrameVector<F> where F: Frame {
    type Output = Self;
    fn add (self, rhs: Self)->Self { FrameVector::from_vector3( self.v + rhs.v) }
}
impl<F> ops::Mul<f64> for FrameVector<F> where F: Frame {
    type Output = Self;
    fn mul (self, rhs: f64)->Self { FrameVector::from_vector3( self.v * rhs) }
}

impl<F> Serialize for FrameVector<F> where F: Frame {
    fn serialize<S>(&self, serializer: S)->Result<S::Ok, S::Error> where S: Serializer {
        self.to_cartesian().serialize( serializer)
    }
}

impl<'de,F> Deserialize<'de> for FrameVector<F> where F: Frame {
    fn deserialize<D>(deserializer: D)->Result<Self, D::Error> where D: Deserializer<'de> {
        Cartesian3::deserialize( deserializer).map( FrameVector::from)
    }
}

/* #endregion FrameVector */

/* #region Rotation ******************************************************************************************/

/// a frame-to-frame rotation matrix. Rotations are orthonormal, hence the inverse is the transpose
#[derive(Clone,Copy,PartialEq)]
pub struct Rotation<Src,Dst> where Src: Frame, Dst: Frame {
    m: Matrix3<f64>,
    frames: PhantomData<(Src,Dst)>,
}

impl<Src,Dst> Rotation<Src,Dst> where Src: Frame, Dst: Frame {
    /// this does not check orthonormality - use [`Rotation::is_orthonormal`] if the source is not trusted
    pub fn from_matrix (m: Matrix3<f64>)->Self {
        Rotation { m, frames: PhantomData }
    }

    pub fn from_rows (r0: [f64;3], r1: [f64;3], r2: [f64;3])->Self {
        Self::from_matrix( Matrix3::new(
            r0[0], r0[1], r0[2],
            r1[0], r1[1], r1[2],
            r2[0], r2[1], r2[2]
        ))
    }

    #[inline] pub fn matrix (&self)->&Matrix3<f64> { &self.m }

    pub fn transpose (&self)->Rotation<Dst,Src> {
        Rotation::from_matrix( self.m.transpose())
    }

    pub fn apply (&self, v: &FrameVector<Src>)->FrameVector<Dst> {
        FrameVector::from_vector3( self.m * v.v)
    }

    /// chain with a rotation that starts in our target frame
    pub fn then<Next> (&self, next: &Rotation<Dst,Next>)->Rotation<Src,Next> where Next: Frame {
        Rotation::from_matrix( next.m * self.m)
    }

    /// R·Rᵗ = I and det(R) = 1 within the given tolerance
    pub fn is_orthonormal (&self, tolerance: f64)->bool {
        let d = self.m * self.m.transpose() - Matrix3::identity();
        d.iter().all( |x| x.abs() <= tolerance) && (self.m.determinant() - 1.0).abs() <= tolerance
    }
}

impl<Src,Dst> fmt::Debug for Rotation<Src,Dst> where Src: Frame, Dst: Frame {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "Rotation<{},{}>{:?}", Src::NAME, Dst::NAME, self.m.as_slice())
    }
}

pub fn apply_rotation<Src,Dst> (r: &Rotation<Src,Dst>, v: &FrameVector<Src>)->FrameVector<Dst> where Src: Frame, Dst: Frame {
    r.apply( v)
}

/// rotation about the earth axis by the Greenwich sidereal time
pub fn eci_to_ecef_rotation (gst: Angle360)->Rotation<Eci,Ecef> {
    let g = gst.radians();
    Rotation::from_rows(
        [  cos(g), sin(g), 0.0 ],
        [ -sin(g), cos(g), 0.0 ],
        [     0.0,    0.0, 1.0 ]
    )
}

pub fn eci_to_ecef (eci: &EciVector, gst: Angle360)->EcefVector {
    eci_to_ecef_rotation( gst).apply( eci)
}

pub fn ecef_to_eci (ecef: &EcefVector, gst: Angle360)->EciVector {
    eci_to_ecef_rotation( gst).transpose().apply( ecef)
}

/// ECEF to south-east-zenith rotation for an observer at the given geodetic latitude and
/// longitude (degrees)
pub fn build_topocentric_rotation (latitude: f64, longitude: f64)->Rotation<Ecef,Sez> {
    let (sin_phi, cos_phi) = latitude.to_radians().sin_cos();
    let (sin_lam, cos_lam) = longitude.to_radians().sin_cos();

    Rotation::from_rows(
        [ sin_phi * cos_lam, sin_phi * sin_lam, -cos_phi ],
        [          -sin_lam,           cos_lam,      0.0 ],
        [ cos_phi * cos_lam, cos_phi * sin_lam,  sin_phi ]
    )
}

/* #endregion Rotation */
