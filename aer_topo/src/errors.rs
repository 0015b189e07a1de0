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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AerError>;

#[derive(Error,Debug)]
pub enum AerError {

   #[error("invalid geodetic input: {0}")]
   InvalidGeodeticInput( String ),

   #[error("degenerate geometry: {0}")]
   DegenerateGeometry( String ),

   #[error("malformed input record in line {line}: {reason}")]
   MalformedInputRecord { line: usize, reason: String },

   #[error("clock error: {0}")]
   ClockError( String ),

   #[error("config error {0}")]
   ConfigError( #[from] aer_build::AerBuildError),

   #[error("IO error {0}")]
   IOError( #[from] std::io::Error),

   #[error("http error {0}")]
   HttpError( #[from] reqwest::Error),

   #[error("element set error {0}")]
   ElementSetError( String ),

   #[error("propagation error {0}")]
   PropagationError( String ),
}

impl AerError {
    /// is this a per-record failure that leaves the rest of a batch unaffected
    pub fn is_record_error (&self)->bool {
        matches!( self,
            AerError::InvalidGeodeticInput(_) | AerError::DegenerateGeometry(_) | AerError::MalformedInputRecord{..}
        )
    }
}

macro_rules! geodetic_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        AerError::InvalidGeodeticInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use geodetic_error;

macro_rules! degenerate {
    ($fmt:literal $(, $arg:expr )* ) => {
        AerError::DegenerateGeometry( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use degenerate;

macro_rules! malformed {
    ($line:expr, $fmt:literal $(, $arg:expr )* ) => {
        AerError::MalformedInputRecord{ line: $line, reason: format!( $fmt $(, $arg)* ) }
    };
}
pub (crate) use malformed;

macro_rules! clock_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        AerError::ClockError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use clock_error;

macro_rules! element_set_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        AerError::ElementSetError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use element_set_error;

macro_rules! propagation_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        AerError::PropagationError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use propagation_error;
