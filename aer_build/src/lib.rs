/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

//! runtime resource lookup for the aer crates. At this point this only covers RON configs,
//! which are looked up in external (per-installation) directories before falling back to the
//! `configs/` dir of the defining crate within the workspace

use std::{path::Path, sync::OnceLock};

mod utils;
pub use utils::*;

mod configs;
pub use configs::*;

mod errors;
pub use errors::*;

/* #region bin globals *******************************************************************/

#[derive(Debug)]
pub struct BinContext {
    pub bin_name: String,
    pub bin_crate: String,
    pub proc_id: Option<u32>,
}

impl BinContext {
    /// note this is a no-op if the context was already set
    pub fn set (bin_name: &str, bin_crate: &str, proc_id: Option<u32>) {
        let _ = BIN_CONTEXT.set( Self{ bin_name: bin_name.to_string(), bin_crate: bin_crate.to_string(), proc_id });
    }
}

pub static BIN_CONTEXT: OnceLock<BinContext> = OnceLock::new();

/// this has to be called (once) from the bin source
#[macro_export]
macro_rules! set_bin_context {
    () => {
        {
            // env! looks up the value at compile time
            aer_build::BinContext::set( env!("CARGO_BIN_NAME"), env!("CARGO_PKG_NAME"), Some(std::process::id()));
        }
    }
}

/* #endregion bin globals */

/// this is mostly for tests and tools that get explicit config paths
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> serde::Deserialize<'a>, P: AsRef<Path> {
    let data = file_contents_as_bytes(path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
