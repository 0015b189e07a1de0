/*
 * Copyright (c) 2024, United States Government, as represented by the
 * Administrator of the National Aeronautics and Space Administration.
 * All rights reserved.
 *
 * The ODIN - Open Data Integration Framework is licensed under the
 * Apache License, Version 2.0 (the "License"); you may not use this file
 * except in compliance with the License. You may obtain a copy of the
 * License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::{env,path::{Path,PathBuf}};
use crate::*;

pub const CONFIGS: &'static str = "configs";

/// locate a config file for the given crate and return its PathBuf.
/// Lookup order is
///
/// 1. `filename` itself if it is an existing file path
/// 2. `$AER_HOME/configs/..`
/// 3. `<workspace-parent>/configs/..`
/// 4. `$HOME/.aer/configs/..`
/// 5. `<workspace>/<crate>/configs/..`
///
/// for each external root a bin specific `configs/<bin-crate>/<bin-name>/<crate>/<filename>` takes
/// precedence over the crate global `configs/<crate>/<filename>`
pub fn find_config_file (ctx: &Option<&BinContext>, resource_crate: &str, filename: &str) -> Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() { return Some(path.to_path_buf()) }

    if let Some(mut path) = get_env_aer_home() {
        if find_external_config( &mut path, ctx, resource_crate, filename) { return Some(path) }
    }

    // the first dir outside the source repo
    if let Some(mut path) = get_workspace_parent() {
        if find_external_config( &mut path, ctx, resource_crate, filename) { return Some(path) }
    }

    if let Some(mut path) = default_aer_home() {
        if find_external_config( &mut path, ctx, resource_crate, filename) { return Some(path) }
    }

    if let Some(mut path) = get_workspace_dir() {
        if path_cond!( is_file, &mut path, resource_crate, CONFIGS, filename) { return Some(path) }
    }

    None
}

fn find_external_config (path: &mut PathBuf, bin_ctx: &Option<&BinContext>, resource_crate: &str, filename: &str)->bool {
    if let Some(ctx) = bin_ctx {
        let bin_crate = ctx.bin_crate.as_str();
        let bin_name = ctx.bin_name.as_str();
        if path_cond!( is_file, path, CONFIGS, bin_crate, bin_name, resource_crate, filename) { return true }
    }

    path_cond!( is_file, path, CONFIGS, resource_crate, filename)
}

/// this is the main macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            /// load config using aer_build - based lookup mechanism
            pub fn load_config<C> (filename: &str) -> aer_build::Result<C> where C: for <'a> serde::Deserialize<'a> {
                let bin_ctx = aer_build::BIN_CONTEXT.get();
                let resource_crate = env!("CARGO_PKG_NAME");

                if let Some(path) = aer_build::find_config_file( &bin_ctx, resource_crate, filename) {
                    return aer_build::load_config_path( &path)
                }

                Err( aer_build::AerBuildError::ResourceNotFoundError(filename.to_string()) )
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}
