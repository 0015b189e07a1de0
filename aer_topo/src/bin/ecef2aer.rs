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

use anyhow::{anyhow,Result};
use tracing_subscriber::EnvFilter;
use aer_common::{check_cli, define_cli};
use aer_topo::{
    load_config, BatchConfig, ObserverConfig,
    pipeline::batch_records,
    records::{read_records_from_file, write_results_to_file},
    topocentric::ObserverFrame,
};

define_cli! { ARGS [about="convert ECEF satellite position files into observer azimuth/elevation/range files"] =
    config: Option<String> [help="filename of batch config with input and output file", long],
    observer: String [help="filename of observer config", long, default_value="observer.ron"],
    input: Option<String> [help="position file to convert (overrides config)", short, long],
    output: Option<String> [help="result file (overrides config)", short, long],
    range: bool [help="also write ranges (km)", long]
}

fn main ()->Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();
    aer_build::set_bin_context!();
    check_cli!(ARGS);

    let batch_config: Option<BatchConfig> = match &ARGS.config {
        Some(filename) => Some( load_config( filename)?),
        None => None
    };

    let input = ARGS.input.clone()
        .or_else( || batch_config.as_ref().map( |c| c.input_file.clone()))
        .ok_or_else( || anyhow!("no input file (use --input or --config)"))?;
    let output = ARGS.output.clone()
        .or_else( || batch_config.as_ref().map( |c| c.output_file.clone()))
        .ok_or_else( || anyhow!("no output file (use --output or --config)"))?;
    let write_range = ARGS.range || batch_config.as_ref().map( |c| c.write_range).unwrap_or(false);

    let observer: ObserverConfig = load_config( &ARGS.observer)?;
    let frame = ObserverFrame::new( &observer.geodetic_position()?, &observer.ellipsoid)?;

    let records = read_records_from_file( &input)?;
    let report = batch_records( &frame, records);
    write_results_to_file( &output, &report, write_range)?;

    println!("converted {} records from {} into {}: {} ok, {} failed", report.len(), input, output, report.n_ok(), report.n_failed());
    if report.n_ok() > 0 {
        let (az,el,range) = report.stats();
        println!("  azimuth   [{:9.4} .. {:9.4}]°", az.min, az.max);
        println!("  elevation [{:9.4} .. {:9.4}]°", el.min, el.max);
        println!("  range     [{:9.3} .. {:9.3}] km", range.min, range.max);
    }

    Ok(())
}
