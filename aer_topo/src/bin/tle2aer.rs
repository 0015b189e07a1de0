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
use chrono::{DateTime,Utc};
use tracing_subscriber::EnvFilter;
use aer_common::{check_cli, datetime::utc_now, define_cli};
use aer_topo::{
    load_config, ObserverConfig,
    elements::{CelestrakSource, ElementSetConfig, ElementSetSource, FileElementSetSource},
    frames::eci_to_ecef,
    propagator::{Propagator, Sgp4Propagator},
    sidereal::{compute_gst, local_sidereal_time, parse_instant},
    topocentric::{ecef_to_aer, ObserverFrame},
};

define_cli! { ARGS [about="azimuth/elevation/range of a satellite for a given observer and time"] =
    observer: String [help="filename of observer config", long, default_value="observer.ron"],
    elements: String [help="filename of element set source config", long, default_value="celestrak.ron"],
    satellite: Option<String> [help="satellite name or catalog number (overrides config)", short, long],
    date: Option<String> [help="UTC datetime spec (if not specified use current datetime)", short, long],
    tle_file: Option<String> [help="read element sets from local catalog file instead of retrieving them", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();
    aer_build::set_bin_context!();
    check_cli!(ARGS);

    let t: DateTime<Utc> = match &ARGS.date {
        Some(spec) => parse_instant( spec)?,
        None => utc_now()
    };

    let observer: ObserverConfig = load_config( &ARGS.observer)?;
    let frame = ObserverFrame::new( &observer.geodetic_position()?, &observer.ellipsoid)?;

    let es_config: ElementSetConfig = if ARGS.tle_file.is_some() && ARGS.satellite.is_some() {
        ElementSetConfig::default() // no need to load anything
    } else {
        load_config( &ARGS.elements)?
    };
    let satellite = ARGS.satellite.clone().unwrap_or_else( || es_config.satellite.clone());
    if satellite.is_empty() {
        return Err( anyhow!("no satellite specified (use --satellite or set it in {})", ARGS.elements))
    }

    let es = if let Some(path) = &ARGS.tle_file {
        FileElementSetSource::new( path).get_element_set( &satellite).await?
    } else {
        CelestrakSource::new( es_config).get_element_set( &satellite).await?
    };
    println!("{}\n{}\n{}", es.name, es.line1, es.line2);

    let eci = Sgp4Propagator.propagate( &es, &t)?;
    let gst = compute_gst( &t);
    let ecef = eci_to_ecef( &eci, gst);
    let aer = ecef_to_aer( &ecef, &frame)?;

    println!("time:   {}", t.to_rfc3339());
    println!("GST:    {:.6}°  (LST {:.6}°)", gst.degrees(), local_sidereal_time( gst, frame.geodetic().longitude).degrees());
    println!("ECI:    {:?}", eci);
    println!("ECEF:   {:?}", ecef);
    println!("AER:    {}", aer);
    if !aer.is_above_horizon() { println!("        (below horizon)") }

    Ok(())
}
