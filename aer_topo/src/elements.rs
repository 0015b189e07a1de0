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

//! obtaining two line element sets from text catalogs (CelesTrak format: name line followed by two
//! element lines)

use std::{fs::File, io::Write, path::{Path,PathBuf}};
use lazy_static::lazy_static;
use serde::{Serialize,Deserialize};
use reqwest::Client;
use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info};
use aer_common::fs::filepath_contents_as_string;
use crate::errors::{AerError, Result, element_set_error};

pub const DEFAULT_CATALOG_URL: &str = "https://celestrak.org/NORAD/elements/geo.txt";

lazy_static! {
    /// regex to recognize element set lines and extract the line number and satellite catalog number
    pub static ref ELEMENT_LINE_RE: Regex = Regex::new( r"^([12]) ([0-9A-Z ]{4}[0-9])").unwrap();
}

/// the raw lines of a satellite element set
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ElementSet {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl ElementSet {
    /// the catalog number as given in line 1
    pub fn catalog_number (&self)->Option<&str> {
        ELEMENT_LINE_RE.captures( &self.line1).and_then( |cap| cap.get(2)).map( |m| m.as_str().trim())
    }
}

/// configuration for catalog based element set retrieval
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ElementSetConfig {
    pub url: String,
    /// name (or name fragment / catalog number) of the default satellite
    pub satellite: String,
}

impl Default for ElementSetConfig {
    fn default()->Self {
        ElementSetConfig { url: DEFAULT_CATALOG_URL.to_string(), satellite: String::new() }
    }
}

/// a trait to obtain the current element set for a satellite from external sources
#[async_trait]
pub trait ElementSetSource {
    /// get the element set for the provided satellite name, name fragment or catalog number.
    /// If none can be obtained return an error
    async fn get_element_set (&mut self, satellite: &str)->Result<ElementSet>;
}

/* #region CelesTrak ****************************************************************************************/

/// live element set source that retrieves text catalogs via http. The catalog is fetched once and
/// then reused for subsequent lookups until [`CelestrakSource::refresh`] is called
pub struct CelestrakSource {
    config: ElementSetConfig,
    client: Client,
    catalog: Option<String>,
}

impl CelestrakSource {
    pub fn new (config: ElementSetConfig)->Self {
        CelestrakSource { config, client: Client::new(), catalog: None }
    }

    pub fn url (&self)->&str { self.config.url.as_str() }

    pub fn refresh (&mut self) { self.catalog = None }

    async fn get_catalog (&mut self)->Result<&str> {
        if self.catalog.is_none() {
            let response = self.client
                .get( self.config.url.as_str())
                .send()
                .await.map_err(|e| element_set_error!("catalog request to {} failed: {e}", self.config.url))?;

            if response.status().is_success() {
                let text = response.text().await?;
                info!("retrieved element set catalog from {} ({} bytes)", self.config.url, text.len());
                self.catalog = Some(text);
            } else {
                return Err( element_set_error!("error retrieving catalog {}: {}", self.config.url, response.status()))
            }
        }

        self.catalog.as_deref().ok_or( element_set_error!("no catalog"))
    }
}

#[async_trait]
impl ElementSetSource for CelestrakSource {
    async fn get_element_set (&mut self, satellite: &str)->Result<ElementSet> {
        let catalog = self.get_catalog().await?;
        parse_element_set( catalog, satellite)
    }
}

/* #endregion CelesTrak */

/// element set source for local catalog or element set files
pub struct FileElementSetSource {
    path: PathBuf,
}

impl FileElementSetSource {
    pub fn new (path: impl AsRef<Path>)->Self {
        FileElementSetSource { path: path.as_ref().to_path_buf() }
    }
}

#[async_trait]
impl ElementSetSource for FileElementSetSource {
    async fn get_element_set (&mut self, satellite: &str)->Result<ElementSet> {
        let text = filepath_contents_as_string( &self.path)?;
        debug!("read element set catalog {:?}", self.path);
        parse_element_set( &text, satellite)
    }
}

/* #region general helpers *******************************************************************************/

/// find the element set of a satellite in a text catalog. The satellite is matched against name
/// lines (substring match) or catalog numbers. If there are several matches the last one is
/// returned
pub fn parse_element_set (text: &str, satellite: &str)->Result<ElementSet> {
    let satellite = satellite.trim();
    if satellite.is_empty() {
        return Err( element_set_error!("no satellite specified"))
    }

    let lines: Vec<&str> = text.lines().map( |l| l.trim_end()).collect();
    let mut found: Option<ElementSet> = None;
    let mut name_matched = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !line.is_empty() && !is_element_line( line, '1') && !is_element_line( line, '2') {
            // a name line
            if line.contains( satellite) {
                name_matched = true;
                if i+2 < lines.len() && is_element_line( lines[i+1], '1') && is_element_line( lines[i+2], '2') {
                    found = Some( ElementSet { name: line.trim().to_string(), line1: lines[i+1].to_string(), line2: lines[i+2].to_string() });
                    i += 3;
                    continue;
                }
            }

        } else if is_element_line( line, '1') && i+1 < lines.len() && is_element_line( lines[i+1], '2') {
            if catalog_number( line) == Some(satellite) {
                let name = if i > 0 { lines[i-1].trim() } else { "" };
                found = Some( ElementSet { name: name.to_string(), line1: line.to_string(), line2: lines[i+1].to_string() });
            }
            i += 2;
            continue;
        }
        i += 1;
    }

    match found {
        Some(es) => Ok(es),
        None if name_matched => Err( element_set_error!("truncated element set for satellite '{}'", satellite)),
        None => Err( element_set_error!("no element set for satellite '{}'", satellite))
    }
}

fn is_element_line (line: &str, line_no: char)->bool {
    ELEMENT_LINE_RE.captures( line)
        .and_then( |cap| cap.get(1))
        .map( |m| m.as_str().starts_with( line_no))
        .unwrap_or(false)
}

fn catalog_number (line: &str)->Option<&str> {
    ELEMENT_LINE_RE.captures( line).and_then( |cap| cap.get(2)).map( |m| m.as_str().trim())
}

/// store an element set as a 3 line file that can be read by [`FileElementSetSource`]
pub fn save_element_set (path: impl AsRef<Path>, es: &ElementSet)->Result<()> {
    let mut file = File::create( path.as_ref())?;
    writeln!( file, "{}", es.name)?;
    writeln!( file, "{}", es.line1)?;
    writeln!( file, "{}", es.line2)?;
    Ok(())
}

/* #endregion general helpers */
