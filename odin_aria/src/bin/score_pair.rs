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
#![allow(unused)]

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use odin_aria::{
    info, analyze_pair, load_config,
    AriaConfig, Track, TrackPair, TimeStepping, ScoredInstant, KeyMoments,
    analysis::DynamicsRecord,
    units::{parse_time_delta, nautical_miles},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "score the conflict risk between two aircraft tracks given as CSV files (time_ms,lat,lon,alt_ft,speed_kts,course_deg)")]
pub struct Args {
    /// optional RON config file, defaults are used if not set
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// use a fixed time step (e.g. "5s") instead of the dynamic one
    #[arg(short,long)]
    pub fixed_step: Option<String>,

    /// include per-sample dynamics within this lateral radius (NM)
    #[arg(short,long)]
    pub dynamics_radius: Option<f64>,

    pub track1: PathBuf,
    pub track2: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all="camelCase")]
struct Report {
    track1: String,
    track2: String,
    riskiest_moment: ScoredInstant,
    key_moments: KeyMoments,
    #[serde(skip_serializing_if="Option::is_none")]
    dynamics: Option<Vec<DynamicsRecord>>,
}

fn main()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config( path)?,
        None => AriaConfig::default()
    };
    if let Some(step) = &args.fixed_step {
        config.time_stepping = TimeStepping::Fixed( parse_time_delta( step)?);
    }

    let id1 = args.track1.display().to_string();
    let id2 = args.track2.display().to_string();
    let track1 = Track::from_csv_file( &id1, &args.track1)?;
    let track2 = Track::from_csv_file( &id2, &args.track2)?;
    info!("read {} and {} track states", track1.len(), track2.len());

    let pair = TrackPair::with_config( track1, track2, &config)?;
    let (analysis, key_moments) = analyze_pair( &pair, &config)?;

    let dynamics = match args.dynamics_radius {
        Some(r) => Some( analysis.truncate( nautical_miles(r))?.dynamics()),
        None => None
    };

    let report = Report {
        track1: id1,
        track2: id2,
        riskiest_moment: analysis.riskiest_moment(),
        key_moments,
        dynamics
    };
    println!("{}", serde_json::to_string_pretty( &report)?);

    Ok(())
}
