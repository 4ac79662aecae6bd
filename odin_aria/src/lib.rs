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

//! odin_aria is an airborne conflict risk analysis engine. It takes two time-overlapping aircraft
//! tracks, samples their lateral and vertical separation over the overlap, scores each sample with
//! a closest-point-of-approach based risk predictor and then selects the riskiest moment plus a set
//! of snapshots for analytically important moments of the encounter.
//!
//! Data flows strictly upwards:
//! ```text
//!   Track (TrajectorySource)  ->  PointPair  ->  SeparationTimeSeries  ->  SeparationPrediction
//!                                                                             -> PairAnalysis -> KeyMoments
//! ```
//! Scores are inverted risk metrics - the lower the score, the more dangerous the moment.

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::warn!( $( $e ),* ) }
}

pub mod errors;
pub mod units;
pub mod angle;
pub mod geo;
pub mod time_window;
pub mod config;

pub mod track;
pub mod point_pair;
pub mod separation;
pub mod track_pair;
pub mod prediction;
pub mod analysis;
pub mod snapshot;

pub use errors::{OdinAriaError,Result};
pub use config::{AriaConfig,load_config};
pub use track::{AircraftState,Track,TrajectorySource,ClimbStatus};
pub use point_pair::{PointPair,ClosestPointOfApproach};
pub use separation::{SeparationSample,SeparationTimeSeries,TimeStepping,Axis};
pub use track_pair::TrackPair;
pub use prediction::{SeparationPrediction,CoefficientSet};
pub use analysis::{PairAnalysis,ScoredInstant,cherry_pick_score};
pub use snapshot::{Snapshot,KeyMoments,is_level_off_event};

/// convenience function for the common use case: run the whole analysis and derive the key moments
pub fn analyze_pair<S: TrajectorySource> (pair: &TrackPair<S>, config: &AriaConfig)->Result<(PairAnalysis,KeyMoments)> {
    let analysis = PairAnalysis::new( pair, config)?;
    let key_moments = KeyMoments::extract( pair, &analysis, config)?;
    Ok( (analysis, key_moments) )
}
