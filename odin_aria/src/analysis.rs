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

use std::{cmp::Ordering, fmt};
use chrono::{DateTime,Utc,TimeDelta};
use uom::si::f64::Length;
use serde::Serialize;

use crate::{
    debug,
    config::AriaConfig,
    time_window::TimeWindow,
    track::TrajectorySource,
    track_pair::TrackPair,
    prediction::SeparationPrediction,
    units::{self, in_nautical_miles},
    errors::{Result,out_of_window,invalid_series,arg_error}
};

/* #region ScoredInstant *************************************************************/

/// a (smoothed) score at a point in time. Ordered by score first and time second, so the minimum
/// of a scored series is its riskiest moment
#[derive(Debug,Clone,Copy,Serialize)]
pub struct ScoredInstant {
    pub time: DateTime<Utc>,
    pub score: f64,
}

impl ScoredInstant {
    pub fn new (time: DateTime<Utc>, score: f64)->Self { ScoredInstant{time,score} }
}

impl Ord for ScoredInstant {
    fn cmp (&self, other: &Self)->Ordering {
        self.score.total_cmp( &other.score).then_with( || self.time.cmp( &other.time))
    }
}

impl PartialOrd for ScoredInstant {
    fn partial_cmp (&self, other: &Self)->Option<Ordering> { Some( self.cmp(other)) }
}

impl PartialEq for ScoredInstant {
    fn eq (&self, other: &Self)->bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for ScoredInstant {}

impl fmt::Display for ScoredInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} @ {}", self.score, self.time.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

/* #endregion ScoredInstant */

/// the trailing 4-term moving sum `s[i] + s[i-1] + s[i-2] + s[i-3]`. Indices before the series
/// start reuse index 0, i.e. the first three values are under-smoothed
pub fn four_term_moving_sum (scores: &[f64])->Vec<f64> {
    (0..scores.len()).map( |i| {
        scores[i] + scores[i.saturating_sub(1)] + scores[i.saturating_sub(2)] + scores[i.saturating_sub(3)]
    }).collect()
}

/// one row of a serialized analysis
#[derive(Debug,Clone,Copy,Serialize)]
#[serde(rename_all="camelCase")]
pub struct DynamicsRecord {
    pub epoch_ms_time: i64,
    pub true_lateral_nm: f64,
    pub true_vertical_ft: f64,
    pub est_time_to_cpa_ms: i64,
    pub est_lateral_at_cpa_nm: f64,
    pub est_vertical_at_cpa_ft: f64,
    pub score: f64,
}

/// the per-sample results of scoring a track pair over its separation series
#[derive(Debug,Clone)]
pub struct PairAnalysis {
    window: TimeWindow,
    times: Vec<DateTime<Utc>>,
    true_lateral: Vec<Length>,
    true_vertical: Vec<Length>,
    est_time_to_cpa: Vec<TimeDelta>,
    est_lateral_at_cpa: Vec<Length>,
    est_vertical_at_cpa: Vec<Length>,
    scores: Vec<f64>,
    moving_sums: Vec<ScoredInstant>,
    riskiest: ScoredInstant,
}

impl PairAnalysis {

    /// score every sample time of the pair's separation series. The pair has to use the time stepping
    /// of `config` (see [`TrackPair::with_config`])
    pub fn new<S: TrajectorySource> (pair: &TrackPair<S>, config: &AriaConfig)->Result<Self> {
        if pair.time_stepping() != config.time_stepping {
            return Err( arg_error!("time stepping of {}/{} is {:?}, config requires {:?}",
                                   pair.track1().id(), pair.track2().id(), pair.time_stepping(), config.time_stepping))
        }
        let series = pair.separation()?;
        let n = series.len();

        let mut times = Vec::with_capacity(n);
        let mut true_lateral = Vec::with_capacity(n);
        let mut true_vertical = Vec::with_capacity(n);
        let mut est_time_to_cpa = Vec::with_capacity(n);
        let mut est_lateral_at_cpa = Vec::with_capacity(n);
        let mut est_vertical_at_cpa = Vec::with_capacity(n);
        let mut scores = Vec::with_capacity(n);

        for sample in series.iter() {
            let prediction = SeparationPrediction::new( pair, sample.time, config)?;

            times.push( sample.time);
            true_lateral.push( sample.lateral);
            true_vertical.push( sample.vertical);
            est_time_to_cpa.push( prediction.time_until_cpa);
            est_lateral_at_cpa.push( prediction.lateral_at_cpa);
            est_vertical_at_cpa.push( prediction.vertical_at_cpa);
            scores.push( prediction.score);
        }

        let analysis = Self::from_columns( times, true_lateral, true_vertical, est_time_to_cpa, est_lateral_at_cpa, est_vertical_at_cpa, scores)?;
        debug!("riskiest moment of {}/{}: {}", pair.track1().id(), pair.track2().id(), analysis.riskiest);

        Ok(analysis)
    }

    fn from_columns (times: Vec<DateTime<Utc>>, true_lateral: Vec<Length>, true_vertical: Vec<Length>,
                     est_time_to_cpa: Vec<TimeDelta>, est_lateral_at_cpa: Vec<Length>, est_vertical_at_cpa: Vec<Length>,
                     scores: Vec<f64>)->Result<Self>
    {
        let (Some(first),Some(last)) = (times.first(), times.last()) else {
            return Err( invalid_series!("no samples to analyze"))
        };
        let window = TimeWindow::new( *first, *last)?;

        let moving_sums: Vec<ScoredInstant> = times.iter().zip( four_term_moving_sum( &scores))
            .map( |(t,s)| ScoredInstant::new( *t, s))
            .collect();

        // not empty since there are times
        let riskiest = moving_sums.iter().min().copied().ok_or_else( || invalid_series!("no scores"))?;

        Ok( PairAnalysis { window, times, true_lateral, true_vertical, est_time_to_cpa, est_lateral_at_cpa, est_vertical_at_cpa, scores, moving_sums, riskiest } )
    }

    pub fn time_window (&self)->TimeWindow { self.window }
    pub fn len (&self)->usize { self.times.len() }

    pub fn times (&self)->&[DateTime<Utc>] { &self.times }
    pub fn true_lateral_separations (&self)->&[Length] { &self.true_lateral }
    pub fn true_vertical_separations (&self)->&[Length] { &self.true_vertical }
    pub fn est_times_to_cpa (&self)->&[TimeDelta] { &self.est_time_to_cpa }
    pub fn est_lateral_at_cpa (&self)->&[Length] { &self.est_lateral_at_cpa }
    pub fn est_vertical_at_cpa (&self)->&[Length] { &self.est_vertical_at_cpa }

    /// the raw (unsmoothed) scores
    pub fn scores (&self)->&[f64] { &self.scores }

    /// the smoothed score timeline
    pub fn moving_sums (&self)->&[ScoredInstant] { &self.moving_sums }

    /// the minimum smoothed score, earliest one on ties
    pub fn riskiest_moment (&self)->ScoredInstant { self.riskiest }

    /// the smoothed scored instant closest in time to `t`, or None if `t` is outside of the analyzed
    /// window. Equidistant candidates resolve to the earlier one
    pub fn closest_scored_moment (&self, t: DateTime<Utc>)->Option<ScoredInstant> {
        if !self.window.contains(t) {
            return None
        }
        // min_by_key returns the first minimum and moving sums are time ordered
        self.moving_sums.iter().min_by_key( |si| (si.time - t).num_milliseconds().abs()).copied()
    }

    /// smoothed score of the first sample at or after `t`
    pub fn score_at_or_after (&self, t: DateTime<Utc>)->Result<f64> {
        if !self.window.contains(t) {
            return Err( out_of_window!("{} not in analysis window {}", t, self.window))
        }
        self.moving_sums.iter().find( |si| si.time >= t)
            .map( |si| si.score)
            .ok_or_else( || out_of_window!("no sample at or after {}", t))
    }

    /// flat per-sample records with raw (unsmoothed) scores, e.g. to publish encounter dynamics
    pub fn dynamics (&self)->Vec<DynamicsRecord> {
        (0..self.len()).map( |i| DynamicsRecord {
            epoch_ms_time: self.times[i].timestamp_millis(),
            true_lateral_nm: in_nautical_miles( self.true_lateral[i]),
            true_vertical_ft: units::in_feet( self.true_vertical[i]),
            est_time_to_cpa_ms: self.est_time_to_cpa[i].num_milliseconds(),
            est_lateral_at_cpa_nm: in_nautical_miles( self.est_lateral_at_cpa[i]),
            est_vertical_at_cpa_ft: units::in_feet( self.est_vertical_at_cpa[i]),
            score: self.scores[i]
        }).collect()
    }

    /// copy that only contains the samples from the first to the last one within `lateral_radius`.
    /// Unlike an end-exclusive sub range, the last sample within the radius is kept, so the result has
    /// one more row than a `[first,last)` slice would have. If no sample is within the radius the whole
    /// range is kept. Moving sums are recomputed
    pub fn truncate (&self, lateral_radius: Length)->Result<PairAnalysis> {
        let n = self.len();
        let first = self.true_lateral.iter().position( |l| *l <= lateral_radius).unwrap_or(0);
        let last = self.true_lateral.iter().rposition( |l| *l <= lateral_radius).unwrap_or(n-1);
        let r = first..last+1;

        Self::from_columns(
            self.times[r.clone()].to_vec(),
            self.true_lateral[r.clone()].to_vec(),
            self.true_vertical[r.clone()].to_vec(),
            self.est_time_to_cpa[r.clone()].to_vec(),
            self.est_lateral_at_cpa[r.clone()].to_vec(),
            self.est_vertical_at_cpa[r.clone()].to_vec(),
            self.scores[r].to_vec()
        )
    }
}

/// the smoothed score of a pair at (or right after) a given time. This runs the complete analysis
pub fn cherry_pick_score<S: TrajectorySource> (pair: &TrackPair<S>, t: DateTime<Utc>, config: &AriaConfig)->Result<f64> {
    if !pair.overlap_contains(t) {
        return Err( out_of_window!("{} not in track overlap {}", t, pair.time_overlap()))
    }
    PairAnalysis::new( pair, config)?.score_at_or_after(t)
}
