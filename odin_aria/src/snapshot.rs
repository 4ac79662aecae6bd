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

use std::fmt;
use chrono::{DateTime,Utc,TimeDelta};
use uom::si::f64::{Length,Velocity};
use serde::{Serialize,Serializer,ser::SerializeStruct};

use crate::{
    debug,
    config::AriaConfig,
    track::TrajectorySource,
    track_pair::TrackPair,
    analysis::{PairAnalysis,ScoredInstant},
    separation::Axis,
    units::{in_feet, in_nautical_miles, in_knots, in_feet_per_minute},
    errors::Result
};

/// the projected closest point of approach as seen from the snapshot time
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct CpaEstimate {
    pub time_to_cpa: TimeDelta,
    pub lateral_at_cpa: Length,
    pub vertical_at_cpa: Length,
}

/// the encounter geometry at one analytically important moment
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Snapshot {
    pub time: DateTime<Utc>,
    pub score: f64,
    pub true_lateral: Length,
    pub true_vertical: Length,
    pub course_angle_delta: f64, // degrees within [0,180]
    pub vertical_closure_rate: Velocity,
    pub lateral_closure_rate: Velocity,
    pub cpa: Option<CpaEstimate>, // only for the at-event snapshot
}

impl Snapshot {
    /// None if `time` is not within the track overlap
    pub fn extract<S: TrajectorySource> (pair: &TrackPair<S>, time: DateTime<Utc>, score: f64)->Result<Option<Snapshot>> {
        if !pair.overlap_contains(time) {
            return Ok(None)
        }

        let points = pair.points_at(time)?;
        let series = pair.separation()?;

        Ok( Some( Snapshot {
            time,
            score,
            true_lateral: points.lateral_distance(),
            true_vertical: points.altitude_delta(),
            course_angle_delta: points.course_delta(),
            vertical_closure_rate: series.closure_rate_at( Axis::Vertical, time)?,
            lateral_closure_rate: points.horizontal_closure_rate(),
            cpa: None
        }))
    }

    /// a snapshot that also includes the CPA estimate
    pub fn extract_with_cpa<S: TrajectorySource> (pair: &TrackPair<S>, si: &ScoredInstant)->Result<Option<Snapshot>> {
        let Some(mut snap) = Self::extract( pair, si.time, si.score)? else { return Ok(None) };

        let cpa = pair.points_at(si.time)?.closest_point_of_approach();
        let vertical_at_cpa = pair.separation()?.predicted_separation_after( Axis::Vertical, si.time, cpa.time_until_cpa)?;

        snap.cpa = Some( CpaEstimate {
            time_to_cpa: cpa.time_until_cpa,
            lateral_at_cpa: cpa.distance_at_cpa,
            vertical_at_cpa
        });
        Ok( Some(snap) )
    }

    /// reported course difference in whole degrees (truncated)
    pub fn angle_delta_degrees (&self)->i32 {
        self.course_angle_delta as i32
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} score={:.3} lateral={:.3}nm vertical={:.0}ft", self.time.format("%H:%M:%S%.3f"),
               self.score, in_nautical_miles(self.true_lateral), in_feet(self.true_vertical))?;
        if let Some(cpa) = &self.cpa {
            write!(f, " cpa_in={}ms", cpa.time_to_cpa.num_milliseconds())?;
        }
        Ok(())
    }
}

impl Serialize for Snapshot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("Snapshot", 11)?;
        state.serialize_field("timestamp", &self.time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())?;
        state.serialize_field("epochMsTime", &self.time.timestamp_millis())?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("trueVerticalFt", &in_feet(self.true_vertical))?;
        state.serialize_field("trueLateralNm", &in_nautical_miles(self.true_lateral))?;
        state.serialize_field("angleDelta", &self.angle_delta_degrees())?;
        state.serialize_field("vertClosureRateFtPerMin", &in_feet_per_minute(self.vertical_closure_rate))?;
        state.serialize_field("lateralClosureRateKt", &in_knots(self.lateral_closure_rate))?;
        state.serialize_field("estTimeToCpaMs", &self.cpa.map( |c| c.time_to_cpa.num_milliseconds()))?;
        state.serialize_field("estVerticalAtCpaFt", &self.cpa.map( |c| in_feet(c.vertical_at_cpa)))?;
        state.serialize_field("estLateralAtCpaNm", &self.cpa.map( |c| in_nautical_miles(c.lateral_at_cpa)))?;
        state.end()
    }
}

/// the six named snapshots of an encounter. Each one can be absent
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct KeyMoments {
    pub at_event_time: Option<Snapshot>,
    pub at_estimated_cpa_time: Option<Snapshot>,
    pub at_closest_lateral: Option<Snapshot>,
    pub at_closest_lateral_with_1k_vert: Option<Snapshot>,
    pub at_closest_vertical_with_3nm: Option<Snapshot>,
    pub at_closest_vertical_with_5nm: Option<Snapshot>,
    pub is_level_off_event: bool,
}

impl KeyMoments {
    pub fn extract<S: TrajectorySource> (pair: &TrackPair<S>, analysis: &PairAnalysis, config: &AriaConfig)->Result<Self> {
        let riskiest = analysis.riskiest_moment();
        let series = pair.separation()?;

        let cpa = pair.points_at( riskiest.time)?.closest_point_of_approach();
        // None if not representable, which is outside of any overlap
        let cpa_time = riskiest.time.checked_add_signed( cpa.time_until_cpa);

        let closest_time = |minimize: Axis, constraint: Option<(Axis,Length)>| {
            series.closest( minimize, constraint).map( |s| s.time)
        };

        let t_lat = closest_time( Axis::Lateral, None);
        let t_lat_1k = closest_time( Axis::Lateral, Some((Axis::Vertical, config.closest_lateral_vertical_limit)));
        let t_vert_3nm = closest_time( Axis::Vertical, Some((Axis::Lateral, config.closest_vertical_near_limit_nm)));
        let t_vert_5nm = closest_time( Axis::Vertical, Some((Axis::Lateral, config.closest_vertical_far_limit_nm)));

        let key_moments = KeyMoments {
            at_event_time: Snapshot::extract_with_cpa( pair, &riskiest)?,
            at_estimated_cpa_time: snapshot_at( pair, analysis, cpa_time)?,
            at_closest_lateral: snapshot_at( pair, analysis, t_lat)?,
            at_closest_lateral_with_1k_vert: snapshot_at( pair, analysis, t_lat_1k)?,
            at_closest_vertical_with_3nm: snapshot_at( pair, analysis, t_vert_3nm)?,
            at_closest_vertical_with_5nm: snapshot_at( pair, analysis, t_vert_5nm)?,
            is_level_off_event: is_level_off_event( pair, riskiest.time, cpa.time_until_cpa)?
        };

        debug!("extracted {} of 6 key moments for {}/{}", key_moments.as_array().iter().filter(|s| s.is_some()).count(),
               pair.track1().id(), pair.track2().id());
        Ok(key_moments)
    }

    /// in the order at-event, at-estimated-CPA, closest lateral, closest lateral within 1000ft,
    /// closest vertical within 3NM, closest vertical within 5NM
    pub fn as_array (&self)->[Option<&Snapshot>;6] {
        [
            self.at_event_time.as_ref(),
            self.at_estimated_cpa_time.as_ref(),
            self.at_closest_lateral.as_ref(),
            self.at_closest_lateral_with_1k_vert.as_ref(),
            self.at_closest_vertical_with_3nm.as_ref(),
            self.at_closest_vertical_with_5nm.as_ref()
        ]
    }
}

/// secondary snapshots are taken at the scored instant that is closest to the defining time, and
/// carry its smoothed score
fn snapshot_at<S: TrajectorySource> (pair: &TrackPair<S>, analysis: &PairAnalysis, time: Option<DateTime<Utc>>)->Result<Option<Snapshot>> {
    let Some(time) = time else { return Ok(None) };
    match analysis.closest_scored_moment(time) {
        Some(si) => Snapshot::extract( pair, si.time, si.score),
        None => Ok(None)
    }
}

/// did the aircraft that changed altitude fastest at `event_time` level off by the estimated CPA time?
/// False if the estimated CPA time is outside of the track overlap or not representable
pub fn is_level_off_event<S: TrajectorySource> (pair: &TrackPair<S>, event_time: DateTime<Utc>, time_to_cpa: TimeDelta)->Result<bool> {
    let Some(cpa_time) = event_time.checked_add_signed( time_to_cpa) else { return Ok(false) };
    if !pair.overlap_contains(cpa_time) || !pair.overlap_contains(event_time) {
        return Ok(false)
    }

    let (t1, t2) = (pair.track1(), pair.track2());
    let (Some(early1),Some(early2)) = (t1.climb_rate_at(event_time), t2.climb_rate_at(event_time)) else { return Ok(false) };

    let later = if in_feet_per_minute(early1).abs() > in_feet_per_minute(early2).abs() {
        t1.climb_rate_at(cpa_time)
    } else {
        t2.climb_rate_at(cpa_time)
    };

    Ok( later.map( |v| v.value == 0.0).unwrap_or(false) )
}
