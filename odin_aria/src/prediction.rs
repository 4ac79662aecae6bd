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

//! single instant risk prediction for a track pair.
//!
//! The score is an inverted risk metric: lower means more dangerous, zero is the theoretical
//! worst case of simultaneous zero time, lateral and vertical separation at the projected CPA.
//! ```text
//!   base  = timeScore² + (horizontalScore^2.5 + verticalScore^2.5)^0.5
//!   score = base * verticalPenalty * lateralPenalty
//! ```

use chrono::{DateTime,Utc,TimeDelta};
use uom::si::f64::{Length,Velocity};
use serde::{Serialize,Deserialize};

use crate::{
    trace,
    config::AriaConfig,
    track::TrajectorySource,
    track_pair::TrackPair,
    point_pair::PointPair,
    separation::Axis,
    units::{self, in_feet, in_nautical_miles, in_knots},
    errors::{OdinAriaError,Result}
};

/// how much of each separation dimension corresponds to one score unit
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct CoefficientSet {
    #[serde(serialize_with="units::ser_length_as_nautical_miles", deserialize_with="units::de_length_from_nautical_miles")]
    pub lateral_nm_per_unit: Length,
    #[serde(serialize_with="units::ser_length_as_feet", deserialize_with="units::de_length_from_feet")]
    pub vertical_ft_per_unit: Length,
    #[serde(serialize_with="units::ser_time_delta", deserialize_with="units::de_time_delta")]
    pub time_per_unit: TimeDelta,
}

impl CoefficientSet {
    pub fn new (lateral_nm_per_unit: Length, vertical_ft_per_unit: Length, time_per_unit: TimeDelta)->Self {
        CoefficientSet { lateral_nm_per_unit, vertical_ft_per_unit, time_per_unit }
    }

    /// all three per-unit values have to be positive
    pub fn check (&self, name: &str)->Result<()> {
        if in_nautical_miles( self.lateral_nm_per_unit) <= 0.0 {
            Err( OdinAriaError::InvalidConfigError( format!("{name}.lateral_nm_per_unit not positive")))
        } else if in_feet( self.vertical_ft_per_unit) <= 0.0 {
            Err( OdinAriaError::InvalidConfigError( format!("{name}.vertical_ft_per_unit not positive")))
        } else if self.time_per_unit.num_milliseconds() <= 0 {
            Err( OdinAriaError::InvalidConfigError( format!("{name}.time_per_unit not positive: {}", self.time_per_unit)))
        } else {
            Ok(())
        }
    }

    /// score units per NM
    pub fn horizontal_coef (&self)->f64 { 1.0 / in_nautical_miles( self.lateral_nm_per_unit) }

    /// score units per foot
    pub fn vertical_coef (&self)->f64 { 1.0 / in_feet( self.vertical_ft_per_unit) }

    /// score units per millisecond
    pub fn time_coef (&self)->f64 { 1.0 / self.time_per_unit.num_milliseconds() as f64 }

    /// the penalty free part of the score
    pub fn base_score (&self, time_until_cpa: TimeDelta, lateral_at_cpa: Length, vertical_at_cpa: Length)->f64 {
        let time_score = self.time_coef() * time_until_cpa.num_milliseconds() as f64;
        let horizontal_score = self.horizontal_coef() * in_nautical_miles( lateral_at_cpa);
        let vertical_score = self.vertical_coef() * in_feet( vertical_at_cpa);

        time_score.powi(2) + (horizontal_score.powf(2.5) + vertical_score.powf(2.5)).powf(0.5)
    }
}

/// the risk prediction for a track pair at one instant
#[derive(Debug,Clone,Copy,Serialize)]
pub struct SeparationPrediction {
    pub time: DateTime<Utc>,

    #[serde(serialize_with="units::ser_time_delta_as_millis")]
    pub time_until_cpa: TimeDelta,
    #[serde(serialize_with="units::ser_length_as_nautical_miles")]
    pub lateral_at_cpa: Length,
    #[serde(serialize_with="units::ser_length_as_feet")]
    pub vertical_at_cpa: Length,

    #[serde(serialize_with="units::ser_length_as_nautical_miles")]
    pub lateral_distance: Length,
    #[serde(serialize_with="units::ser_length_as_feet")]
    pub altitude_delta: Length,
    #[serde(serialize_with="units::ser_velocity_as_knots")]
    pub lateral_closure_rate: Velocity,
    #[serde(serialize_with="units::ser_velocity_as_knots")]
    pub vertical_closure_rate: Velocity,

    pub both_established: bool,
    pub score: f64,
}

impl SeparationPrediction {
    /// `t` has to be within the overlap of the pair
    pub fn new<S: TrajectorySource> (pair: &TrackPair<S>, t: DateTime<Utc>, config: &AriaConfig)->Result<Self> {
        let points = pair.points_at(t)?;
        let series = pair.separation()?;

        let cpa = points.closest_point_of_approach();

        // the projected CPA time might be beyond the series window - extrapolate from `t`
        let vertical_at_cpa = series.predicted_separation_after( Axis::Vertical, t, cpa.time_until_cpa)?;
        let vertical_closure_rate = series.closure_rate_at( Axis::Vertical, t)?;
        let lateral_closure_rate = series.closure_rate_at( Axis::Lateral, t)?;

        let both_established = pair.track1().is_established_at_altitude( t, config.level_flight_window, config.level_altitude_tolerance)
                            && pair.track2().is_established_at_altitude( t, config.level_flight_window, config.level_altitude_tolerance);

        let coefs = coefficients_for( points.avg_altitude(), config);
        let lateral_distance = points.lateral_distance();
        let altitude_delta = points.altitude_delta();

        let base = coefs.base_score( cpa.time_until_cpa, cpa.distance_at_cpa, vertical_at_cpa);
        let vp = vertical_penalty( both_established, vertical_closure_rate, altitude_delta, config);
        let lp = lateral_penalty( lateral_closure_rate, lateral_distance, coefs, config);
        let score = base * vp * lp;

        trace!("score {:.3} at {} (cpa in {}ms at {:.2}nm/{:.0}ft, penalties {:.3}/{:.3})",
               score, t, cpa.time_until_cpa.num_milliseconds(), in_nautical_miles(cpa.distance_at_cpa), in_feet(vertical_at_cpa), vp, lp);

        Ok( SeparationPrediction {
            time: t,
            time_until_cpa: cpa.time_until_cpa,
            lateral_at_cpa: cpa.distance_at_cpa,
            vertical_at_cpa,
            lateral_distance,
            altitude_delta,
            lateral_closure_rate,
            vertical_closure_rate,
            both_established,
            score
        })
    }
}

/// the coarser vertical coefficients apply strictly above the altitude threshold
pub fn coefficients_for (avg_altitude: Length, config: &AriaConfig)->&CoefficientSet {
    if avg_altitude > config.altitude_threshold {
        &config.high_altitude_coefs
    } else {
        &config.low_altitude_coefs
    }
}

/// applies if both aircraft are established at their altitudes or if they diverge vertically
pub fn vertical_penalty (both_established: bool, vertical_closure_rate: Velocity, altitude_delta: Length, config: &AriaConfig)->f64 {
    if both_established || vertical_closure_rate.value < 0.0 {
        1.0 + (in_feet(altitude_delta) / in_feet(config.vertical_penalty_scale)).powf(2.5)
    } else {
        1.0
    }
}

/// applies if the aircraft are not closing laterally faster than the configured threshold (about walking pace)
pub fn lateral_penalty (lateral_closure_rate: Velocity, lateral_distance: Length, coefs: &CoefficientSet, config: &AriaConfig)->f64 {
    if lateral_closure_rate <= config.lateral_closure_threshold {
        1.0 + coefs.horizontal_coef() * in_nautical_miles(lateral_distance)
    } else {
        1.0
    }
}
