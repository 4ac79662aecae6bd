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

//! instantaneous separation geometry of two simultaneous aircraft states.
//!
//! All vector computations use a local flat-earth projection with x = d·cos(course) and
//! y = d·sin(course), positions in nautical miles and velocities in knots. This is accurate
//! enough for encounter scale distances.

use chrono::{DateTime,Utc,TimeDelta};
use nalgebra::Vector2;
use uom::si::f64::{Length,Velocity};
use serde::Serialize;

use crate::{
    angle::Course, geo::LatLong, track::AircraftState,
    units::{self, feet, knots, nautical_miles, in_feet, in_knots, in_nautical_miles, hours_to_time_delta},
    errors::{Result,arg_error}
};

/// below this lateral distance (in NM) closure rates are undetermined and reported as zero
const COINCIDENCE_FLOOR_NM: f64 = 0.001;

/// CPA projections are capped at this horizon (hours). Near parallel velocities otherwise
/// produce times that are not representable as timestamps
pub const MAX_CPA_HORIZON_HOURS: f64 = 24.0;

/// projected time and lateral distance of the closest point of approach
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct ClosestPointOfApproach {
    #[serde(serialize_with="units::ser_time_delta_as_millis")]
    pub time_until_cpa: TimeDelta, // never negative
    #[serde(serialize_with="units::ser_length_as_nautical_miles")]
    pub distance_at_cpa: Length,
}

/// two aircraft states at the same time
#[derive(Debug,Clone,Copy)]
pub struct PointPair {
    s1: AircraftState,
    s2: AircraftState,
}

impl PointPair {
    pub fn new (s1: AircraftState, s2: AircraftState)->Result<Self> {
        if s1.time != s2.time {
            Err( arg_error!("point pair states not simultaneous: {} vs {}", s1.time, s2.time))
        } else {
            Ok( PointPair{s1,s2} )
        }
    }

    pub fn time (&self)->DateTime<Utc> { self.s1.time }
    pub fn first (&self)->&AircraftState { &self.s1 }
    pub fn second (&self)->&AircraftState { &self.s2 }

    pub fn lateral_distance (&self)->Length {
        self.s1.position.distance_to( &self.s2.position)
    }

    /// absolute altitude difference
    pub fn altitude_delta (&self)->Length {
        feet( (in_feet(self.s1.altitude) - in_feet(self.s2.altitude)).abs())
    }

    /// absolute course difference, within [0,180] degrees
    pub fn course_delta (&self)->f64 {
        self.s1.course.abs_difference( self.s2.course)
    }

    /// absolute ground speed difference
    pub fn speed_delta (&self)->Velocity {
        knots( (in_knots(self.s1.speed) - in_knots(self.s2.speed)).abs())
    }

    pub fn velocity_delta_magnitude (&self)->Velocity {
        knots( (velocity_kts(&self.s1) - velocity_kts(&self.s2)).norm())
    }

    pub fn avg_altitude (&self)->Length {
        (self.s1.altitude + self.s2.altitude) / 2.0
    }

    pub fn avg_position (&self)->LatLong {
        self.s1.position.avg( &self.s2.position)
    }

    /// both vertical and lateral separation within the given limits (inclusive)
    pub fn are_within (&self, vertical: Length, lateral: Length)->bool {
        self.altitude_delta() <= vertical && self.lateral_distance() <= lateral
    }

    /// rate of change of the lateral distance under straight line extrapolation of both velocities.
    /// Positive means converging
    pub fn horizontal_closure_rate (&self)->Velocity {
        let dp = self.position_delta_nm();
        let dp_len = dp.norm();

        if dp_len < COINCIDENCE_FLOOR_NM {
            knots(0.0)
        } else {
            let dv = velocity_kts(&self.s1) - velocity_kts(&self.s2);
            knots( dp.dot(&dv) / dp_len)
        }
    }

    /// analytic CPA projection. The time `t*` that minimizes |dp + dv·t| is -(dp·dv)/(dv·dv).
    /// If that is not finite or not in the future we report zero time and the current distance.
    /// Times beyond [`MAX_CPA_HORIZON_HOURS`] are clamped to it, the distance is then the one at the horizon
    pub fn closest_point_of_approach (&self)->ClosestPointOfApproach {
        let dp = self.position_delta_nm();
        let dv = velocity_kts(&self.s2) - velocity_kts(&self.s1);

        let t_hours = -dp.dot(&dv) / dv.dot(&dv);

        if !t_hours.is_finite() || t_hours <= 0.0 {
            ClosestPointOfApproach {
                time_until_cpa: TimeDelta::zero(),
                distance_at_cpa: self.lateral_distance()
            }
        } else {
            let t_hours = t_hours.min( MAX_CPA_HORIZON_HOURS);
            let dp_cpa = dp + dv * t_hours;
            ClosestPointOfApproach {
                time_until_cpa: hours_to_time_delta( t_hours),
                distance_at_cpa: nautical_miles( dp_cpa.norm())
            }
        }
    }

    /// vector from the first to the second position (NM)
    fn position_delta_nm (&self)->Vector2<f64> {
        let course = self.s1.position.course_to( &self.s2.position);
        polar_vector( in_nautical_miles( self.lateral_distance()), course)
    }
}

fn velocity_kts (s: &AircraftState)->Vector2<f64> {
    polar_vector( in_knots(s.speed), s.course)
}

#[inline]
fn polar_vector (magnitude: f64, course: Course)->Vector2<f64> {
    let rad = course.radians();
    Vector2::new( magnitude * rad.cos(), magnitude * rad.sin())
}
