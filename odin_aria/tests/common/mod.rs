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

use chrono::{DateTime,Utc,TimeDelta};
use odin_aria::{
    Track, AircraftState,
    angle::Course, geo::LatLong,
    units::{feet, knots, nautical_miles},
};

/// 2023-11-14T22:13:20Z
pub fn t0 ()->DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis( 1_700_000_000_000).unwrap()
}

pub fn secs (s: f64)->TimeDelta {
    TimeDelta::milliseconds( (s * 1000.0) as i64)
}

/// a straight and constant speed track with `n_points` states every `step_secs`, optionally climbing
pub fn straight_track (id: &str, start: LatLong, course_deg: f64, speed_kts: f64, alt_ft: f64, climb_fpm: f64,
                       t_start: DateTime<Utc>, n_points: usize, step_secs: f64)->Track
{
    let course = Course::from_degrees( course_deg);
    let states: Vec<AircraftState> = (0..n_points).map( |k| {
        let elapsed_secs = k as f64 * step_secs;
        let dist = nautical_miles( speed_kts * elapsed_secs / 3600.0);
        AircraftState::new(
            t_start + secs( elapsed_secs),
            start.project( course, dist),
            feet( alt_ft + climb_fpm * elapsed_secs / 60.0),
            knots( speed_kts),
            course
        )
    }).collect();

    Track::new( id, states).unwrap()
}

/// aircraft "a" flies north at 300kn and overtakes "b" which flies north at 180.6kn, starting 9.95NM ahead
/// and 1NM to the east. Both at 12000ft. They start 10NM apart and reach their closest approach of 1NM at
/// the end of the 5min (6 point) tracks
pub fn overtaking_pair_tracks ()->(Track,Track) {
    let a0 = LatLong::from_degrees( 37.0, -122.0);
    let b0 = a0.project( Course::from_degrees(0.0), nautical_miles(9.95)).project( Course::from_degrees(90.0), nautical_miles(1.0));

    let a = straight_track( "a", a0, 0.0, 300.0, 12_000.0, 0.0, t0(), 6, 60.0);
    let b = straight_track( "b", b0, 0.0, 180.6, 12_000.0, 0.0, t0(), 6, 60.0);
    (a,b)
}
