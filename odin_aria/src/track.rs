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

use std::{fmt, fs::File, io, path::Path};
use chrono::{DateTime,Utc,TimeDelta};
use uom::si::f64::{Length,Velocity};
use itertools::{Itertools,MinMaxResult};
use serde::{Serialize,Deserialize};

use crate::{
    angle::Course, geo::LatLong, time_window::TimeWindow,
    units::{self, feet, in_feet},
    errors::{Result,invalid_track}
};

/// the interpolated (or measured) instantaneous state of an aircraft
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct AircraftState {
    pub time: DateTime<Utc>,
    pub position: LatLong,
    #[serde(serialize_with="units::ser_length_as_feet")]
    pub altitude: Length,
    #[serde(serialize_with="units::ser_velocity_as_knots")]
    pub speed: Velocity,
    pub course: Course,
}

impl AircraftState {
    pub fn new (time: DateTime<Utc>, position: LatLong, altitude: Length, speed: Velocity, course: Course)->Self {
        AircraftState { time, position, altitude, speed, course }
    }

    /// linear interpolation between two states, with the course interpolated along the shorter arc
    pub fn interpolate (&self, other: &AircraftState, t: DateTime<Utc>)->AircraftState {
        let dt = (other.time - self.time).num_milliseconds();
        let frac = if dt == 0 { 0.0 } else { (t - self.time).num_milliseconds() as f64 / dt as f64 };

        AircraftState {
            time: t,
            position: self.position.interpolate( &other.position, frac),
            altitude: self.altitude + (other.altitude - self.altitude) * frac,
            speed: self.speed + (other.speed - self.speed) * frac,
            course: self.course.interpolate( other.course, frac)
        }
    }
}

impl fmt::Display for AircraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.0}ft {:.0}kn {}", self.time.format("%H:%M:%S%.3f"), self.position,
               in_feet(self.altitude), units::in_knots(self.speed), self.course)
    }
}

/// the interface through which the analysis obtains aircraft states. Implementations only
/// interpolate, they never extrapolate beyond their own time window
pub trait TrajectorySource {
    fn id (&self)->&str;

    fn time_window (&self)->TimeWindow;

    /// None if `t` is outside of [`Self::time_window`]
    fn state_at (&self, t: DateTime<Utc>)->Option<AircraftState>;

    /// the measured (not interpolated) states within the given window
    fn states_within (&self, window: &TimeWindow)->Vec<AircraftState>;

    /// true if there are at least two states within `[t - window, t]` and their altitudes span
    /// no more than `tolerance`
    fn is_established_at_altitude (&self, t: DateTime<Utc>, window: TimeDelta, tolerance: Length)->bool {
        let Ok(w) = TimeWindow::new( t - window, t) else { return false };
        let recent = self.states_within( &w);

        if recent.len() < 2 { return false }

        match recent.iter().map( |s| in_feet(s.altitude)).minmax_by( |a,b| a.total_cmp(b)) {
            MinMaxResult::MinMax(min,max) => max - min <= in_feet(tolerance),
            _ => false
        }
    }

    /// climb rate around `t`, evaluated over a 7.5 sec look back and look ahead. Falls back to one sided
    /// rates at the ends of the track and to the start-to-end rate for very short tracks.
    /// Returns None if `t` is outside of the track
    fn climb_rate_at (&self, t: DateTime<Utc>)->Option<Velocity> {
        let dt = TimeDelta::milliseconds(7_500);
        let state = self.state_at(t)?;
        let prior = self.state_at( t - dt);
        let later = self.state_at( t + dt);

        let rate = match (prior,later) {
            (Some(prior),Some(later)) => {
                let r1 = climb_rate( &prior, &state);
                let r2 = climb_rate( &prior, &later);
                let r3 = climb_rate( &state, &later);
                (r1 + r2 + r3) / 3.0
            }
            (Some(prior),None) => climb_rate( &prior, &state),
            (None,Some(later)) => climb_rate( &state, &later),
            (None,None) => {
                let w = self.time_window();
                climb_rate( &self.state_at( w.start())?, &self.state_at( w.end())?)
            }
        };
        Some(rate)
    }

    fn climb_status_at (&self, t: DateTime<Utc>)->Option<ClimbStatus> {
        self.climb_rate_at(t).map( ClimbStatus::from_climb_rate)
    }
}

/// a time ordered sequence of measured aircraft states
#[derive(Debug,Clone,Serialize)]
pub struct Track {
    id: String,
    window: TimeWindow,
    states: Vec<AircraftState>,
}

impl Track {
    /// fails if there are no states or if state times are not strictly increasing
    pub fn new (id: impl ToString, states: Vec<AircraftState>)->Result<Self> {
        let id = id.to_string();
        if states.is_empty() {
            return Err( invalid_track!("track {} has no states", id))
        }
        if let Some((a,b)) = states.iter().tuple_windows().find( |(a,b)| a.time >= b.time) {
            return Err( invalid_track!("track {} not strictly time ordered at {}", id, b.time))
        }
        let window = TimeWindow::new( states[0].time, states[states.len()-1].time)?;
        Ok( Track { id, window, states } )
    }

    /// read from CSV with a header line and `time_ms,lat,lon,alt_ft,speed_kts,course_deg` records
    pub fn from_csv<R: io::Read> (id: impl ToString, reader: R)->Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim( csv::Trim::All).from_reader(reader);
        let mut states: Vec<AircraftState> = Vec::new();

        for rec in rdr.deserialize() {
            let rec: TrackRecord = rec?;
            let time = DateTime::<Utc>::from_timestamp_millis( rec.time_ms)
                .ok_or_else( || invalid_track!("invalid epoch millis {}", rec.time_ms))?;
            states.push( AircraftState::new(
                time,
                LatLong::from_degrees( rec.lat, rec.lon),
                feet( rec.alt_ft),
                units::knots( rec.speed_kts),
                Course::from_degrees( rec.course_deg)
            ));
        }

        Track::new( id, states)
    }

    pub fn from_csv_file<P: AsRef<Path>> (id: impl ToString, path: P)->Result<Self> {
        Self::from_csv( id, File::open( path.as_ref())?)
    }

    pub fn states (&self)->&[AircraftState] { &self.states }
    pub fn len (&self)->usize { self.states.len() }
}

#[derive(Debug,Deserialize)]
struct TrackRecord {
    time_ms: i64,
    lat: f64,
    lon: f64,
    alt_ft: f64,
    speed_kts: f64,
    course_deg: f64,
}

/// zero if both states have the same time
fn climb_rate (s1: &AircraftState, s2: &AircraftState)->Velocity {
    let dt = s2.time - s1.time;
    if dt.is_zero() {
        units::feet_per_minute(0.0)
    } else {
        units::rate( s2.altitude - s1.altitude, dt)
    }
}

impl TrajectorySource for Track {
    fn id (&self)->&str { self.id.as_str() }

    fn time_window (&self)->TimeWindow { self.window }

    fn state_at (&self, t: DateTime<Utc>)->Option<AircraftState> {
        match self.states.binary_search_by( |s| s.time.cmp(&t)) {
            Ok(i) => Some( self.states[i]),
            Err(i) => {
                if i == 0 || i == self.states.len() {
                    None
                } else {
                    Some( self.states[i-1].interpolate( &self.states[i], t))
                }
            }
        }
    }

    fn states_within (&self, window: &TimeWindow)->Vec<AircraftState> {
        let lo = self.states.partition_point( |s| s.time < window.start());
        let hi = self.states.partition_point( |s| s.time <= window.end());
        self.states[lo..hi].to_vec()
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="SCREAMING_SNAKE_CASE")]
pub enum ClimbStatus {
    Level,
    Climbing,
    Descending,
}

impl ClimbStatus {
    pub fn from_climb_rate (v: Velocity)->Self {
        let fpm = units::in_feet_per_minute(v);
        if fpm > 0.0 { ClimbStatus::Climbing }
        else if fpm < 0.0 { ClimbStatus::Descending }
        else { ClimbStatus::Level }
    }
}
