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

mod common;

use std::io::Write;
use chrono::TimeDelta;
use odin_aria::{
    Track, TrackPair, TrajectorySource, OdinAriaError,
    angle::Course, geo::LatLong, time_window::TimeWindow,
    units::{feet, nautical_miles, in_feet, in_knots, in_nautical_miles},
};
use common::*;

const TRACK_CSV: &str = "time_ms, lat, lon, alt_ft, speed_kts, course_deg
1700000000000, 37.0, -122.0, 10000, 250, 350
1700000010000, 37.01, -122.0, 10200, 270, 10
1700000020000, 37.02, -122.0, 10400, 290, 30
";

// run with "cargo test test_csv_track -- --nocapture"

#[test]
fn test_csv_track () {
    let track = Track::from_csv( "csv", TRACK_CSV.as_bytes()).unwrap();
    for s in track.states() { println!("{s}") }

    assert_eq!( track.id(), "csv");
    assert_eq!( track.len(), 3);
    assert_eq!( track.time_window().start(), t0());
    assert_eq!( track.time_window().end(), t0() + secs(20.0));

    // interpolation, course along the shorter arc across north
    let s = track.state_at( t0() + secs(5.0)).unwrap();
    assert!( (in_feet( s.altitude) - 10_100.0).abs() < 1e-6);
    assert!( (in_knots( s.speed) - 260.0).abs() < 1e-6);
    assert!( s.course.degrees().abs() < 1e-9 || (s.course.degrees() - 360.0).abs() < 1e-9);
    assert!( (s.position.latitude_degrees() - 37.005).abs() < 1e-9);

    assert!( track.state_at( t0() - secs(1.0)).is_none());
    assert!( track.state_at( t0() + secs(21.0)).is_none());

    let w = TimeWindow::new( t0() + secs(5.0), t0() + secs(20.0)).unwrap();
    assert_eq!( track.states_within( &w).len(), 2);
}

#[test]
fn test_csv_file () {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all( TRACK_CSV.as_bytes()).unwrap();

    let track = Track::from_csv_file( "file", file.path()).unwrap();
    assert_eq!( track.len(), 3);

    assert!( matches!( Track::from_csv_file( "none", "/this/does/not/exist.csv"), Err(OdinAriaError::IOError(_))));
    assert!( matches!( Track::from_csv( "bad", "time_ms,lat\n1,x\n".as_bytes()), Err(OdinAriaError::CsvError(_))));
}

#[test]
fn test_invalid_tracks () {
    assert!( matches!( Track::new( "empty", Vec::new()), Err(OdinAriaError::InvalidTrackError(_))));

    let track = Track::from_csv( "csv", TRACK_CSV.as_bytes()).unwrap();
    let mut states = track.states().to_vec();
    states.swap( 0, 1);
    assert!( matches!( Track::new( "unordered", states), Err(OdinAriaError::InvalidTrackError(_))));
}

#[test]
fn test_no_overlap () {
    let p0 = LatLong::from_degrees( 37.0, -122.0);
    let a = straight_track( "a", p0, 0.0, 250.0, 10_000.0, 0.0, t0(), 6, 10.0);
    let b = straight_track( "b", p0, 0.0, 250.0, 10_000.0, 0.0, t0() + secs(60.0), 6, 10.0);
    let c = straight_track( "c", p0, 0.0, 250.0, 10_000.0, 0.0, t0() + secs(20.0), 6, 10.0);

    assert!( matches!( TrackPair::new( a.clone(), b), Err(OdinAriaError::NoOverlapError(_))));

    let pair = TrackPair::new( a, c).unwrap();
    assert_eq!( pair.time_overlap().start(), t0() + secs(20.0));
    assert_eq!( pair.time_overlap().end(), t0() + secs(50.0));
    assert!( pair.points_at( t0() + secs(10.0)).is_err());
    assert!( pair.points_at( t0() + secs(20.0)).is_ok());
}

#[test]
fn test_time_window () {
    let w1 = TimeWindow::new( t0(), t0() + secs(10.0)).unwrap();
    let w2 = TimeWindow::new( t0() + secs(10.0), t0() + secs(20.0)).unwrap();

    assert!( TimeWindow::new( t0() + secs(1.0), t0()).is_err());
    assert!( w1.contains( t0()) && w1.contains( t0() + secs(10.0)));

    // touching windows overlap in a single instant
    let o = w1.overlap( &w2).unwrap();
    assert_eq!( o.duration(), TimeDelta::zero());
    assert_eq!( o.fraction_of_range( o.start()), 0.0);

    assert!( (w1.fraction_of_range( t0() + secs(2.5)) - 0.25).abs() < 1e-12);
    assert_eq!( w1.stepped_iteration( secs(4.0)).unwrap().len(), 4); // 0,4,8,10
    assert!( w1.stepped_iteration( TimeDelta::zero()).is_err());
}

#[test]
fn test_geo () {
    let p = LatLong::from_degrees( 37.0, -122.0);
    let q = p.project( Course::from_degrees(45.0), nautical_miles(20.0));

    assert!( (in_nautical_miles( p.distance_to(&q)) - 20.0).abs() < 1e-6);
    assert!( (p.course_to(&q).degrees() - 45.0).abs() < 1e-6);

    // one arc minute of latitude is about one NM
    let r = LatLong::from_degrees( 37.0 + 1.0/60.0, -122.0);
    assert!( (in_nautical_miles( p.distance_to(&r)) - 1.0).abs() < 0.01);
}
