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

use chrono::TimeDelta;
use odin_aria::{
    PointPair, AircraftState, OdinAriaError,
    point_pair::MAX_CPA_HORIZON_HOURS,
    angle::Course, geo::LatLong,
    units::{feet, knots, nautical_miles, in_feet, in_knots, in_nautical_miles},
};
use common::*;

fn state (pos: LatLong, alt_ft: f64, speed_kts: f64, course_deg: f64)->AircraftState {
    AircraftState::new( t0(), pos, feet(alt_ft), knots(speed_kts), Course::from_degrees(course_deg))
}

// run with "cargo test test_collision_course -- --nocapture"

#[test]
fn test_collision_course () {
    let a = LatLong::from_degrees( 0.0, 0.0);
    let b = a.project( Course::from_degrees(90.0), nautical_miles(10.0));

    let pp = PointPair::new( state( a, 10_000.0, 300.0, 90.0), state( b, 10_000.0, 300.0, 270.0)).unwrap();
    let cpa = pp.closest_point_of_approach();
    println!("lateral: {:.4}nm, cpa: {:?}", in_nautical_miles( pp.lateral_distance()), cpa);

    assert!( (in_nautical_miles( pp.lateral_distance()) - 10.0).abs() < 1e-6);
    assert!( (cpa.time_until_cpa.num_milliseconds() - 60_000).abs() <= 10);
    assert!( in_nautical_miles( cpa.distance_at_cpa) < 0.001);
    assert!( (in_knots( pp.horizontal_closure_rate()) - 600.0).abs() < 0.01);
    assert_eq!( pp.course_delta(), 180.0);
}

#[test]
fn test_parallel_courses () {
    let a = LatLong::from_degrees( 37.0, -122.0);
    let b = a.project( Course::from_degrees(90.0), nautical_miles(3.0));

    let pp = PointPair::new( state( a, 10_000.0, 300.0, 0.0), state( b, 11_000.0, 300.0, 0.0)).unwrap();
    let cpa = pp.closest_point_of_approach();
    println!("parallel cpa: {:?}", cpa);

    // degenerate relative velocity: no future CPA, current distance
    assert_eq!( cpa.time_until_cpa, TimeDelta::zero());
    assert!( (in_nautical_miles( cpa.distance_at_cpa) - 3.0).abs() < 1e-6);
    assert!( in_knots( pp.horizontal_closure_rate()).abs() < 1e-6);
    assert!( (in_feet( pp.altitude_delta()) - 1000.0).abs() < 1e-9);
    assert!( (in_feet( pp.avg_altitude()) - 10_500.0).abs() < 1e-9);
    assert!( pp.are_within( feet(1000.5), nautical_miles(3.1)));
    assert!( !pp.are_within( feet(999.0), nautical_miles(3.1)));
}

#[test]
fn test_diverging () {
    let a = LatLong::from_degrees( 37.0, -122.0);
    let b = a.project( Course::from_degrees(90.0), nautical_miles(5.0));

    let pp = PointPair::new( state( a, 10_000.0, 250.0, 270.0), state( b, 10_000.0, 250.0, 90.0)).unwrap();
    let cpa = pp.closest_point_of_approach();

    assert_eq!( cpa.time_until_cpa, TimeDelta::zero());
    assert!( (in_nautical_miles( cpa.distance_at_cpa) - 5.0).abs() < 1e-6);
    assert!( in_knots( pp.horizontal_closure_rate()) < -499.0); // negative means diverging
}

#[test]
fn test_coincident_positions () {
    let a = LatLong::from_degrees( 37.0, -122.0);

    let pp = PointPair::new( state( a, 10_000.0, 250.0, 0.0), state( a, 10_500.0, 200.0, 90.0)).unwrap();
    let cpa = pp.closest_point_of_approach();

    assert_eq!( in_knots( pp.horizontal_closure_rate()), 0.0);
    assert_eq!( cpa.time_until_cpa, TimeDelta::zero());
    assert!( in_nautical_miles( cpa.distance_at_cpa) < 1e-9);
}

#[test]
fn test_course_delta () {
    let a = LatLong::from_degrees( 37.0, -122.0);
    let b = LatLong::from_degrees( 37.1, -122.0);

    let pp = PointPair::new( state( a, 10_000.0, 250.0, 350.0), state( b, 10_000.0, 250.0, 10.0)).unwrap();
    assert!( (pp.course_delta() - 20.0).abs() < 1e-9);

    let pp = PointPair::new( state( a, 10_000.0, 250.0, 10.0), state( b, 10_000.0, 250.0, 200.0)).unwrap();
    assert!( (pp.course_delta() - 170.0).abs() < 1e-9);
}

#[test]
fn test_non_simultaneous_states () {
    let a = LatLong::from_degrees( 37.0, -122.0);
    let s1 = state( a, 10_000.0, 250.0, 0.0);
    let mut s2 = s1;
    s2.time = s1.time + TimeDelta::seconds(1);

    let res = PointPair::new( s1, s2);
    println!("non simultaneous: {:?}", res);
    assert!( matches!( res, Err(OdinAriaError::ArgumentError(_))));
}

#[test]
fn test_near_parallel_courses () {
    let a = LatLong::from_degrees( 37.0, -122.0);
    let b = a.project( Course::from_degrees(90.0), nautical_miles(1.0));
    let horizon = TimeDelta::milliseconds( (MAX_CPA_HORIZON_HOURS * 3_600_000.0) as i64);

    // slowly converging, the analytic CPA is millions of hours out
    let pp = PointPair::new( state( a, 10_000.0, 250.0, 0.0), state( b, 10_000.0, 250.0, 359.9999999)).unwrap();
    let cpa = pp.closest_point_of_approach();
    println!("near parallel cpa: {:?}", cpa);
    assert_eq!( cpa.time_until_cpa, horizon);
    assert!( (in_nautical_miles( cpa.distance_at_cpa) - 1.0).abs() < 0.001);

    // numerically parallel
    let pp = PointPair::new( state( a, 10_000.0, 250.0, 1e-14), state( b, 10_000.0, 250.0, 0.0)).unwrap();
    let cpa = pp.closest_point_of_approach();
    assert!( cpa.time_until_cpa >= TimeDelta::zero() && cpa.time_until_cpa <= horizon);
    assert!( (in_nautical_miles( cpa.distance_at_cpa) - 1.0).abs() < 0.001);
}

#[test]
fn test_great_circle () {
    let a = LatLong::from_degrees( 0.0, 0.0);
    let b = LatLong::from_degrees( 0.0, 1.0);

    // one degree of longitude on the equator of the mean earth sphere
    let d = a.distance_to( &b).get::<uom::si::length::meter>();
    println!("1 deg at equator: {d:.1}m");
    assert!( (d - 111_195.0).abs() < 10.0);

    assert!( (a.course_to( &b).degrees() - 90.0).abs() < 1e-9);
    assert!( (b.course_to( &a).degrees() - 270.0).abs() < 1e-9);
    assert!( a.course_to( &LatLong::from_degrees( 1.0, 0.0)).degrees().abs() < 1e-9);

    let c = LatLong::from_degrees( 37.0, -122.0);
    let p = c.project( Course::from_degrees(45.0), nautical_miles(20.0));
    assert!( (in_nautical_miles( c.distance_to( &p)) - 20.0).abs() < 1e-6);
    assert!( (c.course_to( &p).degrees() - 45.0).abs() < 1e-6);
}
