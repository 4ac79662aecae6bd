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
use chrono::{DateTime,Utc,TimeDelta};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use odin_aria::{
    analyze_pair, AriaConfig, AircraftState, Track, TrackPair, TimeStepping,
    angle::Course, geo::LatLong,
    units::{feet, knots, nautical_miles},
};

fn make_track (id: &str, start: LatLong, course_deg: f64, speed_kts: f64, alt_ft: f64, n: usize)->Track {
    let t0 = DateTime::<Utc>::from_timestamp_millis( 1_700_000_000_000).unwrap();
    let course = Course::from_degrees( course_deg);
    let states = (0..n).map( |i| {
        let secs = i as f64;
        AircraftState::new(
            t0 + TimeDelta::seconds( i as i64),
            start.project( course, nautical_miles( speed_kts * secs / 3600.0)),
            feet(alt_ft),
            knots(speed_kts),
            course
        )
    }).collect();
    Track::new( id, states).unwrap()
}

/// head-on encounter 120NM apart with 1sec track updates over 20min
fn make_tracks ()->(Track,Track) {
    let a0 = LatLong::from_degrees( 37.0, -122.0);
    let b0 = a0.project( Course::from_degrees(90.0), nautical_miles(120.0)).project( Course::from_degrees(0.0), nautical_miles(1.5));
    (make_track( "a", a0, 90.0, 350.0, 11_000.0, 1200), make_track( "b", b0, 270.0, 320.0, 12_000.0, 1200))
}

fn bench_analysis (c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let (a,b) = make_tracks();

    for (name,stepping) in [("dynamic", TimeStepping::Dynamic), ("fixed_1s", TimeStepping::Fixed( TimeDelta::seconds(1)))] {
        let config = AriaConfig::default().with_time_stepping( stepping);
        group.bench_function( name, |bench| {
            bench.iter(|| {
                // the separation series is memoized, so we need a new pair for each iteration
                let pair = TrackPair::with_config( a.clone(), b.clone(), &config).unwrap();
                black_box( analyze_pair( &pair, &config).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
