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

use std::{sync::Arc, thread};
use odin_aria::{analyze_pair, AriaConfig, TrackPair, Track, SeparationTimeSeries};
use common::*;

fn assert_send_sync<T: Send + Sync> () {}

// run with "cargo test test_shared_pair -- --nocapture"

#[test]
fn test_shared_pair () {
    assert_send_sync::<TrackPair<Track>>();

    let (a,b) = overtaking_pair_tracks();
    let pair = Arc::new( TrackPair::new( a, b).unwrap());

    let handles: Vec<_> = (0..4).map( |_| {
        let pair = pair.clone();
        thread::spawn( move || {
            let series = pair.separation().unwrap();
            let (analysis, _) = analyze_pair( pair.as_ref(), &AriaConfig::default()).unwrap();
            (series as *const SeparationTimeSeries as usize, analysis.riskiest_moment())
        })
    }).collect();

    let results: Vec<_> = handles.into_iter().map( |h| h.join().unwrap()).collect();
    println!("results: {:?}", results);

    // all threads see the same (single) series and compute the same result
    let (p0, r0) = results[0];
    for (p,r) in &results {
        assert_eq!( *p, p0);
        assert_eq!( r.time, r0.time);
        assert_eq!( r.score, r0.score);
    }
    assert_eq!( pair.separation().unwrap() as *const SeparationTimeSeries as usize, p0);
}
