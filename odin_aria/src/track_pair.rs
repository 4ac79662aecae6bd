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

use chrono::{DateTime,Utc};
use once_cell::sync::OnceCell;
use uom::si::f64::Length;

use crate::{
    debug,
    config::AriaConfig,
    time_window::TimeWindow,
    track::{Track,TrajectorySource},
    point_pair::PointPair,
    separation::{SeparationTimeSeries,TimeStepping},
    errors::{OdinAriaError,Result,out_of_window,arg_error}
};

/// two time-overlapping tracks plus their lazily computed separation series.
///
/// The series is computed at most once (on first access) and is read-only afterwards, which makes
/// it safe to share a TrackPair between threads if the track type is `Send + Sync`.
#[derive(Debug)]
pub struct TrackPair<S: TrajectorySource = Track> {
    track1: S,
    track2: S,
    overlap: TimeWindow,
    time_stepping: TimeStepping,
    separation: OnceCell<SeparationTimeSeries>,
}

impl<S: TrajectorySource> TrackPair<S> {

    /// uses dynamic time stepping. Fails if the tracks do not overlap in time
    pub fn new (track1: S, track2: S)->Result<Self> {
        Self::with_time_stepping( track1, track2, TimeStepping::Dynamic)
    }

    pub fn with_time_stepping (track1: S, track2: S, time_stepping: TimeStepping)->Result<Self> {
        let w1 = track1.time_window();
        let w2 = track2.time_window();

        let overlap = w1.overlap(&w2).ok_or_else( || {
            OdinAriaError::NoOverlapError( format!("{} {} and {} {}", track1.id(), w1, track2.id(), w2))
        })?;

        Ok( TrackPair { track1, track2, overlap, time_stepping, separation: OnceCell::new() } )
    }

    /// uses the time stepping of `config`, which is what [`crate::PairAnalysis::new`] expects
    pub fn with_config (track1: S, track2: S, config: &AriaConfig)->Result<Self> {
        Self::with_time_stepping( track1, track2, config.time_stepping)
    }

    /// the stepping can only be changed before the separation series was computed
    pub fn set_time_stepping (&mut self, time_stepping: TimeStepping)->Result<()> {
        if self.separation.get().is_some() {
            Err( arg_error!("separation series of {}/{} already computed", self.track1.id(), self.track2.id()))
        } else {
            self.time_stepping = time_stepping;
            Ok(())
        }
    }

    pub fn track1 (&self)->&S { &self.track1 }
    pub fn track2 (&self)->&S { &self.track2 }
    pub fn time_overlap (&self)->TimeWindow { self.overlap }
    pub fn time_stepping (&self)->TimeStepping { self.time_stepping }

    pub fn overlap_contains (&self, t: DateTime<Utc>)->bool {
        self.overlap.contains(t)
    }

    /// interpolated states of both tracks at time `t`, which has to be within the overlap
    pub fn points_at (&self, t: DateTime<Utc>)->Result<PointPair> {
        if !self.overlap.contains(t) {
            return Err( out_of_window!("{} not in track overlap {}", t, self.overlap))
        }

        let s1 = self.track1.state_at(t).ok_or_else( || out_of_window!("no state for {} at {}", self.track1.id(), t))?;
        let s2 = self.track2.state_at(t).ok_or_else( || out_of_window!("no state for {} at {}", self.track2.id(), t))?;
        PointPair::new( s1, s2)
    }

    /// the memoized separation series. Concurrent first callers block until a single computation is done
    pub fn separation (&self)->Result<&SeparationTimeSeries> {
        self.separation.get_or_try_init( || {
            debug!("computing separation series for {}/{}", self.track1.id(), self.track2.id());
            SeparationTimeSeries::compute( self, self.time_stepping)
        })
    }

    pub fn is_separation_computed (&self)->bool {
        self.separation.get().is_some()
    }

    /// true if the lateral separation ever gets down to `lateral`
    pub fn come_within (&self, lateral: Length)->Result<bool> {
        Ok( self.separation()?.comes_within( lateral) )
    }

    /// true if lateral and vertical separation are simultaneously within the given limits
    pub fn come_within_both (&self, lateral: Length, vertical: Length)->Result<bool> {
        Ok( self.separation()?.comes_within_both( lateral, vertical) )
    }
}
