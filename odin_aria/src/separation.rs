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

//! lateral and vertical separation of a track pair sampled over the time overlap of both tracks.
//!
//! Series are immutable once built. All time based queries require the query time to be within
//! the [`TimeWindow`] spanned by the samples (inclusive of both ends), which is reported as
//! [`OdinAriaError::OutOfWindowError`] otherwise.

use std::{cmp::Ordering, fmt};
use chrono::{DateTime,Utc,TimeDelta};
use uom::si::f64::{Length,Velocity};
use itertools::Itertools;
use serde::{Serialize,Deserialize};

use crate::{
    debug, trace,
    time_window::TimeWindow,
    track::TrajectorySource,
    track_pair::TrackPair,
    units::{self, nautical_miles, to_uom_time, to_time_delta, in_nautical_miles},
    errors::{OdinAriaError,Result,out_of_window,invalid_series,arg_error}
};

/// the two separation channels of a series
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Axis {
    Lateral,
    Vertical
}

impl Axis {
    pub fn other (&self)->Axis {
        match self {
            Axis::Lateral => Axis::Vertical,
            Axis::Vertical => Axis::Lateral
        }
    }
}

/// how a series is sampled over the track overlap
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum TimeStepping {
    /// step size depends on the current lateral separation, see [`dynamic_time_step`]
    #[default]
    Dynamic,

    /// constant step, the window end is always included
    Fixed( #[serde(serialize_with="units::ser_time_delta", deserialize_with="units::de_time_delta")] TimeDelta )
}

/// the adaptive step size table. Denser sampling when aircraft are closer
pub fn dynamic_time_step (lateral: Length)->TimeDelta {
    let nm = in_nautical_miles(lateral);

    if nm < 15.0 { TimeDelta::milliseconds(2_500) }
    else if nm < 30.0 { TimeDelta::milliseconds(5_000) }
    else if nm < 50.0 { TimeDelta::milliseconds(10_000) }
    else { TimeDelta::milliseconds(20_000) }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct SeparationSample {
    pub time: DateTime<Utc>,
    #[serde(serialize_with="units::ser_length_as_nautical_miles")]
    pub lateral: Length,
    #[serde(serialize_with="units::ser_length_as_feet")]
    pub vertical: Length,
}

impl SeparationSample {
    pub fn new (time: DateTime<Utc>, lateral: Length, vertical: Length)->Self {
        SeparationSample { time, lateral, vertical }
    }

    pub fn separation (&self, axis: Axis)->Length {
        match axis {
            Axis::Lateral => self.lateral,
            Axis::Vertical => self.vertical
        }
    }
}

impl fmt::Display for SeparationSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.3}nm {:.0}ft", self.time.format("%H:%M:%S%.3f"), in_nautical_miles(self.lateral), units::in_feet(self.vertical))
    }
}

#[inline]
fn cmp_length (a: &Length, b: &Length)->Ordering {
    a.value.total_cmp( &b.value)
}

/// an ordered sequence of at least two separation samples with strictly increasing times
#[derive(Debug,Clone,Serialize)]
pub struct SeparationTimeSeries {
    window: TimeWindow,
    samples: Vec<SeparationSample>,
}

impl SeparationTimeSeries {

    pub fn new (samples: Vec<SeparationSample>)->Result<Self> {
        if samples.len() < 2 {
            return Err( invalid_series!("at least 2 samples required, got {}", samples.len()))
        }
        if let Some((_,b)) = samples.iter().tuple_windows().find( |(a,b)| a.time >= b.time) {
            return Err( invalid_series!("sample times not strictly increasing at {}", b.time))
        }

        let window = TimeWindow::new( samples[0].time, samples[samples.len()-1].time)?;
        Ok( SeparationTimeSeries { window, samples } )
    }

    /// build from parallel columns
    pub fn from_columns (times: &[DateTime<Utc>], lateral: &[Length], vertical: &[Length])->Result<Self> {
        if times.len() != lateral.len() || times.len() != vertical.len() {
            return Err( invalid_series!("column length mismatch: {} times, {} lateral, {} vertical", times.len(), lateral.len(), vertical.len()))
        }
        let samples = times.iter().zip( lateral.iter()).zip( vertical.iter())
            .map( |((t,l),v)| SeparationSample::new( *t, *l, *v))
            .collect();
        SeparationTimeSeries::new( samples)
    }

    pub fn compute<S: TrajectorySource> (pair: &TrackPair<S>, stepping: TimeStepping)->Result<Self> {
        match stepping {
            TimeStepping::Dynamic => Self::with_dynamic_time_step( pair),
            TimeStepping::Fixed(step) => Self::with_fixed_time_step( pair, step)
        }
    }

    pub fn with_fixed_time_step<S: TrajectorySource> (pair: &TrackPair<S>, step: TimeDelta)->Result<Self> {
        let overlap = pair.time_overlap();
        let samples = overlap.stepped_iteration( step)?.into_iter()
            .map( |t| pair_sample( pair, t))
            .collect::<Result<Vec<SeparationSample>>>()?;

        debug!("fixed step ({}ms) separation series of {} samples over {}", step.num_milliseconds(), samples.len(), overlap);
        SeparationTimeSeries::new( samples)
    }

    /// sample with a step size that depends on the lateral separation at the previous sample
    pub fn with_dynamic_time_step<S: TrajectorySource> (pair: &TrackPair<S>)->Result<Self> {
        let overlap = pair.time_overlap();
        let start = overlap.start();
        let end = overlap.end();

        let mut samples: Vec<SeparationSample> = Vec::new();
        let mut t = start;
        while t < end {
            let sample = pair_sample( pair, t)?;
            samples.push( sample);
            t = t + dynamic_time_step( sample.lateral);
        }

        if samples.last().map( |s| s.time != end).unwrap_or(true) {
            samples.push( pair_sample( pair, end)?);
        }

        debug!("dynamic step separation series of {} samples over {}", samples.len(), overlap);
        SeparationTimeSeries::new( samples)
    }

    pub fn time_window (&self)->TimeWindow { self.window }
    pub fn samples (&self)->&[SeparationSample] { &self.samples }
    pub fn len (&self)->usize { self.samples.len() }

    pub fn times (&self)->impl Iterator<Item=DateTime<Utc>> + '_ {
        self.samples.iter().map( |s| s.time)
    }

    pub fn iter (&self)->impl Iterator<Item=&SeparationSample> {
        self.samples.iter()
    }

    fn check_window (&self, t: DateTime<Utc>)->Result<()> {
        if self.window.contains(t) {
            Ok(())
        } else {
            Err( out_of_window!("{} not in separation series window {}", t, self.window))
        }
    }

    /// exact hit or linear interpolation between the bracketing samples
    pub fn separation_at (&self, axis: Axis, t: DateTime<Utc>)->Result<Length> {
        self.check_window(t)?;

        match self.samples.binary_search_by( |s| s.time.cmp(&t)) {
            Ok(i) => Ok( self.samples[i].separation(axis)),
            Err(i) => { // 0 < i < len since t is within the window but not an exact hit
                let s0 = &self.samples[i-1];
                let s1 = &self.samples[i];
                let frac = TimeWindow::new( s0.time, s1.time)?.fraction_of_range(t);
                let d0 = s0.separation(axis);
                let d1 = s1.separation(axis);
                Ok( d0 + (d1 - d0) * frac )
            }
        }
    }

    pub fn lateral_separation_at (&self, t: DateTime<Utc>)->Result<Length> {
        self.separation_at( Axis::Lateral, t)
    }

    pub fn vertical_separation_at (&self, t: DateTime<Utc>)->Result<Length> {
        self.separation_at( Axis::Vertical, t)
    }

    /// finite difference over the interval that starts at or before `t`. At the last sample the
    /// last interval is used. Positive means the separation shrinks
    pub fn closure_rate_at (&self, axis: Axis, t: DateTime<Utc>)->Result<Velocity> {
        self.check_window(t)?;

        let idx = match self.samples.binary_search_by( |s| s.time.cmp(&t)) {
            Ok(i) => i,
            Err(i) => i - 1
        };
        let idx = if idx == self.samples.len() - 1 { idx - 1 } else { idx };

        let earlier = &self.samples[idx];
        let later = &self.samples[idx+1];
        debug_assert!( later.time > earlier.time);

        Ok( units::rate( earlier.separation(axis) - later.separation(axis), later.time - earlier.time) )
    }

    pub fn lateral_closure_rate_at (&self, t: DateTime<Utc>)->Result<Velocity> {
        self.closure_rate_at( Axis::Lateral, t)
    }

    pub fn vertical_closure_rate_at (&self, t: DateTime<Utc>)->Result<Velocity> {
        self.closure_rate_at( Axis::Vertical, t)
    }

    /// linear extrapolation along the local closure rate. Overshooting zero separation is
    /// reflected (the aircraft pass each other and diverge again), hence the absolute value.
    /// `dt` can reach beyond the series window, only `t` has to be within
    pub fn predicted_separation_after (&self, axis: Axis, t: DateTime<Utc>, dt: TimeDelta)->Result<Length> {
        if dt < TimeDelta::zero() {
            return Err( arg_error!("prediction time step cannot be negative: {}", dt))
        }

        let rate = self.closure_rate_at( axis, t)?;
        let sep = self.separation_at( axis, t)?;
        let closed: Length = rate * to_uom_time(dt);

        Ok( (sep - closed).abs() )
    }

    /// None if the separation is not shrinking at `t`
    pub fn time_until_closure (&self, axis: Axis, t: DateTime<Utc>)->Result<Option<TimeDelta>> {
        let sep = self.separation_at( axis, t)?;
        let rate = self.closure_rate_at( axis, t)?;

        if rate.value > 0.0 {
            Ok( Some( to_time_delta( sep / rate)) )
        } else {
            Ok(None)
        }
    }

    /// the separation on the other axis at the time `axis` is predicted to close. None if `axis`
    /// is not closing at `t`
    pub fn distance_at_other_axis_closure (&self, axis: Axis, t: DateTime<Utc>)->Result<Option<Length>> {
        let Some(dt) = self.time_until_closure( axis, t)? else { return Ok(None) };
        let other = axis.other();

        let rate = self.closure_rate_at( other, t)?;
        let sep = self.separation_at( other, t)?;
        let closed: Length = rate * to_uom_time(dt);

        Ok( Some( (sep - closed).abs()) )
    }

    /// sample with the smallest separation on `axis`, the earliest one if there are several
    pub fn minimum (&self, axis: Axis)->&SeparationSample {
        self.closest( axis, None).unwrap_or( &self.samples[0]) // without constraint there always is a minimum
    }

    /// the earliest sample with minimal `minimize` separation among samples that satisfy the optional
    /// `constraint` (separation on the constraint axis less or equal than the given limit).
    /// Returns None if no sample satisfies the constraint
    pub fn closest (&self, minimize: Axis, constraint: Option<(Axis,Length)>)->Option<&SeparationSample> {
        self.samples.iter()
            .filter( |s| constraint.map( |(axis,limit)| s.separation(axis) <= limit).unwrap_or(true))
            .min_by( |a,b| cmp_length( &a.separation(minimize), &b.separation(minimize)))
    }

    pub fn comes_within (&self, lateral: Length)->bool {
        self.samples.iter().any( |s| s.lateral <= lateral)
    }

    pub fn comes_within_both (&self, lateral: Length, vertical: Length)->bool {
        self.samples.iter().any( |s| s.lateral <= lateral && s.vertical <= vertical)
    }
}

fn pair_sample<S: TrajectorySource> (pair: &TrackPair<S>, t: DateTime<Utc>)->Result<SeparationSample> {
    let points = pair.points_at(t)?;
    let sample = SeparationSample::new( t, points.lateral_distance(), points.altitude_delta());
    trace!("separation sample {}", sample);
    Ok(sample)
}
