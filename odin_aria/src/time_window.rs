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

use std::fmt;
use chrono::{DateTime,Utc,TimeDelta};
use serde::{Serialize,Deserialize};

use crate::errors::{Result,arg_error};

/// a closed time interval [start,end]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new (start: DateTime<Utc>, end: DateTime<Utc>)->Result<Self> {
        if start <= end {
            Ok( TimeWindow{start,end} )
        } else {
            Err( arg_error!("window start {} after end {}", start, end))
        }
    }

    pub fn start (&self)->DateTime<Utc> { self.start }
    pub fn end (&self)->DateTime<Utc> { self.end }
    pub fn duration (&self)->TimeDelta { self.end - self.start }

    /// inclusive of both ends
    pub fn contains (&self, t: DateTime<Utc>)->bool {
        t >= self.start && t <= self.end
    }

    pub fn overlap (&self, other: &TimeWindow)->Option<TimeWindow> {
        let start = self.start.max( other.start);
        let end = self.end.min( other.end);
        if start <= end { Some( TimeWindow{start,end}) } else { None }
    }

    /// relative position of `t` within this window (0 at start, 1 at end). Zero length windows report 0
    pub fn fraction_of_range (&self, t: DateTime<Utc>)->f64 {
        let len = self.duration().num_milliseconds();
        if len == 0 {
            0.0
        } else {
            (t - self.start).num_milliseconds() as f64 / len as f64
        }
    }

    /// times from start in `step` increments, always including the window end as the last element
    pub fn stepped_iteration (&self, step: TimeDelta)->Result<Vec<DateTime<Utc>>> {
        if step <= TimeDelta::zero() {
            return Err( arg_error!("time step has to be positive: {}", step))
        }

        let mut times: Vec<DateTime<Utc>> = Vec::new();
        let mut t = self.start;
        while t < self.end {
            times.push(t);
            t = t + step;
        }
        times.push( self.end);

        Ok(times)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start.format("%Y-%m-%dT%H:%M:%S%.3fZ"), self.end.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}
