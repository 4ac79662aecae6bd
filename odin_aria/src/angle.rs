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
use serde::{Serialize,Deserialize};

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// signed shortest rotation (in degrees) that turns `from` into `to`, within [-180,180]
#[inline]
pub fn angle_difference (from: f64, to: f64) -> f64 {
    normalize_180( to - from)
}

/// a true course (clockwise from north) in degrees, normalized to [0,360)
#[derive(Debug,Clone,Copy,PartialEq,PartialOrd,Serialize,Deserialize)]
#[serde(transparent)]
pub struct Course(f64);

impl Course {
    pub fn from_degrees (deg: f64)->Self { Course( normalize_360(deg)) }
    pub fn from_radians (rad: f64)->Self { Course( normalize_360( rad.to_degrees())) }

    pub fn degrees (&self)->f64 { self.0 }
    pub fn radians (&self)->f64 { self.0.to_radians() }

    /// signed difference to another course
    pub fn difference_to (&self, other: Course)->f64 {
        angle_difference( self.0, other.0)
    }

    /// unsigned difference to another course, within [0,180]
    pub fn abs_difference (&self, other: Course)->f64 {
        self.difference_to(other).abs()
    }

    /// interpolate along the shorter arc. `frac` is within [0,1]
    pub fn interpolate (&self, other: Course, frac: f64)->Course {
        Course::from_degrees( self.0 + self.difference_to(other) * frac)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}
