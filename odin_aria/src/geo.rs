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
use ::geo::{Point, Haversine, Distance, Bearing, Destination};
use uom::si::{f64::Length, length::meter};
use serde::{Serialize,Serializer,ser::SerializeStruct};

use crate::angle::Course;

/// a geodetic position on a spherical earth. The wrapped point stores x = longitude, y = latitude (degrees),
/// which is what the [geo] haversine algorithms expect
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LatLong(pub Point<f64>);

impl LatLong {
    pub fn from_degrees (lat_deg: f64, lon_deg: f64)->Self {
        LatLong( Point::new( lon_deg, lat_deg))
    }

    pub fn latitude_degrees (&self)->f64 { self.0.y() }
    pub fn longitude_degrees (&self)->f64 { self.0.x() }

    /// great circle (haversine) distance
    pub fn distance_to (&self, other: &LatLong)->Length {
        Length::new::<meter>( Haversine.distance( self.0, other.0))
    }

    /// initial great circle bearing towards `other`
    pub fn course_to (&self, other: &LatLong)->Course {
        Course::from_degrees( Haversine.bearing( self.0, other.0))
    }

    /// destination point when travelling `dist` along the great circle with initial `course`
    pub fn project (&self, course: Course, dist: Length)->LatLong {
        let p = Haversine.destination( self.0, course.degrees(), dist.get::<meter>());
        LatLong::from_degrees( p.y(), crate::angle::normalize_180( p.x()))
    }

    /// linear interpolation of latitude and longitude, which is accurate enough between track points
    pub fn interpolate (&self, other: &LatLong, frac: f64)->LatLong {
        let lat = self.latitude_degrees() + (other.latitude_degrees() - self.latitude_degrees()) * frac;
        let lon = self.longitude_degrees() + (other.longitude_degrees() - self.longitude_degrees()) * frac;
        LatLong::from_degrees( lat, lon)
    }

    /// quick average, not valid across the antimeridian
    pub fn avg (&self, other: &LatLong)->LatLong {
        self.interpolate( other, 0.5)
    }
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.5},{:.5}]", self.longitude_degrees(), self.latitude_degrees())
    }
}

impl Serialize for LatLong {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("LatLong", 2)?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.serialize_field("lon", &self.longitude_degrees())?;
        state.end()
    }
}
