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

//! unit helpers for the uom quantities used throughout the analysis. Distances are [`Length`],
//! speeds [`Velocity`] and physical elapsed time in rate computations is [`Time`]. Time points and
//! signed durations are chrono types, which we convert into uom [`Time`] at the boundary so that
//! `Velocity * Time = Length` stays type checked.

use chrono::TimeDelta;
use uom::si::{
    f64::{Length,Velocity,Time},
    length::{foot,meter,nautical_mile},
    velocity::{knot,foot_per_minute},
    time::{millisecond,hour}
};
use serde::{Serialize,Deserialize,ser::Serializer,de::Deserializer};

#[inline]
pub fn feet (len: f64)->Length { Length::new::<foot>(len) }

#[inline]
pub fn nautical_miles (len: f64)->Length { Length::new::<nautical_mile>(len) }

#[inline]
pub fn meters (len: f64)->Length { Length::new::<meter>(len) }

#[inline]
pub fn knots (v: f64)->Velocity { Velocity::new::<knot>(v) }

#[inline]
pub fn feet_per_minute (v: f64)->Velocity { Velocity::new::<foot_per_minute>(v) }

#[inline]
pub fn in_feet (len: Length)->f64 { len.get::<foot>() }

#[inline]
pub fn in_nautical_miles (len: Length)->f64 { len.get::<nautical_mile>() }

#[inline]
pub fn in_knots (v: Velocity)->f64 { v.get::<knot>() }

#[inline]
pub fn in_feet_per_minute (v: Velocity)->f64 { v.get::<foot_per_minute>() }

//--- chrono <-> uom time

/// note this is only millisecond accurate, which is the resolution of all our time computations
#[inline]
pub fn to_uom_time (d: TimeDelta)->Time {
    Time::new::<millisecond>( d.num_milliseconds() as f64)
}

/// truncates sub-millisecond fractions, saturates at the representable range
#[inline]
pub fn to_time_delta (t: Time)->TimeDelta {
    millis_to_time_delta( t.get::<millisecond>())
}

#[inline]
pub fn hours_to_time_delta (h: f64)->TimeDelta {
    millis_to_time_delta( h * 3_600_000.0)
}

// float to int casts saturate at i64::MIN which is one below the TimeDelta minimum
fn millis_to_time_delta (ms: f64)->TimeDelta {
    TimeDelta::milliseconds( (ms as i64).max( -i64::MAX))
}

#[inline]
pub fn in_hours (d: TimeDelta)->f64 {
    d.num_milliseconds() as f64 / 3_600_000.0
}

/// the rate at which a distance changed over a given (non-zero) duration
pub fn rate (delta: Length, dt: TimeDelta)->Velocity {
    delta / to_uom_time(dt)
}

//--- serialization support

pub fn ser_length_as_feet<S: Serializer> (length: &Length, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( length.get::<foot>())
}

pub fn de_length_from_feet <'a,D>(deserializer: D) -> Result<Length,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( Length::new::<foot>(v) )
}

pub fn ser_length_as_nautical_miles<S: Serializer> (length: &Length, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( length.get::<nautical_mile>())
}

pub fn de_length_from_nautical_miles <'a,D>(deserializer: D) -> Result<Length,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( Length::new::<nautical_mile>(v) )
}

pub fn ser_velocity_as_knots<S: Serializer> (v: &Velocity, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( v.get::<knot>())
}

pub fn de_velocity_from_knots <'a,D>(deserializer: D) -> Result<Velocity,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( Velocity::new::<knot>(v) )
}

pub fn ser_time_delta_as_millis<S: Serializer> (d: &TimeDelta, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_i64( d.num_milliseconds())
}

/// the counterpart of [`de_time_delta`]
pub fn ser_time_delta<S: Serializer> (d: &TimeDelta, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_str( format!("{}ms", d.num_milliseconds()).as_str())
}

/// accepts human readable durations such as "30s" or "2.5s"
pub fn de_time_delta <'a,D>(deserializer: D) -> Result<TimeDelta,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize(deserializer)?;
    parse_time_delta( s.as_str()).map_err( |e| serde::de::Error::custom(e.to_string()))
}

pub fn parse_time_delta (s: &str)->crate::errors::Result<TimeDelta> {
    use crate::errors::OdinAriaError::DurationParseError;
    let d = parse_duration::parse(s).map_err( |e| DurationParseError( format!("'{}': {:?}", s, e)))?;
    TimeDelta::from_std(d).map_err( |e| DurationParseError( format!("'{}': {:?}", s, e)))
}
