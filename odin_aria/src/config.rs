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

use std::{fs, path::Path};
use chrono::TimeDelta;
use uom::si::f64::{Length,Velocity};
use serde::{Serialize,Deserialize};

use crate::{
    errors::{OdinAriaError,Result},
    units::{self, feet, nautical_miles, knots},
    separation::TimeStepping,
    prediction::CoefficientSet,
};

/// all tunable constants of the analysis. The defaults are the empirically tuned values that
/// downstream consumers rely on for output parity, so change with care.
///
/// Config files are RON, durations are human readable strings ("30s"), lengths are given
/// in feet unless the field name says otherwise and speeds in knots. Missing fields use the default.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct AriaConfig {
    pub time_stepping: TimeStepping,

    /// coefficients used if the average altitude of both aircraft is above `altitude_threshold`
    pub high_altitude_coefs: CoefficientSet,
    /// coefficients used at or below `altitude_threshold`
    pub low_altitude_coefs: CoefficientSet,
    #[serde(serialize_with="units::ser_length_as_feet", deserialize_with="units::de_length_from_feet")]
    pub altitude_threshold: Length,

    /// how far back we look to decide if an aircraft is established at its altitude
    #[serde(serialize_with="units::ser_time_delta", deserialize_with="units::de_time_delta")]
    pub level_flight_window: TimeDelta,
    /// max altitude range within `level_flight_window` to be considered level
    #[serde(serialize_with="units::ser_length_as_feet", deserialize_with="units::de_length_from_feet")]
    pub level_altitude_tolerance: Length,

    #[serde(serialize_with="units::ser_length_as_feet", deserialize_with="units::de_length_from_feet")]
    pub vertical_penalty_scale: Length,
    #[serde(serialize_with="units::ser_velocity_as_knots", deserialize_with="units::de_velocity_from_knots")]
    pub lateral_closure_threshold: Velocity,

    // snapshot constraints
    #[serde(serialize_with="units::ser_length_as_feet", deserialize_with="units::de_length_from_feet")]
    pub closest_lateral_vertical_limit: Length,
    #[serde(serialize_with="units::ser_length_as_nautical_miles", deserialize_with="units::de_length_from_nautical_miles")]
    pub closest_vertical_near_limit_nm: Length,
    #[serde(serialize_with="units::ser_length_as_nautical_miles", deserialize_with="units::de_length_from_nautical_miles")]
    pub closest_vertical_far_limit_nm: Length,
}

impl Default for AriaConfig {
    fn default()->Self {
        AriaConfig {
            time_stepping: TimeStepping::Dynamic,
            high_altitude_coefs: CoefficientSet::new( nautical_miles(0.25), feet(250.0), TimeDelta::milliseconds(30_000)),
            low_altitude_coefs: CoefficientSet::new( nautical_miles(0.25), feet(150.0), TimeDelta::milliseconds(30_000)),
            altitude_threshold: feet(18_000.0),
            level_flight_window: TimeDelta::seconds(30),
            level_altitude_tolerance: feet(100.0),
            vertical_penalty_scale: feet(700.0),
            lateral_closure_threshold: knots(3.0),
            closest_lateral_vertical_limit: feet(1000.0),
            closest_vertical_near_limit_nm: nautical_miles(3.0),
            closest_vertical_far_limit_nm: nautical_miles(5.0),
        }
    }
}

impl AriaConfig {
    /// parse and [check](Self::check) a RON config
    pub fn from_ron_str (s: &str)->Result<Self> {
        let config: AriaConfig = ron::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    /// score coefficients and fixed time steps have to be positive
    pub fn check (&self)->Result<()> {
        self.high_altitude_coefs.check( "high_altitude_coefs")?;
        self.low_altitude_coefs.check( "low_altitude_coefs")?;

        if let TimeStepping::Fixed(dt) = self.time_stepping {
            if dt <= TimeDelta::zero() {
                return Err( OdinAriaError::InvalidConfigError( format!("fixed time step not positive: {dt}")))
            }
        }
        Ok(())
    }

    pub fn with_time_stepping (mut self, time_stepping: TimeStepping)->Self {
        self.time_stepping = time_stepping;
        self
    }
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<AriaConfig> {
    let s = fs::read_to_string( path.as_ref())?;
    AriaConfig::from_ron_str( s.as_str())
}
