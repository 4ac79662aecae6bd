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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinAriaError>;

/// errors of the analysis engine are precondition violations of the caller. Numerical degeneracies
/// (parallel courses, coincident positions, CPA in the past) are not errors
#[derive(Error,Debug)]
pub enum OdinAriaError {
    #[error("tracks do not overlap in time {0}")]
    NoOverlapError(String),

    #[error("time outside of window {0}")]
    OutOfWindowError(String),

    #[error("invalid separation series {0}")]
    InvalidSeriesError(String),

    #[error("invalid track {0}")]
    InvalidTrackError(String),

    #[error("invalid argument {0}")]
    ArgumentError(String),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("invalid config value {0}")]
    InvalidConfigError(String),

    #[error("duration parse error {0}")]
    DurationParseError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),
}

macro_rules! out_of_window {
    ($fmt:literal $(, $arg:expr )* ) => { $crate::errors::OdinAriaError::OutOfWindowError( format!( $fmt $(, $arg)* )) };
}
pub (crate) use out_of_window;

macro_rules! invalid_series {
    ($fmt:literal $(, $arg:expr )* ) => { $crate::errors::OdinAriaError::InvalidSeriesError( format!( $fmt $(, $arg)* )) };
}
pub (crate) use invalid_series;

macro_rules! invalid_track {
    ($fmt:literal $(, $arg:expr )* ) => { $crate::errors::OdinAriaError::InvalidTrackError( format!( $fmt $(, $arg)* )) };
}
pub (crate) use invalid_track;

macro_rules! arg_error {
    ($fmt:literal $(, $arg:expr )* ) => { $crate::errors::OdinAriaError::ArgumentError( format!( $fmt $(, $arg)* )) };
}
pub (crate) use arg_error;
