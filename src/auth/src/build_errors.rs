// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors created during credentials construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The environment does not define the named variable.
    pub fn is_missing_variable(&self) -> bool {
        matches!(self.0, ErrorKind::MissingVariable(_))
    }

    /// A required field was missing or empty.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// A variable is defined, but its value cannot be used.
    pub fn is_invalid_variable(&self) -> bool {
        matches!(self.0, ErrorKind::InvalidVariable(_, _))
    }

    pub(crate) fn missing_variable(name: &'static str) -> Error {
        Error(ErrorKind::MissingVariable(name))
    }

    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    pub(crate) fn invalid_variable<T>(name: &'static str, source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::InvalidVariable(name, source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the environment variable {0} is not set")]
    MissingVariable(&'static str),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("cannot use the value of the environment variable {0}: {1}")]
    InvalidVariable(&'static str, #[source] BoxError),
}
