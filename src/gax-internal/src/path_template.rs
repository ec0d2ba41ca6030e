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

//! Expands request path templates.
//!
//! REST-XML operations place some request fields in the path, for example
//! `/{Bucket}?lifecycle`. These path parameters are required: the request
//! cannot be placed on the wire without them, so a missing parameter is a
//! [binding][gax::error::Error::is_binding] error.
//!
//! Parameters are percent-encoded. A greedy parameter, such as `{Key+}`, may
//! contain `/` separators, which are not encoded.

use gax::Result;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const GREEDY: &AsciiSet = &SEGMENT.remove(b'/');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("unterminated parameter in path template {0}")]
    UnterminatedParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Replaces each `{Name}` in `template` with the value of `Name` in `params`.
///
/// Anything after the first `?` is part of the query string and is copied
/// verbatim.
pub fn expand(template: &str, params: &[(&str, Option<String>)]) -> Result<String> {
    let (path, query) = match template.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (template, None),
    };
    let mut expanded = String::with_capacity(template.len());
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        expanded.push_str(&rest[..start]);
        let end = rest[start..].find('}').ok_or_else(|| {
            gax::error::Error::binding(Error::UnterminatedParameter(template.to_string()))
        })?;
        let name = &rest[start + 1..start + end];
        let (name, set) = match name.strip_suffix('+') {
            Some(n) => (n, GREEDY),
            None => (name, SEGMENT),
        };
        let value = params
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(name))?;
        expanded.extend(utf8_percent_encode(value, set));
        rest = &rest[start + end + 1..];
    }
    expanded.push_str(rest);
    if let Some(q) = query {
        expanded.push('?');
        expanded.push_str(q);
    }
    Ok(expanded)
}
