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

//! Client configuration helpers.

/// The client configuration used by all the Nimbus clients.
pub type ClientConfig =
    gax::client_builder::internal::ClientConfig<auth::credentials::Credentials>;

/// The environment variable used to select the default region.
pub const REGION_VAR: &str = "NIMBUS_REGION";

/// The region used when neither the configuration nor the environment set one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Returns the region for a client.
///
/// The configured region takes precedence, then the `NIMBUS_REGION`
/// environment variable, and finally [DEFAULT_REGION].
pub fn resolve_region(configured: Option<&str>) -> String {
    if let Some(r) = configured.filter(|r| !r.is_empty()) {
        return r.to_string();
    }
    std::env::var(REGION_VAR)
        .ok()
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[test]
    #[serial]
    fn region_default() {
        let _e = ScopedEnv::remove(REGION_VAR);
        assert_eq!(resolve_region(None), DEFAULT_REGION);
        assert_eq!(resolve_region(Some("")), DEFAULT_REGION);
    }

    #[test]
    #[serial]
    fn region_from_env() {
        let _e = ScopedEnv::set(REGION_VAR, "eu-west-1");
        assert_eq!(resolve_region(None), "eu-west-1");
        assert_eq!(resolve_region(Some("ap-south-1")), "ap-south-1");
    }

    #[test]
    #[serial]
    fn region_empty_env() {
        let _e = ScopedEnv::set(REGION_VAR, "");
        assert_eq!(resolve_region(None), DEFAULT_REGION);
    }
}
