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

//! Static descriptions of each service.

/// The wire protocol used by a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// JSON request and response bodies.
    ///
    /// All operations are `POST /`, the operation is identified by the
    /// `x-nimbus-target` header, formatted as `{target_prefix}.{operation}`.
    Json { target_prefix: &'static str },
    /// XML bodies, with the operation identified by the method and path.
    RestXml,
}

/// Describes how to reach and sign requests for a service.
#[derive(Clone, Copy, Debug)]
pub struct ServiceInfo {
    /// The service name used in the signing scope.
    pub signing_name: &'static str,
    /// The first component of the regional endpoint host name.
    pub endpoint_prefix: &'static str,
    pub protocol: Protocol,
    /// Services without regional endpoints use this instead.
    pub global_endpoint: Option<&'static str>,
    /// Services with a global endpoint sign their requests for a fixed region.
    pub signing_region: Option<&'static str>,
}

impl ServiceInfo {
    /// The default endpoint for the service in `region`.
    pub fn endpoint(&self, region: &str) -> String {
        match self.global_endpoint {
            Some(e) => e.to_string(),
            None => format!("https://{}.{region}.nimbusapis.com", self.endpoint_prefix),
        }
    }

    /// The region used to sign requests, given the client's region.
    pub fn signing_region<'a>(&self, region: &'a str) -> &'a str {
        self.signing_region.unwrap_or(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONAL: ServiceInfo = ServiceInfo {
        signing_name: "logs",
        endpoint_prefix: "logs",
        protocol: Protocol::Json {
            target_prefix: "Logs_20140328",
        },
        global_endpoint: None,
        signing_region: None,
    };

    const GLOBAL: ServiceInfo = ServiceInfo {
        signing_name: "dns",
        endpoint_prefix: "dns",
        protocol: Protocol::RestXml,
        global_endpoint: Some("https://dns.nimbusapis.com"),
        signing_region: Some("us-east-1"),
    };

    #[test]
    fn regional() {
        assert_eq!(
            REGIONAL.endpoint("eu-west-1"),
            "https://logs.eu-west-1.nimbusapis.com"
        );
        assert_eq!(REGIONAL.signing_region("eu-west-1"), "eu-west-1");
    }

    #[test]
    fn global() {
        assert_eq!(GLOBAL.endpoint("eu-west-1"), "https://dns.nimbusapis.com");
        assert_eq!(GLOBAL.signing_region("eu-west-1"), "us-east-1");
    }
}
