// Copyright 2024 Google LLC
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

use gax::options::RequestOptions;

/// Configuration collected by [crate::client::ClientBuilder].
#[derive(Clone, Default)]
pub(crate) struct ClientConfig {
    pub endpoint: Option<String>,
    pub access_token: Option<String>,
    pub tracing: bool,
    /// Defaults for any option not set on each request.
    pub default_options: RequestOptions,
}

impl ClientConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(crate::DEFAULT_ENDPOINT)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("access_token", &Redacted(&self.access_token))
            .field("tracing", &self.tracing)
            .field("default_options", &self.default_options)
            .finish()
    }
}

// Redacts the access token in debug output.
pub(crate) struct Redacted<'a>(pub &'a Option<String>);

impl std::fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Some([censored])"),
            None => f.write_str("None"),
        }
    }
}
