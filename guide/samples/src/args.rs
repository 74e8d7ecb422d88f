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

use anyhow::bail;
use clap::Parser;
use humantime::parse_duration;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The full resource name of the resource to list tag bindings for.
    ///
    /// For example: `//cloudresourcemanager.googleapis.com/projects/123`.
    pub parent: String,

    /// The maximum number of tag bindings in each page.
    ///
    /// The service caps this at 300 and uses 100 when unset.
    #[arg(long)]
    pub page_size: Option<i32>,

    /// Resume the listing from this page token.
    #[arg(long)]
    pub page_token: Option<String>,

    /// Override the service endpoint.
    #[arg(long, env = "TAGBINDINGS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// The OAuth2 access token, for example the output of
    /// `gcloud auth print-access-token`.
    #[arg(long, env = "GOOGLE_CLOUD_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// The timeout for each page request.
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.parent.is_empty() {
            bail!("the parent resource name must not be empty")
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            bail!("invalid timeout, should be > 0")
        }
        Ok(())
    }
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("parent", &self.parent)
            .field("page_size", &self.page_size)
            .field("page_token", &self.page_token)
            .field("endpoint", &self.endpoint)
            .field("access_token", &self.access_token.as_ref().map(|_| "[censored]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
