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

//! Cloud Resource Manager API, tag bindings.
//!
//! This crate lists the tag bindings attached to a resource. The
//! `ListTagBindings` RPC is paginated, the client hides the pagination behind
//! a stream of pages or a stream of items.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use tagbindings_resourcemanager_v3::client::TagBindings;
//! let client = TagBindings::builder().build().await?;
//! let mut items = client
//!     .list_tag_bindings()
//!     .set_parent("//cloudresourcemanager.googleapis.com/projects/123")
//!     .by_item();
//! while let Some(binding) = items.next().await.transpose()? {
//!     println!("{binding:?}");
//! }
//! # Ok(()) }
//! ```

pub use gax::Result;
pub use gax::error::Error;

/// Request builders returned by the client.
pub mod builder;

/// The client used by applications.
pub mod client;

/// The messages exchanged with the service.
pub mod model;

/// Traits to mock the client.
pub mod stub;

pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod tracing;
pub(crate) mod transport;

/// The default endpoint for the Cloud Resource Manager API.
pub const DEFAULT_ENDPOINT: &str = "https://cloudresourcemanager.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            format!("gl-rust rest/reqwest gccl/{VERSION}")
        };
        pub(crate) static ref DEFAULT_USER_AGENT: String = {
            format!("{NAME}/{VERSION}")
        };
    }
}
