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

//! Per request options.
//!
//! Applications sometimes need to change the behavior of a single call, for
//! example, to use a shorter timeout. The request builders returned by each
//! client method implement the [RequestOptionsBuilder] trait where
//! applications can override the client defaults.

use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
}

impl RequestOptions {
    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the user agent prefix.
    ///
    /// The client always sends its own identification. Applications may add
    /// a prefix, typically the name and version of the application.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the per-attempt timeout.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Fills any unset option with the corresponding value in `defaults`.
    pub fn with_defaults(mut self, defaults: &RequestOptions) -> Self {
        if self.user_agent.is_none() {
            self.user_agent = defaults.user_agent.clone();
        }
        if self.attempt_timeout.is_none() {
            self.attempt_timeout = defaults.attempt_timeout;
        }
        self
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// Each client method returns a request builder. These builders implement
/// this trait, so applications can write:
///
/// ```ignore
/// use tagbindings_gax::options::RequestOptionsBuilder;
/// let page = client
///     .list_tag_bindings()
///     .set_parent("//cloudresourcemanager.googleapis.com/projects/123")
///     .with_attempt_timeout(std::time::Duration::from_secs(5))
///     .send()
///     .await?;
/// ```
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;
}

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements [RequestOptionsBuilder] for every request builder.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}
