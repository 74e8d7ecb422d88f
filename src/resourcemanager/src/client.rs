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

use crate::config::ClientConfig;
use std::sync::Arc;
use std::time::Duration;

/// Implements a client for the Cloud Resource Manager API tag bindings.
///
/// # Example
/// ```no_run
/// # use tagbindings_resourcemanager_v3::client::TagBindings;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = TagBindings::builder().build().await?;
/// let mut pages = client
///     .list_tag_bindings()
///     .set_parent("//cloudresourcemanager.googleapis.com/projects/123")
///     .by_page();
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("{} bindings", page.tag_bindings.len());
/// }
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `TagBindings` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `TagBindings` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct TagBindings {
    inner: Arc<dyn crate::stub::dynamic::TagBindings>,
}

impl TagBindings {
    /// Returns a builder for [TagBindings].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use tagbindings_resourcemanager_v3::client::TagBindings;
    /// let client = TagBindings::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::TagBindings + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let transport = crate::transport::TagBindings::new(&config)?;
        let inner: Arc<dyn crate::stub::dynamic::TagBindings> = if config.tracing {
            Arc::new(crate::tracing::TagBindings::new(transport))
        } else {
            Arc::new(transport)
        };
        Ok(Self { inner })
    }

    /// Lists the TagBindings for the given Google Cloud resource, as
    /// specified with `parent`.
    ///
    /// NOTE: The `parent` field is expected to be a full resource name:
    /// <https://cloud.google.com/apis/design/resource_names#full_resource_name>
    pub fn list_tag_bindings(&self) -> crate::builder::tag_bindings::ListTagBindings {
        crate::builder::tag_bindings::ListTagBindings::new(self.inner.clone())
    }
}

/// Configures and creates a [TagBindings] client.
///
/// # Example
/// ```no_run
/// # use tagbindings_resourcemanager_v3::client::TagBindings;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = TagBindings::builder()
///     .with_endpoint("https://cloudresourcemanager.googleapis.com")
///     .with_tracing()
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a new client.
    ///
    /// Fails if the endpoint is not a valid URL, or if the HTTP client cannot
    /// be initialized.
    pub async fn build(self) -> gax::client_builder::Result<TagBindings> {
        TagBindings::new(self.config)
    }

    /// Sets the endpoint.
    ///
    /// Defaults to [DEFAULT_ENDPOINT][crate::DEFAULT_ENDPOINT].
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the OAuth2 access token sent as a bearer token with each request.
    ///
    /// Without a token requests are sent unauthenticated.
    pub fn with_access_token<V: Into<String>>(mut self, v: V) -> Self {
        self.config.access_token = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// Each page request runs in a span with the request parent and page
    /// token, and emits an event with the outcome.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the default per-attempt timeout.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.default_options.set_attempt_timeout(v);
        self
    }

    /// Sets the default user agent prefix.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.default_options.set_user_agent(v);
        self
    }
}
