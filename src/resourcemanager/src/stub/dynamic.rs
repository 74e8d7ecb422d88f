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

use crate::Result;
use crate::model::{ListTagBindingsRequest, ListTagBindingsResponse};
use gax::options::RequestOptions;
use gax::response::Response;

/// A dyn-compatible version of [super::TagBindings].
///
/// The client stores its stub as `Arc<dyn TagBindings>`, so the transport, the
/// tracing decorator, and application mocks share one client type.
#[async_trait::async_trait]
pub trait TagBindings: std::fmt::Debug + Send + Sync {
    async fn list_tag_bindings(
        &self,
        req: ListTagBindingsRequest,
        options: RequestOptions,
    ) -> Result<Response<ListTagBindingsResponse>>;
}

/// All implementations of [super::TagBindings] also implement [TagBindings].
#[async_trait::async_trait]
impl<T: super::TagBindings> TagBindings for T {
    async fn list_tag_bindings(
        &self,
        req: ListTagBindingsRequest,
        options: RequestOptions,
    ) -> Result<Response<ListTagBindingsResponse>> {
        T::list_tag_bindings(self, req, options).await
    }
}
