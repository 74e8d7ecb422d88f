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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! responses. The traits in this module are the seam used for those mocks.

use crate::Result;
use crate::model::{ListTagBindingsRequest, ListTagBindingsResponse};
use gax::options::RequestOptions;
use gax::response::Response;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::TagBindings].
///
/// Application developers may need to implement this trait to mock
/// `client::TagBindings`. In other use-cases, application developers only
/// use `client::TagBindings` and need not be concerned with this trait or
/// its implementations.
///
/// Implementations fetch exactly one page per call. The client builds the
/// pagination on top of this method.
pub trait TagBindings: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::TagBindings::list_tag_bindings].
    fn list_tag_bindings(
        &self,
        req: ListTagBindingsRequest,
        options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<ListTagBindingsResponse>>> + Send;
}
