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
use ::tracing::Instrument;

/// Decorates a [crate::stub::TagBindings] with tracing spans and events.
#[derive(Clone, Debug)]
pub(crate) struct TagBindings<T>
where
    T: crate::stub::TagBindings,
{
    inner: T,
}

impl<T> TagBindings<T>
where
    T: crate::stub::TagBindings,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> crate::stub::TagBindings for TagBindings<T>
where
    T: crate::stub::TagBindings,
{
    async fn list_tag_bindings(
        &self,
        req: ListTagBindingsRequest,
        options: RequestOptions,
    ) -> Result<Response<ListTagBindingsResponse>> {
        let span = ::tracing::info_span!(
            "list_tag_bindings",
            parent = %req.parent,
            page_token = %req.page_token,
        );
        let result = self
            .inner
            .list_tag_bindings(req, options)
            .instrument(span.clone())
            .await;
        span.in_scope(|| match &result {
            Ok(response) => ::tracing::debug!(
                items = response.body().tag_bindings.len(),
                has_next = !response.body().next_page_token.is_empty(),
                "page received"
            ),
            Err(e) => ::tracing::warn!(error = %e, "page request failed"),
        });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagBinding;
    use crate::stub::TagBindings as _;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorder {
        requests: Mutex<Vec<ListTagBindingsRequest>>,
    }

    impl crate::stub::TagBindings for Recorder {
        async fn list_tag_bindings(
            &self,
            req: ListTagBindingsRequest,
            _options: RequestOptions,
        ) -> Result<Response<ListTagBindingsResponse>> {
            self.requests.lock().unwrap().push(req.clone());
            match req.page_token.as_str() {
                "" => Ok(Response::from(
                    ListTagBindingsResponse::new()
                        .set_tag_bindings([TagBinding::new().set_name("a")])
                        .set_next_page_token("t1"),
                )),
                _ => Err(Error::service(
                    Status::default()
                        .set_code(Code::Unavailable)
                        .set_message("try again"),
                )),
            }
        }
    }

    #[tokio::test]
    async fn forwards_success() -> anyhow::Result<()> {
        let stub = TagBindings::new(Recorder::default());
        let request = ListTagBindingsRequest::new().set_parent("projects/123");
        let response = stub
            .list_tag_bindings(request.clone(), RequestOptions::default())
            .await?;
        assert_eq!(response.body().next_page_token, "t1");
        assert_eq!(response.body().tag_bindings.len(), 1);
        assert_eq!(*stub.inner.requests.lock().unwrap(), vec![request]);
        Ok(())
    }

    #[tokio::test]
    async fn forwards_error() {
        let stub = TagBindings::new(Recorder::default());
        let request = ListTagBindingsRequest::new()
            .set_parent("projects/123")
            .set_page_token("t1");
        let err = stub
            .list_tag_bindings(request, RequestOptions::default())
            .await
            .expect_err("the inner stub fails");
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
    }
}
