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
use crate::config::ClientConfig;
use crate::http::ReqwestClient;
use crate::model::{ListTagBindingsRequest, ListTagBindingsResponse};
use gax::options::RequestOptions;
use gax::response::Response;

/// Implements [crate::stub::TagBindings] using HTTP+JSON.
#[derive(Clone, Debug)]
pub(crate) struct TagBindings {
    inner: ReqwestClient,
}

impl TagBindings {
    pub fn new(config: &ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config)?;
        Ok(Self { inner })
    }
}

impl crate::stub::TagBindings for TagBindings {
    async fn list_tag_bindings(
        &self,
        req: ListTagBindingsRequest,
        options: RequestOptions,
    ) -> Result<Response<ListTagBindingsResponse>> {
        let mut builder = self
            .inner
            .builder(reqwest::Method::GET, "/v3/tagBindings")
            .query(&[("parent", &req.parent)]);
        if req.page_size != 0 {
            builder = builder.query(&[("pageSize", req.page_size)]);
        }
        if !req.page_token.is_empty() {
            builder = builder.query(&[("pageToken", &req.page_token)]);
        }
        self.inner.execute(builder, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagBinding;
    use crate::stub::TagBindings as _;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;
    type TestResult = anyhow::Result<()>;

    const PARENT: &str = "//cloudresourcemanager.googleapis.com/projects/123";

    fn test_config(server: &Server) -> ClientConfig {
        ClientConfig {
            endpoint: Some(format!("http://{}", server.addr())),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_first_page() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/tagBindings"),
                request::query(url_decoded(contains(("parent", PARENT)))),
                request::query(url_decoded(not(contains(key("pageSize"))))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
                request::headers(contains(("x-goog-api-client", any()))),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(json_encoded(json!({
                "tagBindings": [{"name": "a", "tagValue": "tagValues/1"}],
                "nextPageToken": "t1",
            }))),
        );

        let stub = TagBindings::new(&test_config(&server))?;
        let response = stub
            .list_tag_bindings(
                ListTagBindingsRequest::new().set_parent(PARENT),
                RequestOptions::default(),
            )
            .await?;
        let want = ListTagBindingsResponse::new()
            .set_tag_bindings([TagBinding::new().set_name("a").set_tag_value("tagValues/1")])
            .set_next_page_token("t1");
        assert_eq!(response.body(), &want);
        Ok(())
    }

    #[tokio::test]
    async fn list_with_size_and_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/tagBindings"),
                request::query(url_decoded(contains(("parent", PARENT)))),
                request::query(url_decoded(contains(("pageSize", "7")))),
                request::query(url_decoded(contains(("pageToken", "t1")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let stub = TagBindings::new(&test_config(&server))?;
        let request = ListTagBindingsRequest::new()
            .set_parent(PARENT)
            .set_page_size(7)
            .set_page_token("t1");
        let response = stub
            .list_tag_bindings(request, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), ListTagBindingsResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn response_headers_reach_the_stub() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/tagBindings")).respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("x-test-header", "test-value")
                    .body("{}"),
            ),
        );

        let stub = TagBindings::new(&test_config(&server))?;
        let response = stub
            .list_tag_bindings(
                ListTagBindingsRequest::new().set_parent(PARENT),
                RequestOptions::default(),
            )
            .await?;
        let value = response
            .headers()
            .get("x-test-header")
            .and_then(|v| v.to_str().ok());
        assert_eq!(value, Some("test-value"));
        Ok(())
    }

    #[tokio::test]
    async fn sends_bearer_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/tagBindings"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let config = ClientConfig {
            access_token: Some("test-token".to_string()),
            ..test_config(&server)
        };
        let stub = TagBindings::new(&config)?;
        stub.list_tag_bindings(
            ListTagBindingsRequest::new().set_parent(PARENT),
            RequestOptions::default(),
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn sends_user_agent_prefix() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/tagBindings"),
                request::headers(contains((
                    "user-agent",
                    matches("^my-app/1.0 tagbindings-resourcemanager-v3/"),
                ))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let stub = TagBindings::new(&test_config(&server))?;
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        stub.list_tag_bindings(ListTagBindingsRequest::new().set_parent(PARENT), options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/tagBindings")).respond_with(
                status_code(403).body(
                    json!({"error": {
                        "code": 403,
                        "message": "permission denied on resource",
                        "status": "PERMISSION_DENIED",
                    }})
                    .to_string(),
                ),
            ),
        );

        let stub = TagBindings::new(&test_config(&server))?;
        let err = stub
            .list_tag_bindings(
                ListTagBindingsRequest::new().set_parent(PARENT),
                RequestOptions::default(),
            )
            .await
            .expect_err("403 is an error");
        let status = err.status().expect("service errors carry a status");
        assert_eq!(status.code, gax::error::rpc::Code::PermissionDenied);
        assert_eq!(status.message, "permission denied on resource");
        assert_eq!(err.http_status_code(), Some(403));
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/tagBindings")).respond_with(
                delay_and_then(Duration::from_secs(2), json_encoded(json!({}))),
            ),
        );

        let stub = TagBindings::new(&test_config(&server))?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = stub
            .list_tag_bindings(ListTagBindingsRequest::new().set_parent(PARENT), options)
            .await
            .expect_err("request should time out");
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_refused() -> TestResult {
        let addr = {
            let server = Server::run();
            server.addr()
        };
        let config = ClientConfig {
            endpoint: Some(format!("http://{addr}")),
            ..Default::default()
        };
        let stub = TagBindings::new(&config)?;
        let err = stub
            .list_tag_bindings(
                ListTagBindingsRequest::new().set_parent(PARENT),
                RequestOptions::default(),
            )
            .await
            .expect_err("nothing is listening");
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }
}
