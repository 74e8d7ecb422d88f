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

use crate::config::{ClientConfig, Redacted};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};

/// Sends HTTP+JSON requests to the service.
#[derive(Clone)]
pub(crate) struct ReqwestClient {
    inner: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
    default_options: RequestOptions,
}

impl ReqwestClient {
    pub fn new(config: &ClientConfig) -> gax::client_builder::Result<Self> {
        let endpoint = config.endpoint().trim_end_matches('/').to_string();
        reqwest::Url::parse(&endpoint).map_err(BuilderError::endpoint)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            endpoint,
            access_token: config.access_token.clone(),
            default_options: config.default_options.clone(),
        })
    }

    pub fn builder(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let options = options.with_defaults(&self.default_options);
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", *crate::info::DEFAULT_USER_AGENT),
            None => crate::info::DEFAULT_USER_AGENT.clone(),
        };
        builder = builder
            .header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
            )
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        if let Some(token) = &self.access_token {
            let mut value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(Error::authentication)?;
            value.set_sensitive(true);
            builder = builder.header(reqwest::header::AUTHORIZATION, value);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &Redacted(&self.access_token))
            .field("default_options", &self.default_options)
            .finish()
    }
}

pub(crate) async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body and fails to parse as JSON.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let response = match body {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(Parts::new().set_headers(headers), response))
}
