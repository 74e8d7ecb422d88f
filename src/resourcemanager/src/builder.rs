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

pub mod tag_bindings {
    //! Request builders for [TagBindings][crate::client::TagBindings].
    use crate::Result;
    use crate::model::{ListTagBindingsRequest, ListTagBindingsResponse};
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// Common implementation for [crate::client::TagBindings] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::TagBindings>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::TagBindings>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [TagBindings::list_tag_bindings][crate::client::TagBindings::list_tag_bindings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use tagbindings_resourcemanager_v3::builder::tag_bindings::ListTagBindings;
    /// # async fn sample() -> tagbindings_resourcemanager_v3::Result<()> {
    /// fn prepare_request_builder() -> ListTagBindings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListTagBindings(RequestBuilder<ListTagBindingsRequest>);

    impl ListTagBindings {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::TagBindings>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<ListTagBindingsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request and returns a single page.
        ///
        /// The request page token, if any, selects the page.
        pub async fn send(self) -> Result<ListTagBindingsResponse> {
            (*self.0.stub)
                .list_tag_bindings(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        ///
        /// The listing starts at the request page token. Every page reuses the
        /// request, only the page token changes. The stream ends after the
        /// first page without a next page token, or after the first error.
        pub fn by_page(self) -> Paginator<ListTagBindingsResponse, Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<ListTagBindingsResponse, Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][ListTagBindingsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][ListTagBindingsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][ListTagBindingsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTagBindings {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
