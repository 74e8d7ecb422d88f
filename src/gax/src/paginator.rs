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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
///
/// List RPCs return one page of results and a token to fetch the next page.
/// An empty token means there are no more pages.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page, returning the items in the order the service sent them.
    fn items(self) -> Vec<Self::PageItem>;

    fn next_page_token(&self) -> String;
}

/// An adapter that converts list RPCs as defined by [AIP-4233](https://google.aip.dev/client-libraries/4233)
/// into a [futures::Stream] of pages that can be iterated over in an async fashion.
///
/// The stream is lazy: no request is made until the first call to `next()`,
/// and each subsequent page is requested only after the previous page was
/// consumed. The stream ends after the first page without a next page token,
/// or after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    ///
    /// The `execute` function receives the page token for the request. It is
    /// the seed token on the first call, and the token returned by the
    /// previous page on every other call.
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page, or `None` once the stream is exhausted.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a stream of the items in each page.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }

    /// Converts the paginator into a [futures::Stream] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Send {
        self.stream
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

/// An adapter that converts a [Paginator] into a stream of individual items.
///
/// Errors are forwarded as they appear. After an error the stream ends, as
/// the underlying [Paginator] does not request more pages.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    T::PageItem: 'static,
    E: Send + 'static,
{
    /// Creates a new [ItemPaginator] from a [Paginator] over pages.
    pub fn new(paginator: Paginator<T, E>) -> Self {
        let stream = paginator.flat_map(|page| {
            let items = match page {
                Ok(page) => page.items().into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item, or `None` once the stream is exhausted.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a [futures::Stream] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Send {
        self.stream
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator").finish_non_exhaustive()
    }
}
