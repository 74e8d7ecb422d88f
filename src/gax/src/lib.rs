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

//! Helpers shared by the tag bindings client.
//!
//! This crate contains the types used to consume list RPCs as streams, the
//! error type returned by every RPC, and the response and per-request option
//! types used by the client and its stubs.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client.
pub mod error;

/// Defines some types and traits to convert and use List RPCs as a Stream.
pub mod paginator;

pub mod client_builder;
pub mod options;
pub mod response;
