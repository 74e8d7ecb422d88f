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

//! Lists the tag bindings attached to a Google Cloud resource.
//!
//! The binary in `main.rs` is a thin wrapper around the functions in this
//! module, which are also used in the tests.

pub mod args;

use args::Args;
use std::io::Write;
use tagbindings_resourcemanager_v3::client::TagBindings;

pub const DESCRIPTION: &str = concat!(
    "This program lists the tag bindings attached to a Google Cloud resource.",
    " It prints one line per binding, fetching pages from the service as",
    " needed."
);

/// Creates a client configured from the command-line arguments.
pub async fn build_client(args: &Args) -> anyhow::Result<TagBindings> {
    let mut builder = TagBindings::builder().with_tracing();
    if let Some(endpoint) = &args.endpoint {
        builder = builder.with_endpoint(endpoint);
    }
    if let Some(token) = &args.access_token {
        builder = builder.with_access_token(token);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.with_timeout(timeout);
    }
    Ok(builder.build().await?)
}

/// Writes each tag binding under `args.parent` to `out`, one per line.
///
/// Stops at the first error. Items printed before the error remain in `out`.
pub async fn list_tag_bindings<W: Write>(
    client: &TagBindings,
    args: &Args,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut builder = client.list_tag_bindings().set_parent(&args.parent);
    if let Some(page_size) = args.page_size {
        builder = builder.set_page_size(page_size);
    }
    if let Some(page_token) = &args.page_token {
        builder = builder.set_page_token(page_token);
    }
    let mut items = builder.by_item();
    while let Some(binding) = items.next().await.transpose()? {
        writeln!(out, "{binding:?}")?;
    }
    tracing::info!("listing complete for {}", args.parent);
    Ok(())
}

/// Sends logs to stderr, filtered by `RUST_LOG`, so stdout only carries
/// results.
pub fn enable_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
