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

use clap::Parser;
use std::process::ExitCode;
use tagbindings_samples::args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit here, with clap's status code.
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    args.validate()?;
    tagbindings_samples::enable_tracing()?;
    tracing::debug!("Configuration: {args:?}");

    let client = tagbindings_samples::build_client(&args).await?;
    let mut stdout = std::io::stdout().lock();
    tagbindings_samples::list_tag_bindings(&client, &args, &mut stdout).await
}
