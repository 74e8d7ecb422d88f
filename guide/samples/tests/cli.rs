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

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use tagbindings_resourcemanager_v3 as rm;
    use tagbindings_resourcemanager_v3::model::{
        ListTagBindingsRequest, ListTagBindingsResponse, TagBinding,
    };
    use tagbindings_samples::args::Args;
    type Result<T> = anyhow::Result<T>;

    const PARENT: &str = "//cloudresourcemanager.googleapis.com/projects/123";

    mockall::mock! {
        #[derive(Debug)]
        TagBindings {}
        impl rm::stub::TagBindings for TagBindings {
            async fn list_tag_bindings(&self, req: ListTagBindingsRequest, options: RequestOptions) -> gax::Result<Response<ListTagBindingsResponse>>;
        }
    }

    fn binding(name: &str) -> TagBinding {
        TagBinding::new()
            .set_name(name)
            .set_parent(PARENT)
            .set_tag_value(format!("tagValues/{name}"))
    }

    #[tokio::test]
    async fn prints_one_line_per_item() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockTagBindings::new();
        mock.expect_list_tag_bindings()
            .withf(|r, _| r.parent == PARENT && r.page_size == 2 && r.page_token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    ListTagBindingsResponse::new()
                        .set_tag_bindings([binding("a"), binding("b")])
                        .set_next_page_token("t1"),
                ))
            });
        mock.expect_list_tag_bindings()
            .withf(|r, _| r.parent == PARENT && r.page_size == 2 && r.page_token == "t1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    ListTagBindingsResponse::new().set_tag_bindings([binding("c")]),
                ))
            });

        let client = rm::client::TagBindings::from_stub(mock);
        let args = Args::try_parse_from(["program", PARENT, "--page-size=2"])?;
        let mut out = Vec::new();
        tagbindings_samples::list_tag_bindings(&client, &args, &mut out).await?;

        let got = String::from_utf8(out)?;
        let want = ["a", "b", "c"]
            .map(|n| format!("{:?}\n", binding(n)))
            .concat();
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn empty_listing_prints_nothing() -> Result<()> {
        let mut mock = MockTagBindings::new();
        mock.expect_list_tag_bindings()
            .times(1)
            .returning(|_, _| Ok(Response::from(ListTagBindingsResponse::new())));

        let client = rm::client::TagBindings::from_stub(mock);
        let args = Args::try_parse_from(["program", PARENT])?;
        let mut out = Vec::new();
        tagbindings_samples::list_tag_bindings(&client, &args, &mut out).await?;
        assert!(out.is_empty(), "{out:?}");
        Ok(())
    }

    #[tokio::test]
    async fn error_after_first_page() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockTagBindings::new();
        mock.expect_list_tag_bindings()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    ListTagBindingsResponse::new()
                        .set_tag_bindings([binding("a")])
                        .set_next_page_token("t1"),
                ))
            });
        mock.expect_list_tag_bindings()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                let status = Status::default()
                    .set_code(Code::PermissionDenied)
                    .set_message("The caller does not have permission");
                Err(Error::service(status))
            });

        let client = rm::client::TagBindings::from_stub(mock);
        let args = Args::try_parse_from(["program", PARENT])?;
        let mut out = Vec::new();
        let err = tagbindings_samples::list_tag_bindings(&client, &args, &mut out)
            .await
            .expect_err("the second page fails");
        assert!(
            err.to_string()
                .contains("The caller does not have permission"),
            "{err}"
        );
        assert_eq!(String::from_utf8(out)?, format!("{:?}\n", binding("a")));
        Ok(())
    }

    #[tokio::test]
    async fn resume_with_page_token() -> Result<()> {
        let mut mock = MockTagBindings::new();
        mock.expect_list_tag_bindings()
            .withf(|r, _| r.page_token == "resume" && r.page_size == 0)
            .times(1)
            .returning(|_, _| {
                Ok(Response::from(
                    ListTagBindingsResponse::new().set_tag_bindings([binding("z")]),
                ))
            });

        let client = rm::client::TagBindings::from_stub(mock);
        let args = Args::try_parse_from(["program", PARENT, "--page-token=resume"])?;
        let mut out = Vec::new();
        tagbindings_samples::list_tag_bindings(&client, &args, &mut out).await?;
        assert_eq!(String::from_utf8(out)?, format!("{:?}\n", binding("z")));
        Ok(())
    }

    #[tokio::test]
    async fn build_client_from_args() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/tagBindings"),
                request::query(url_decoded(contains(("parent", PARENT)))),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({
                "tagBindings": [{"name": "a", "parent": PARENT, "tagValue": "tagValues/a"}],
            }))),
        );

        let endpoint = format!("--endpoint=http://{}", server.addr());
        let args = Args::try_parse_from([
            "program",
            PARENT,
            endpoint.as_str(),
            "--access-token=test-token",
            "--timeout=5s",
        ])?;
        let client = tagbindings_samples::build_client(&args).await?;
        let mut out = Vec::new();
        tagbindings_samples::list_tag_bindings(&client, &args, &mut out).await?;
        assert_eq!(String::from_utf8(out)?, format!("{:?}\n", binding("a")));
        Ok(())
    }

    #[tokio::test]
    async fn build_client_bad_endpoint() -> Result<()> {
        let args = Args::try_parse_from(["program", PARENT, "--endpoint=not a url"])?;
        let err = tagbindings_samples::build_client(&args)
            .await
            .expect_err("the endpoint is invalid");
        let err = err
            .downcast_ref::<gax::client_builder::Error>()
            .expect("a client builder error");
        assert!(err.is_endpoint(), "{err:?}");
        Ok(())
    }
}
