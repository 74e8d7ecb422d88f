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

/// A TagBinding represents a connection between a TagValue and a cloud
/// resource. Once a TagBinding is created, the TagValue is applied to all the
/// descendants of the Google Cloud resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TagBinding {
    /// Output only. The name of the TagBinding. This is a String of the form:
    /// `tagBindings/{full-resource-name}/{tag-value-name}` (e.g.
    /// `tagBindings/%2F%2Fcloudresourcemanager.googleapis.com%2Fprojects%2F123/tagValues/456`).
    pub name: String,

    /// The full resource name of the resource the TagValue is bound to.
    /// E.g. `//cloudresourcemanager.googleapis.com/projects/123`
    pub parent: String,

    /// The TagValue of the TagBinding.
    /// Must be of the form `tagValues/456`.
    pub tag_value: String,

    /// The namespaced name for the TagValue of the TagBinding.
    /// Must be in the format
    /// `{parent_id}/{tag_key_short_name}/{short_name}`.
    pub tag_value_namespaced_name: String,
}

impl TagBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][TagBinding::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [parent][TagBinding::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [tag_value][TagBinding::tag_value].
    pub fn set_tag_value<T: Into<String>>(mut self, v: T) -> Self {
        self.tag_value = v.into();
        self
    }

    /// Sets the value of [tag_value_namespaced_name][TagBinding::tag_value_namespaced_name].
    pub fn set_tag_value_namespaced_name<T: Into<String>>(mut self, v: T) -> Self {
        self.tag_value_namespaced_name = v.into();
        self
    }
}

/// The request message to list all TagBindings for a parent.
///
/// Requests are values: the paginator clones the request for each page and
/// only replaces the page token.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTagBindingsRequest {
    /// Required. The full resource name of a resource for which you want to
    /// list existing TagBindings.
    /// E.g. "//cloudresourcemanager.googleapis.com/projects/123"
    pub parent: String,

    /// Optional. The maximum number of TagBindings to return in the response.
    /// The server allows a maximum of 300 TagBindings to return. If
    /// unspecified (zero), the server will use 100 as the default.
    ///
    /// The value is not validated locally, the service clamps or rejects it.
    pub page_size: i32,

    /// Optional. A pagination token returned from a previous call to
    /// `ListTagBindings` that indicates where this listing should continue
    /// from.
    pub page_token: String,
}

impl ListTagBindingsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListTagBindingsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListTagBindingsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListTagBindingsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// The ListTagBindings response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTagBindingsResponse {
    /// A possibly paginated list of TagBindings for the specified resource.
    pub tag_bindings: Vec<TagBinding>,

    /// Pagination token.
    ///
    /// If the result set is too large to fit in a single response, this token
    /// is returned. It encodes the position of the current result cursor.
    /// Feeding this value into a new list request with the `page_token`
    /// parameter gives the next page of the results.
    ///
    /// When `next_page_token` is not filled in, there is no next page and
    /// the list returned is the last page in the result set.
    pub next_page_token: String,
}

impl ListTagBindingsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [tag_bindings][ListTagBindingsResponse::tag_bindings].
    pub fn set_tag_bindings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TagBinding>,
    {
        self.tag_bindings = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListTagBindingsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListTagBindingsResponse {
    type PageItem = TagBinding;

    fn items(self) -> Vec<Self::PageItem> {
        self.tag_bindings
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}
