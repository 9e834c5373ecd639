use crate::config::ResponseCode;
use crate::model::ParamDescriptor;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// What a handler writes back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Serialized data (JSON)
    #[default]
    Body,
    /// Rendered template
    View,
    Redirect,
}

/// Explicit grouping: module names plus a display index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct ApiGroup {
    pub names: Vec<String>,
    pub index: i32,
}

impl ApiGroup {
    pub fn new<I, S>(names: I, index: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            index,
        }
    }
}

/// Explicit per-route display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiMethod {
    pub title: String,
    pub desc: String,
    pub develop: bool,
    pub index: i32,
    pub comment_in_example: bool,
}

impl Default for ApiMethod {
    fn default() -> Self {
        Self {
            title: String::new(),
            desc: String::new(),
            develop: false,
            index: 0,
            comment_in_example: true,
        }
    }
}

impl ApiMethod {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn develop(mut self, develop: bool) -> Self {
        self.develop = develop;
        self
    }

    pub fn comment_in_example(mut self, comment: bool) -> Self {
        self.comment_in_example = comment;
        self
    }
}

/// Declared return field; `children` describe nested objects or array elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReturnField {
    pub name: String,
    #[serde(default = "default_field_type", rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: Option<Value>,
    #[serde(default)]
    pub children: Vec<ReturnField>,
}

fn default_field_type() -> String {
    "string".to_string()
}

impl ReturnField {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: String::new(),
            example: None,
            children: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    pub fn child(mut self, field: ReturnField) -> Self {
        self.children.push(field);
        self
    }
}

/// The enclosing group of handlers (a controller).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControllerDescriptor {
    /// Simple type name, e.g. `UserController`
    pub name: String,
    pub response: ResponseKind,
    pub hidden: Option<bool>,
    pub group: Option<ApiGroup>,
    pub responses: Vec<ResponseCode>,
}

impl ControllerDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_response(mut self, kind: ResponseKind) -> Self {
        self.response = kind;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn with_group(mut self, group: ApiGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_responses(mut self, responses: Vec<ResponseCode>) -> Self {
        self.responses = responses;
        self
    }
}

/// One handler function and everything declared about it.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerDescriptor {
    pub name: String,
    pub controller: Arc<ControllerDescriptor>,
    pub response: Option<ResponseKind>,
    pub hidden: Option<bool>,
    pub group: Option<ApiGroup>,
    pub meta: Option<ApiMethod>,
    pub responses: Vec<ResponseCode>,
    pub params: Vec<ParamDescriptor>,
    pub returns: Vec<ReturnField>,
}

impl HandlerDescriptor {
    pub fn new(name: impl Into<String>, controller: Arc<ControllerDescriptor>) -> Self {
        Self {
            name: name.into(),
            controller,
            response: None,
            hidden: None,
            group: None,
            meta: None,
            responses: Vec::new(),
            params: Vec::new(),
            returns: Vec::new(),
        }
    }

    pub fn with_response(mut self, kind: ResponseKind) -> Self {
        self.response = Some(kind);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn with_group(mut self, group: ApiGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_meta(mut self, meta: ApiMethod) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_responses(mut self, responses: Vec<ResponseCode>) -> Self {
        self.responses = responses;
        self
    }

    pub fn with_param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_return(mut self, field: ReturnField) -> Self {
        self.returns.push(field);
        self
    }
}

/// Capability lookups the documentation engine needs from a handler.
///
/// Method-level declarations take precedence; the enclosing controller's
/// declarations apply only when the handler declares nothing.
pub trait RouteMetadataProvider {
    fn handler_name(&self) -> &str;
    /// Simple name of the enclosing controller
    fn owner_name(&self) -> &str;
    fn response_kind(&self) -> ResponseKind;
    /// Absent markings mean "not hidden".
    fn is_hidden(&self) -> bool;
    fn api_group(&self) -> Option<&ApiGroup>;
    /// Method-level only; controllers carry no display metadata.
    fn api_method(&self) -> Option<&ApiMethod>;
    /// Declared response codes, possibly empty.
    fn responses(&self) -> &[ResponseCode];
}

impl RouteMetadataProvider for HandlerDescriptor {
    fn handler_name(&self) -> &str {
        &self.name
    }

    fn owner_name(&self) -> &str {
        &self.controller.name
    }

    fn response_kind(&self) -> ResponseKind {
        self.response.unwrap_or(self.controller.response)
    }

    fn is_hidden(&self) -> bool {
        self.hidden.or(self.controller.hidden).unwrap_or(false)
    }

    fn api_group(&self) -> Option<&ApiGroup> {
        self.group.as_ref().or(self.controller.group.as_ref())
    }

    fn api_method(&self) -> Option<&ApiMethod> {
        self.meta.as_ref()
    }

    fn responses(&self) -> &[ResponseCode] {
        if self.responses.is_empty() {
            &self.controller.responses
        } else {
            &self.responses
        }
    }
}
