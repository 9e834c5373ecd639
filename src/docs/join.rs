use super::example_url::ExampleUrlBuilder;
use crate::config::CopyrightConfig;
use crate::error::ExtractError;
use crate::extract::{DeclaredShapes, ParamExtractor, ReturnExtractor};
use crate::model::RouteDoc;
use crate::registry::{RegisteredRoute, RouteMetadataProvider};
use std::sync::Arc;

/// The pair of extraction services the joiner calls out to.
#[derive(Clone)]
pub struct Extractors {
    pub params: Arc<dyn ParamExtractor>,
    pub returns: Arc<dyn ReturnExtractor>,
}

impl Extractors {
    pub fn new(params: Arc<dyn ParamExtractor>, returns: Arc<dyn ReturnExtractor>) -> Self {
        Self { params, returns }
    }
}

impl Default for Extractors {
    fn default() -> Self {
        Self {
            params: Arc::new(DeclaredShapes),
            returns: Arc::new(DeclaredShapes),
        }
    }
}

impl std::fmt::Debug for Extractors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractors").finish_non_exhaustive()
    }
}

/// Assemble the full [`RouteDoc`] for one documentable route.
pub fn join_route(
    route: &RegisteredRoute,
    id: String,
    config: &CopyrightConfig,
    extractors: &Extractors,
    example_urls: &ExampleUrlBuilder,
) -> Result<RouteDoc, ExtractError> {
    let handler = route.handler.as_ref();

    let params = extractors.params.extract_params(handler)?;
    let shape = extractors
        .returns
        .extract_returns(handler, config.return_record_level)?;

    let responses = if handler.responses().is_empty() {
        config.global_responses.clone()
    } else {
        handler.responses().to_vec()
    };

    let (title, description, develop_only, index, comment_in_example) = match handler.api_method()
    {
        Some(meta) => (
            meta.title.clone(),
            meta.desc.clone(),
            meta.develop,
            meta.index,
            meta.comment_in_example,
        ),
        None => (String::new(), String::new(), false, 0, config.comment_in_return_example),
    };

    let example_url = example_urls.build(&id);
    Ok(RouteDoc {
        id,
        urls: route.url_list(),
        methods: route.method_names(),
        params,
        responses,
        return_fields: shape.fields,
        return_example_json: shape.example_json,
        title,
        description,
        develop_only,
        index,
        comment_in_example,
        example_url,
    })
}
