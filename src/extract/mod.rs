//! # Shape Extraction
//!
//! Services that turn a [`HandlerDescriptor`] into documented parameters
//! and return shapes. The documentation engine treats them as opaque:
//! anything implementing [`ParamExtractor`] and [`ReturnExtractor`] can be
//! plugged into the cache.
//!
//! [`DeclaredShapes`] is the default: it reads what the registration layer
//! declared on the descriptor and synthesizes an example payload from the
//! declared return tree.

mod example;

pub use example::{example_value, field_example, fields_example};

use crate::error::ExtractError;
use crate::model::{ParamDescriptor, ReturnFieldDescriptor};
use crate::registry::{HandlerDescriptor, ReturnField};

/// Return fields plus the example JSON served by the example endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnShape {
    pub fields: Vec<ReturnFieldDescriptor>,
    pub example_json: String,
}

pub trait ParamExtractor: Send + Sync {
    fn extract_params(&self, handler: &HandlerDescriptor)
        -> Result<Vec<ParamDescriptor>, ExtractError>;
}

pub trait ReturnExtractor: Send + Sync {
    /// `record_level` names nested fields by their full path.
    fn extract_returns(
        &self,
        handler: &HandlerDescriptor,
        record_level: bool,
    ) -> Result<ReturnShape, ExtractError>;
}

/// Extraction from the shapes declared on the descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredShapes;

impl ParamExtractor for DeclaredShapes {
    fn extract_params(
        &self,
        handler: &HandlerDescriptor,
    ) -> Result<Vec<ParamDescriptor>, ExtractError> {
        Ok(handler.params.clone())
    }
}

impl ReturnExtractor for DeclaredShapes {
    fn extract_returns(
        &self,
        handler: &HandlerDescriptor,
        record_level: bool,
    ) -> Result<ReturnShape, ExtractError> {
        if handler.returns.is_empty() {
            return Ok(ReturnShape::default());
        }
        let mut fields = Vec::new();
        flatten(&handler.name, &handler.returns, "", 0, record_level, &mut fields)?;
        let example = fields_example(&handler.returns);
        let example_json = serde_json::to_string_pretty(&example).map_err(|e| ExtractError::Other {
            handler: handler.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(ReturnShape {
            fields,
            example_json,
        })
    }
}

/// Depth-first flattening of the declared return tree.
fn flatten(
    handler: &str,
    fields: &[ReturnField],
    parent: &str,
    level: usize,
    record_level: bool,
    out: &mut Vec<ReturnFieldDescriptor>,
) -> Result<(), ExtractError> {
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(ExtractError::UnnamedField {
                handler: handler.to_string(),
            });
        }
        let path = if parent.is_empty() {
            field.name.clone()
        } else {
            format!("{parent}.{}", field.name)
        };
        out.push(ReturnFieldDescriptor {
            name: if record_level { path.clone() } else { field.name.clone() },
            data_type: field.data_type.clone(),
            description: field.description.clone(),
            level,
        });
        flatten(handler, &field.children, &path, level + 1, record_level, out)?;
    }
    Ok(())
}
