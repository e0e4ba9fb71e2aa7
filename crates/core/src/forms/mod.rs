//! Forms module - dynamic form schemas per furniture category.

mod forms_model;
mod forms_service;

pub use forms_model::{FieldDescriptor, FieldType, FieldValue, FormSchema};
pub use forms_service::resolve_form;
