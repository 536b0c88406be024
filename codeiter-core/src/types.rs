//! Wire types for the `/process_code` endpoint and the model catalogue.
//!
//! All types are fully owned so they can move between the request task and the
//! event loop without lifetimes.

use serde::{Deserialize, Serialize};

/// Request body sent to `POST /process_code`.
///
/// Built fresh on every submit from the trimmed form inputs. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub code: String,
    pub prompt: String,
    pub model: String,
}

/// Success body returned by `POST /process_code`.
///
/// Every field is optional: the backend may fail to extract a section from the
/// model output, and the controller substitutes a placeholder in that case.
/// Unknown fields (the backend also echoes `original_code`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_suggestions: Option<String>,
}

/// Error body returned alongside a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// A selectable backend model: the identifier sent on the wire and the label
/// shown next to the model picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub label: String,
}

impl Model {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

/// The models the backend understands out of the box.
///
/// `*-local` identifiers are forwarded to a local Ollama instance, `llama3-cloud`
/// to the hosted Groq API.
pub fn builtin_models() -> Vec<Model> {
    vec![
        Model::new("phi3-local", "Phi-3 (Local)"),
        Model::new("llama3-local", "Llama 3 (Local)"),
        Model::new("llama3-cloud", "Llama 3 8B (Groq Cloud)"),
    ]
}
