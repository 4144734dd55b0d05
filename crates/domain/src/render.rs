//! Presentation records handed to the host's template renderer.

use serde::{Deserialize, Serialize};

/// Flat template data describing an authenticated identity.
///
/// Field names are part of the template contract. Absent values serialize
/// as `null` so every key is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Display name.
    pub name: Option<String>,
    /// Login handle.
    pub username: Option<String>,
    /// Profile URL.
    pub url: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
}

/// A render model bound to the template that displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    /// Template name.
    pub template: String,
    /// Values passed to the template.
    pub owner: RenderModel,
}

impl RenderModel {
    /// Binds this model to a template.
    #[must_use]
    pub fn into_template(self, template: impl Into<String>) -> TemplateData {
        TemplateData {
            template: template.into(),
            owner: self,
        }
    }
}
