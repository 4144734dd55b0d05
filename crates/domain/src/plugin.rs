//! Plugin registration records

use serde::Serialize;

/// Static registration record of an OAuth provider plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginDefinition {
    /// Unique plugin id.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether the provider issues refresh tokens.
    pub refresh_token: bool,
    /// Template that renders the plugin's resource owners.
    pub owner_template: &'static str,
}
