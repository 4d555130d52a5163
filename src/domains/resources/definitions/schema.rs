//! Object schema template (`infoblox://schema/{object_type}`).

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use crate::domains::resources::error::ResourceError;

/// Prefix shared by every expansion of the template.
pub const SCHEMA_URI_PREFIX: &str = "infoblox://schema/";

pub struct SchemaTemplate;

impl SchemaTemplate {
    pub const URI_TEMPLATE: &'static str = "infoblox://schema/{object_type}";

    pub fn template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: Self::URI_TEMPLATE.to_string(),
            name: "WAPI Object Schema".to_string(),
            title: Some("Object Schema".to_string()),
            description: Some(
                "Fields, types and search modifiers of a WAPI object type, e.g. infoblox://schema/record:host"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation()
    }

    /// Extract the object type from a template URI.
    ///
    /// Returns `Ok(None)` for URIs outside the template.
    pub fn object_type(uri: &str) -> Result<Option<&str>, ResourceError> {
        let Some(object_type) = uri.strip_prefix(SCHEMA_URI_PREFIX) else {
            return Ok(None);
        };
        let valid = !object_type.is_empty()
            && object_type
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ':' || c == '_');
        if !valid {
            return Err(ResourceError::invalid_uri(uri));
        }
        Ok(Some(object_type))
    }
}
