//! Helpers shared across tool definitions.
//!
//! Search options common to every GET tool, a small builder for WAPI object
//! bodies, and input validators that reject obviously malformed values
//! before a request reaches the grid.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;

/// Upper bound accepted for `max_results`.
pub const MAX_RESULTS_LIMIT: u32 = 1000;

/// Options accepted by every search tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchOptions {
    /// Maximum number of objects to return (1-1000).
    #[serde(default)]
    #[schemars(range(min = 1, max = 1000))]
    pub max_results: Option<u32>,

    /// Additional fields to return on top of the object's defaults.
    #[serde(default)]
    pub return_fields: Option<Vec<String>>,
}

impl SearchOptions {
    /// Add `_max_results` and `_return_fields+` to a request.
    pub fn apply(&self, request: WapiRequest) -> Result<WapiRequest, ToolError> {
        if let Some(limit) = self.max_results {
            if limit == 0 || limit > MAX_RESULTS_LIMIT {
                return Err(ToolError::invalid_arguments(format!(
                    "max_results must be between 1 and {}",
                    MAX_RESULTS_LIMIT
                )));
            }
        }
        Ok(request
            .max_results(self.max_results)
            .return_fields(self.return_fields.as_deref()))
    }
}

/// Add an exact (`name=`) or regular-expression (`name~=`) name filter.
pub fn name_filter(
    request: WapiRequest,
    field: &str,
    exact: Option<String>,
    regex: Option<String>,
) -> Result<WapiRequest, ToolError> {
    match (exact, regex) {
        (Some(_), Some(_)) => Err(ToolError::invalid_arguments(format!(
            "Use either {field} or {field}_regex, not both"
        ))),
        (Some(exact), None) => Ok(request.query(field, exact)),
        (None, Some(regex)) => Ok(request.query(format!("{field}~"), regex)),
        (None, None) => Ok(request),
    }
}

/// Builder for WAPI object bodies that skips unset optional fields.
#[derive(Debug, Default)]
pub struct ObjectBody(Map<String, Value>);

impl ObjectBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set a field only when a value is present.
    pub fn field_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    /// Set an explicit TTL. WAPI ignores `ttl` unless `use_ttl` is true.
    pub fn ttl(self, ttl: Option<u32>) -> Self {
        match ttl {
            Some(ttl) => self.field("ttl", ttl).field("use_ttl", true),
            None => self,
        }
    }

    pub fn build(self) -> Value {
        Value::Object(self.0)
    }
}

/// Reject empty or whitespace-only strings.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

/// Parse an IPv4 address.
pub fn parse_ipv4(field: &str, value: &str) -> Result<Ipv4Addr, ToolError> {
    value.parse::<Ipv4Addr>().map_err(|_| {
        ToolError::invalid_arguments(format!("{} is not a valid IPv4 address: {}", field, value))
    })
}

/// Validate an IPv4 address.
pub fn validate_ipv4(field: &str, value: &str) -> Result<(), ToolError> {
    parse_ipv4(field, value).map(|_| ())
}

/// Prefix of the WAPI function shorthand that allocates the next free address.
pub const NEXT_AVAILABLE_IP_PREFIX: &str = "func:nextavailableip:";

/// Validate an IPv4 address or a `func:nextavailableip:<network>` allocation.
pub fn validate_ipv4_or_next_available(field: &str, value: &str) -> Result<(), ToolError> {
    match value.strip_prefix(NEXT_AVAILABLE_IP_PREFIX) {
        Some(target) => require_non_empty(field, target),
        None => validate_ipv4(field, value),
    }
}

/// Validate an IPv4 or IPv6 address.
pub fn validate_ip(field: &str, value: &str) -> Result<(), ToolError> {
    value.parse::<IpAddr>().map(|_| ()).map_err(|_| {
        ToolError::invalid_arguments(format!("{} is not a valid IP address: {}", field, value))
    })
}

/// Validate an IPv6 address.
pub fn validate_ipv6(field: &str, value: &str) -> Result<(), ToolError> {
    value.parse::<Ipv6Addr>().map(|_| ()).map_err(|_| {
        ToolError::invalid_arguments(format!("{} is not a valid IPv6 address: {}", field, value))
    })
}

/// Validate a network in CIDR notation (`10.0.0.0/24`, `2001:db8::/64`).
pub fn validate_cidr(field: &str, value: &str) -> Result<(), ToolError> {
    let invalid =
        || ToolError::invalid_arguments(format!("{} must be in CIDR notation: {}", field, value));

    let (address, prefix) = value.split_once('/').ok_or_else(invalid)?;
    let address: IpAddr = address.parse().map_err(|_| invalid())?;
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
    let max_prefix = if address.is_ipv4() { 32 } else { 128 };

    if prefix > max_prefix {
        return Err(invalid());
    }
    Ok(())
}

/// Validate a CIDR prefix length for next-available-network requests.
pub fn validate_prefix_length(field: &str, value: u8) -> Result<(), ToolError> {
    if value == 0 || value > 128 {
        return Err(ToolError::invalid_arguments(format!(
            "{} must be between 1 and 128",
            field
        )));
    }
    Ok(())
}

/// Validate a MAC address of six colon-separated hex octets.
pub fn validate_mac(field: &str, value: &str) -> Result<(), ToolError> {
    let octets: Vec<&str> = value.split(':').collect();
    let valid = octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()));

    if !valid {
        return Err(ToolError::invalid_arguments(format!(
            "{} must be six colon-separated hex octets (aa:bb:cc:dd:ee:ff): {}",
            field, value
        )));
    }
    Ok(())
}

/// Validate a WAPI object reference (`objtype/opaque:name/view`).
pub fn validate_ref(field: &str, value: &str) -> Result<(), ToolError> {
    // The ref is appended to the URL as-is, so it must not carry a query or fragment.
    let valid = match value.split_once('/') {
        Some((objtype, rest)) => {
            !objtype.is_empty()
                && !rest.is_empty()
                && !value.chars().any(|c| c.is_whitespace() || c == '?' || c == '#')
        }
        None => false,
    };

    if !valid {
        return Err(ToolError::invalid_arguments(format!(
            "{} is not a valid object reference (expected 'objtype/...'): {}",
            field, value
        )));
    }
    Ok(())
}

/// Validate a `_ref` and check it points at the expected object type.
pub fn validate_ref_type(field: &str, value: &str, objtype: &str) -> Result<(), ToolError> {
    validate_ref(field, value)?;
    if !value.starts_with(&format!("{}/", objtype)) {
        return Err(ToolError::invalid_arguments(format!(
            "{} must reference a '{}' object: {}",
            field, objtype, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::query_value;
    use serde_json::json;

    #[test]
    fn test_search_options_apply() {
        let options = SearchOptions {
            max_results: Some(50),
            return_fields: Some(vec!["comment".to_string()]),
        };
        let request = options.apply(WapiRequest::get("network")).unwrap();
        assert_eq!(query_value(&request, "_max_results"), Some("50"));
        assert_eq!(query_value(&request, "_return_fields+"), Some("comment"));
    }

    #[test]
    fn test_search_options_limits() {
        let zero = SearchOptions {
            max_results: Some(0),
            ..Default::default()
        };
        assert!(zero.apply(WapiRequest::get("network")).is_err());

        let huge = SearchOptions {
            max_results: Some(MAX_RESULTS_LIMIT + 1),
            ..Default::default()
        };
        assert!(huge.apply(WapiRequest::get("network")).is_err());
    }

    #[test]
    fn test_max_results_schema_matches_limits() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchOptions)).unwrap();
        let max_results = schema["properties"]["max_results"].to_string();
        assert!(max_results.contains("\"minimum\":1"), "{max_results}");
        assert!(max_results.contains("\"maximum\":1000"), "{max_results}");
    }

    #[test]
    fn test_name_filter() {
        let request = name_filter(WapiRequest::get("record:a"), "name", None, Some("^web".into())).unwrap();
        assert_eq!(query_value(&request, "name~"), Some("^web"));

        let request = name_filter(WapiRequest::get("record:a"), "name", Some("www.example.com".into()), None).unwrap();
        assert_eq!(query_value(&request, "name"), Some("www.example.com"));

        assert!(name_filter(
            WapiRequest::get("record:a"),
            "name",
            Some("a".into()),
            Some("b".into())
        )
        .is_err());
    }

    #[test]
    fn test_object_body_ttl_sets_use_ttl() {
        let body = ObjectBody::new()
            .field("name", "www.example.com")
            .field_opt::<String>("comment", None)
            .ttl(Some(300))
            .build();
        assert_eq!(
            body,
            json!({"name": "www.example.com", "ttl": 300, "use_ttl": true})
        );
    }

    #[test]
    fn test_validate_cidr() {
        assert!(validate_cidr("network", "10.0.0.0/24").is_ok());
        assert!(validate_cidr("network", "2001:db8::/64").is_ok());
        assert!(validate_cidr("network", "10.0.0.0").is_err());
        assert!(validate_cidr("network", "10.0.0.0/33").is_err());
        assert!(validate_cidr("network", "not-a-net/8").is_err());
    }

    #[test]
    fn test_validate_mac() {
        assert!(validate_mac("mac", "00:1a:2B:3c:4d:5e").is_ok());
        assert!(validate_mac("mac", "00-1a-2b-3c-4d-5e").is_err());
        assert!(validate_mac("mac", "00:1a:2b:3c:4d").is_err());
        assert!(validate_mac("mac", "00:1a:2b:3c:4d:zz").is_err());
    }

    #[test]
    fn test_validate_ref() {
        assert!(validate_ref("ref", "record:a/ZG5zLmJpbmRfYSQu:www.example.com/default").is_ok());
        assert!(validate_ref("ref", "network/ZG5zLm5ldHdvcmskMTAuMC4wLjAvMjQvMA:10.0.0.0/24/default").is_ok());
        assert!(validate_ref("ref", "www.example.com").is_err());
        assert!(validate_ref("ref", "/abc").is_err());
        assert!(validate_ref("ref", "record:a/abc def").is_err());
        assert!(validate_ref("ref", "grid/b25l:Infoblox?_function=restartservices").is_err());
        assert!(validate_ref("ref", "record:a/abc:www.example.com/default#top").is_err());

        assert!(validate_ref_type("grid_ref", "grid/b25lLmNsdXN0ZXIkMA:Infoblox", "grid").is_ok());
        assert!(validate_ref_type("grid_ref", "member/b25l:gm", "grid").is_err());
    }

    #[test]
    fn test_ip_validators() {
        assert!(validate_ipv4("ipv4addr", "192.0.2.10").is_ok());
        assert!(validate_ipv4("ipv4addr", "192.0.2.300").is_err());
        assert!(validate_ipv4_or_next_available("ipv4addr", "func:nextavailableip:10.0.0.0/24").is_ok());
        assert!(validate_ipv4_or_next_available("ipv4addr", "func:nextavailableip:").is_err());
        assert!(validate_ipv6("ipv6addr", "2001:db8::10").is_ok());
        assert!(validate_ipv6("ipv6addr", "192.0.2.10").is_err());
        assert!(validate_prefix_length("cidr", 26).is_ok());
        assert!(validate_prefix_length("cidr", 0).is_err());
    }
}
