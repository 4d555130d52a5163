//! WAPI search syntax reference (static Markdown).

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct SearchSyntaxResource;

impl ResourceDefinition for SearchSyntaxResource {
    const URI: &'static str = "infoblox://docs/search-syntax";
    const NAME: &'static str = "WAPI Search Syntax";
    const DESCRIPTION: &'static str =
        "Search modifiers, return fields and references accepted by the search tools";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(SEARCH_SYNTAX.to_string())
    }
}

const SEARCH_SYNTAX: &str = r#"# WAPI Search Syntax

Search tools translate their arguments into WAPI query parameters.

## Modifiers

| Suffix | Meaning | Example |
|--------|---------|---------|
| (none) | exact match | `name=www.example.com` |
| `~` | regular expression | `name~=^web[0-9]+\.` |
| `:` | case-insensitive | `name:=WWW.Example.com` |
| `<` / `>` | less / greater or equal (numbers, addresses) | `ttl<=300` |
| `!` | negation | `view!=external` |

Tools expose the regular-expression form as `<field>_regex` arguments.
Exact and regex filters on the same field are mutually exclusive.

## Result shaping

- `max_results` caps the number of objects returned (1-1000). WAPI
  returns an error when more objects match than the cap allows.
- `return_fields` adds fields to the object's default set
  (`_return_fields+`). Extensible attributes are `extattrs`.

## Object references

Every object carries a `_ref` such as
`record:a/ZG5zLmJpbmRfYSQuX2RlZmF1bHQ...:www.example.com/default`.
Pass it unchanged to `get_object`, `update_object`, `delete_object` and to
function tools (`get_next_available_ip`, `restart_grid_services`).

## Allocation shorthand

Address fields of `create_host_record`, `create_a_record` and
`create_fixed_address` accept `func:nextavailableip:<network>[,<view>]`
to take the next free address atomically, e.g.
`func:nextavailableip:10.0.0.0/24,default`.

## Schemas

Read `infoblox://schema/{object_type}` or call `get_wapi_schema` to see
which fields of an object type are searchable and with which modifiers.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_every_modifier() {
        for modifier in ["`~`", "`:`", "`!`", "_return_fields+"] {
            assert!(SEARCH_SYNTAX.contains(modifier), "missing {modifier}");
        }
    }
}
