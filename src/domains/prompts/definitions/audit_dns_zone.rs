//! DNS zone audit checklist.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

pub struct AuditDnsZonePrompt;

impl PromptDefinition for AuditDnsZonePrompt {
    const NAME: &'static str = "audit_dns_zone";
    const DESCRIPTION: &'static str =
        "Review a DNS zone for dangling CNAMEs, missing PTRs and inconsistent TTLs";

    fn template() -> &'static str {
        r#"Audit the DNS zone {{zone}} in view "{{view}}". Do not change anything; report findings only.

1. Call search_auth_zones with fqdn={{zone}} and view={{view}}, requesting return_fields ["grid_primary", "soa_default_ttl"].
2. List the zone's records with search_a_records, search_aaaa_records, search_cname_records, search_mx_records and search_host_records (zone={{zone}}, view={{view}}).
3. Flag:
   - CNAME records whose canonical name does not resolve to any record in the grid (check with global_search).
   - A and host records whose address has no matching PTR record (search_ptr_records with ipv4addr).
   - MX records pointing at names without A/AAAA records.
   - Records with an explicit TTL far from the zone default.
4. Summarize the findings as a table: record, issue, suggested fix (including the _ref needed to apply it).
"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("zone", "Zone name, e.g. example.com", true),
            argument("view", "DNS view (server default when omitted)", false),
        ]
    }
}
