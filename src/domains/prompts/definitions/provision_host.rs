//! Host provisioning walkthrough.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

pub struct ProvisionHostPrompt;

impl PromptDefinition for ProvisionHostPrompt {
    const NAME: &'static str = "provision_host";
    const DESCRIPTION: &'static str =
        "Provision a new host: pick a free address, create the host record and verify DNS";

    fn template() -> &'static str {
        r#"Provision the host {{hostname}} in network {{network}} (DNS view "{{view}}").

1. Call search_host_records with name={{hostname}} and view={{view}}. If a record already exists, stop and report it.
2. Call search_networks with network={{network}} to confirm the network exists and note its _ref.
3. Call get_next_available_ip with that network _ref to preview the next free address.
4. Call create_host_record with name={{hostname}}, view={{view}} and ipv4addrs=[{"ipv4addr": "func:nextavailableip:{{network}}"{{#if mac}}, "mac": "{{mac}}", "configure_for_dhcp": true{{/if}}}].
{{#if mac}}   The address is also reserved in DHCP for {{mac}}.
{{else}}   No MAC was given, so no DHCP reservation is made.
{{/if}}5. Call search_host_records again and report the assigned address and the record's _ref.
6. If DHCP was configured, call restart_grid_services (using the _ref from get_grid_info) so the reservation takes effect.
"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("hostname", "Fully qualified host name to create", true),
            argument("network", "Network to allocate from, in CIDR notation", true),
            argument("view", "DNS view (server default when omitted)", false),
            argument("mac", "MAC address for a DHCP reservation", false),
        ]
    }
}
