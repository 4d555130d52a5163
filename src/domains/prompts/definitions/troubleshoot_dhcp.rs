//! DHCP troubleshooting guide for one client.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

pub struct TroubleshootDhcpPrompt;

impl PromptDefinition for TroubleshootDhcpPrompt {
    const NAME: &'static str = "troubleshoot_dhcp";
    const DESCRIPTION: &'static str =
        "Investigate why a client is not getting the expected DHCP address";

    fn template() -> &'static str {
        r#"A DHCP client is misbehaving: {{client}}.
{{#if network}}It is expected to get an address in {{network}}.
{{/if}}
Investigate with read-only tools:

1. Call search_dhcp_leases with hardware (if the client is a MAC address) or address (if it is an IP) and report binding state, start and end times.
2. Call search_fixed_addresses for the same MAC or IP to check for a reservation, and whether it conflicts with the lease.
{{#if network}}3. Call search_dhcp_ranges with network={{network}} and check that a range exists and is served by a grid member.
4. Call search_ip_addresses with network={{network}} and status=UNUSED to see whether the range is exhausted.
{{else}}3. Use the lease or reservation to find the client's network, then check its DHCP ranges with search_dhcp_ranges.
{{/if}}5. Conclude with the most likely cause and the change that would fix it. Do not apply changes without confirmation.
"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("client", "Client MAC address, IP address or host name", true),
            argument("network", "Network the client should be in, in CIDR notation", false),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_troubleshoot_dhcp_metadata() {
        assert_eq!(TroubleshootDhcpPrompt::NAME, "troubleshoot_dhcp");
        let args = TroubleshootDhcpPrompt::arguments();
        assert_eq!(args[0].name, "client");
        assert_eq!(args[1].required, Some(false));
    }
}
