//! The fixed set of Azure cloud environments.
//!
//! Each environment is a `static` singleton. Lookups hand out
//! `&'static Environment`, so two resolutions of the same cloud always
//! point at the same record.

use serde::Serialize;

/// Endpoints and DNS suffixes for one Azure cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Canonical name of the cloud (e.g. "Public", "USGovernmentL5").
    pub name: &'static str,
    /// Microsoft Entra login endpoint.
    pub authorization_endpoint: &'static str,
    /// Azure Resource Manager base URL.
    pub resource_manager_endpoint: &'static str,
    /// Microsoft Graph base URL.
    pub microsoft_graph_endpoint: &'static str,
    /// DNS suffix for storage accounts.
    pub storage_suffix: &'static str,
    /// DNS suffix for key vaults.
    pub key_vault_suffix: &'static str,
}

impl Environment {
    /// The record's endpoints as `(field, value)` pairs, in display order.
    pub fn endpoints(&self) -> [(&'static str, &'static str); 5] {
        [
            ("authorization_endpoint", self.authorization_endpoint),
            ("resource_manager_endpoint", self.resource_manager_endpoint),
            ("microsoft_graph_endpoint", self.microsoft_graph_endpoint),
            ("storage_suffix", self.storage_suffix),
            ("key_vault_suffix", self.key_vault_suffix),
        ]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub static AZURE_PUBLIC: Environment = Environment {
    name: "Public",
    authorization_endpoint: "https://login.microsoftonline.com",
    resource_manager_endpoint: "https://management.azure.com",
    microsoft_graph_endpoint: "https://graph.microsoft.com",
    storage_suffix: "core.windows.net",
    key_vault_suffix: "vault.azure.net",
};

/// Early-access regions of the public cloud. Same endpoints, separate identity.
pub static AZURE_PUBLIC_CANARY: Environment = Environment {
    name: "Canary",
    authorization_endpoint: "https://login.microsoftonline.com",
    resource_manager_endpoint: "https://management.azure.com",
    microsoft_graph_endpoint: "https://graph.microsoft.com",
    storage_suffix: "core.windows.net",
    key_vault_suffix: "vault.azure.net",
};

pub static AZURE_CHINA: Environment = Environment {
    name: "China",
    authorization_endpoint: "https://login.chinacloudapi.cn",
    resource_manager_endpoint: "https://management.chinacloudapi.cn",
    microsoft_graph_endpoint: "https://microsoftgraph.chinacloudapi.cn",
    storage_suffix: "core.chinacloudapi.cn",
    key_vault_suffix: "vault.azure.cn",
};

pub static AZURE_US_GOVERNMENT: Environment = Environment {
    name: "USGovernment",
    authorization_endpoint: "https://login.microsoftonline.us",
    resource_manager_endpoint: "https://management.usgovcloudapi.net",
    microsoft_graph_endpoint: "https://graph.microsoft.us",
    storage_suffix: "core.usgovcloudapi.net",
    key_vault_suffix: "vault.usgovcloudapi.net",
};

/// US Government Impact Level 5 (DoD). Differs from L4 only in its Graph host.
pub static AZURE_US_GOVERNMENT_L5: Environment = Environment {
    name: "USGovernmentL5",
    authorization_endpoint: "https://login.microsoftonline.us",
    resource_manager_endpoint: "https://management.usgovcloudapi.net",
    microsoft_graph_endpoint: "https://dod-graph.microsoft.us",
    storage_suffix: "core.usgovcloudapi.net",
    key_vault_suffix: "vault.usgovcloudapi.net",
};

pub fn azure_public() -> &'static Environment {
    &AZURE_PUBLIC
}

pub fn azure_public_canary() -> &'static Environment {
    &AZURE_PUBLIC_CANARY
}

pub fn azure_china() -> &'static Environment {
    &AZURE_CHINA
}

pub fn azure_us_government() -> &'static Environment {
    &AZURE_US_GOVERNMENT
}

pub fn azure_us_government_l5() -> &'static Environment {
    &AZURE_US_GOVERNMENT_L5
}
