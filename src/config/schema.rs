//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Contents of a `.cloudenv.yml` file.
///
/// ```yaml
/// default_environment: usgovernment
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CloudEnvConfig {
    /// Environment name used when none is given on the command line
    /// or via `AZURE_ENVIRONMENT`.
    #[serde(default)]
    pub default_environment: Option<String>,
}
