use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of ~/.config/lead-scout/config.yaml
///
/// Example YAML:
/// ```yaml
/// owner: dana@acme.test
/// store: /srv/crm/leads.json
/// qualify_threshold: 70
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Identity whose leads this tool reads and writes
    pub owner: String,

    /// Lead book path (default: ~/.config/lead-scout/leads.json)
    #[serde(default)]
    pub store: Option<PathBuf>,

    /// Minimum stored score for `qualify` (default: 70)
    #[serde(default)]
    pub qualify_threshold: Option<u32>,
}
