use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Editor hook request: the path the agent is about to touch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HookRequest {
    #[serde(default)]
    pub path: String,
}

/// Hook response. Advisory only: `continue` is always true, so a hook failure
/// or a similarity warning never blocks the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HookResponse {
    #[serde(rename = "continue")]
    pub continue_: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_message: Option<String>,
}

impl HookResponse {
    /// The default pass-through response.
    pub fn allow() -> Self {
        Self {
            continue_: true,
            user_message: None,
            agent_message: None,
        }
    }

    pub fn advise(user_message: String, agent_message: String) -> Self {
        Self {
            continue_: true,
            user_message: Some(user_message),
            agent_message: Some(agent_message),
        }
    }
}

/// One ranked similarity match in machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchEntry {
    pub name: String,
    pub path: String,
    /// Final score in [0, 1], rounded to two decimals.
    pub score: f64,
    /// Concept tags shared with the target, sorted; empty when the match is
    /// purely lexical.
    pub groups: Vec<String>,
}

/// Machine-readable output of a similarity check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    pub target: String,
    pub normalized: String,
    pub matches: Vec<MatchEntry>,
}

/// One inventory entry in `scan` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanEntry {
    pub name: String,
    pub path: String,
}

/// Machine-readable output of an inventory scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    pub root: String,
    pub components: Vec<ScanEntry>,
}
