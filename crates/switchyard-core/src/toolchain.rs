//! Toolchain requests attached to each job.

use crate::platform::CacheBackend;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Stable,
    Nightly,
}

/// What the runner installs before the job body runs: the toolchain
/// channel, extra rustup components, cargo tools, and the cache partition
/// the build may reuse. Keys never collide across platform or job kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolchainSpec {
    pub toolchain: Channel,
    /// Comma-joined rustup components.
    pub components: Option<String>,
    /// Comma-joined cargo tools.
    pub tools: Option<String>,
    pub shared_key: Option<String>,
    pub cache_backend: CacheBackend,
}

impl ToolchainSpec {
    pub fn nightly(shared_key: impl Into<String>, cache_backend: CacheBackend) -> Self {
        Self {
            toolchain: Channel::Nightly,
            components: None,
            tools: None,
            shared_key: Some(shared_key.into()),
            cache_backend,
        }
    }

    pub fn stable(shared_key: impl Into<String>, cache_backend: CacheBackend) -> Self {
        Self {
            toolchain: Channel::Stable,
            ..Self::nightly(shared_key, cache_backend)
        }
    }

    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    pub fn with_tools(mut self, tools: impl Into<String>) -> Self {
        self.tools = Some(tools.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Channel::Nightly).unwrap(), "\"nightly\"");
        assert_eq!(serde_json::to_string(&Channel::Stable).unwrap(), "\"stable\"");
    }

    #[test]
    fn test_toolchain_construction() {
        let spec = ToolchainSpec::nightly("docs-linux-x86_64", CacheBackend::Ubicloud)
            .with_components("rust-docs");
        assert_eq!(spec.toolchain, Channel::Nightly);
        assert_eq!(spec.components.as_deref(), Some("rust-docs"));
        assert_eq!(spec.tools, None);
        assert_eq!(spec.shared_key.as_deref(), Some("docs-linux-x86_64"));
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let spec = ToolchainSpec::stable("semver-checks", CacheBackend::Ubicloud);
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["components"], serde_json::Value::Null);
        assert_eq!(value["tools"], serde_json::Value::Null);
    }
}
