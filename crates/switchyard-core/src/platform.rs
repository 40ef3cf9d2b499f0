//! The platform catalogue: logical platforms and the runners that carry them.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logical build platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Hosted runner for jobs that have no platform dimension.
    Default,
    LinuxX86_64,
    LinuxArm64,
    WindowsX86_64,
    MacosX86_64,
    MacosArm64,
}

/// Where a runner's build caches live. Linux runners are project-owned
/// Ubicloud machines; Windows and macOS runners are hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    Ubicloud,
    Github,
}

/// One runner the catalogue can place jobs on.
#[derive(Debug, Clone)]
pub struct PlatformDescriptor {
    pub platform: Platform,
    /// Runner label the workflow schedules onto.
    pub runner: &'static str,
    /// Suffix for human-readable job names, e.g. "Linux x86_64".
    pub display_name: &'static str,
    /// Stable identifier used in cache partition keys.
    pub slug: &'static str,
    pub cache_backend: CacheBackend,
}

/// Static platform table, loaded once at startup and never mutated.
/// Declaration order is the fan-out order observed in the emitted matrix.
#[derive(Debug, Clone)]
pub struct PlatformCatalogue {
    entries: Vec<PlatformDescriptor>,
}

impl PlatformCatalogue {
    pub fn new() -> Self {
        Self {
            entries: vec![
                PlatformDescriptor {
                    platform: Platform::Default,
                    runner: "ubuntu-24.04",
                    display_name: "Ubuntu",
                    slug: "default",
                    cache_backend: CacheBackend::Github,
                },
                PlatformDescriptor {
                    platform: Platform::LinuxX86_64,
                    runner: "ubicloud-standard-8",
                    display_name: "Linux x86_64",
                    slug: "linux-x86_64",
                    cache_backend: CacheBackend::Ubicloud,
                },
                PlatformDescriptor {
                    platform: Platform::LinuxArm64,
                    runner: "ubicloud-standard-8-arm",
                    display_name: "Linux arm64",
                    slug: "linux-arm64",
                    cache_backend: CacheBackend::Ubicloud,
                },
                PlatformDescriptor {
                    platform: Platform::WindowsX86_64,
                    runner: "windows-2022",
                    display_name: "Windows x86_64",
                    slug: "windows-x86_64",
                    cache_backend: CacheBackend::Github,
                },
                PlatformDescriptor {
                    platform: Platform::MacosX86_64,
                    runner: "macos-13",
                    display_name: "macOS x86_64",
                    slug: "macos-x86_64",
                    cache_backend: CacheBackend::Github,
                },
                PlatformDescriptor {
                    platform: Platform::MacosArm64,
                    runner: "macos-14",
                    display_name: "macOS arm64",
                    slug: "macos-arm64",
                    cache_backend: CacheBackend::Github,
                },
            ],
        }
    }

    /// A miss means a builder asked for a platform the table does not
    /// carry. That is a configuration bug, not a recoverable state.
    pub fn lookup(&self, platform: Platform) -> Result<&PlatformDescriptor> {
        self.entries
            .iter()
            .find(|d| d.platform == platform)
            .ok_or_else(|| Error::UnknownPlatform(format!("{platform:?}")))
    }

    /// Cross-platform fan-out targets, primary platform first.
    pub fn fan_out(&self) -> impl Iterator<Item = &PlatformDescriptor> {
        self.entries
            .iter()
            .filter(|d| d.platform != Platform::Default)
    }
}

impl Default for PlatformCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fan_out_order() {
        let catalogue = PlatformCatalogue::new();
        let platforms: Vec<Platform> = catalogue.fan_out().map(|d| d.platform).collect();
        assert_eq!(
            platforms,
            vec![
                Platform::LinuxX86_64,
                Platform::LinuxArm64,
                Platform::WindowsX86_64,
                Platform::MacosX86_64,
                Platform::MacosArm64,
            ]
        );
    }

    #[test]
    fn test_lookup_runner_labels() {
        let catalogue = PlatformCatalogue::new();
        assert_eq!(
            catalogue.lookup(Platform::LinuxX86_64).unwrap().runner,
            "ubicloud-standard-8"
        );
        assert_eq!(
            catalogue.lookup(Platform::Default).unwrap().runner,
            "ubuntu-24.04"
        );
    }

    #[test]
    fn test_cache_backends() {
        let catalogue = PlatformCatalogue::new();
        for descriptor in catalogue.fan_out() {
            let expected = match descriptor.platform {
                Platform::LinuxX86_64 | Platform::LinuxArm64 => CacheBackend::Ubicloud,
                _ => CacheBackend::Github,
            };
            assert_eq!(descriptor.cache_backend, expected);
        }
    }
}
