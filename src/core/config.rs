use crate::core::catalog::DirectiveName;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PolicyMode {
    #[serde(rename = "enforce")]
    Enforce,
    #[serde(rename = "report")]
    ReportOnly,
    #[default]
    #[serde(rename = "disabled")]
    Disabled,
}

impl PolicyMode {
    #[inline]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, PolicyMode::Disabled)
    }
}

/// Per-directive configuration. A disabled directive keeps its source text
/// so previously entered policy survives an enable/disable toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectivePolicy {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    source: String,
}

impl DirectivePolicy {
    #[inline]
    pub fn new(enabled: bool, source: impl Into<String>) -> Self {
        Self {
            enabled,
            source: source.into(),
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    #[inline]
    pub fn set_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.source = source.into();
        self
    }
}

/// Immutable snapshot of one request context's CSP configuration. The
/// compiler reads it; it is never mutated during a compile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    mode: PolicyMode,
    #[serde(default)]
    directives: FxHashMap<DirectiveName, DirectivePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    report_to: Option<String>,
}

impl PolicyConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> PolicyMode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: PolicyMode) -> &mut Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn directive(&self, name: DirectiveName) -> Option<&DirectivePolicy> {
        self.directives.get(&name)
    }

    pub fn set_directive(&mut self, name: DirectiveName, policy: DirectivePolicy) -> &mut Self {
        self.directives.insert(name, policy);
        self
    }

    #[inline]
    pub fn directives(&self) -> impl Iterator<Item = (DirectiveName, &DirectivePolicy)> {
        self.directives.iter().map(|(name, policy)| (*name, policy))
    }

    #[inline]
    pub fn report_to(&self) -> Option<&str> {
        self.report_to.as_deref()
    }

    #[inline]
    pub fn set_report_to(&mut self, value: impl Into<String>) -> &mut Self {
        self.report_to = Some(value.into());
        self
    }

    #[inline]
    pub fn clear_report_to(&mut self) -> &mut Self {
        self.report_to = None;
        self
    }

    /// Upper bound used to size the header buffer before compiling.
    pub(crate) fn estimated_size(&self) -> usize {
        self.directives
            .iter()
            .filter(|(_, policy)| policy.enabled)
            .map(|(name, policy)| name.as_str().len() + policy.source.len() + 3)
            .sum()
    }
}

#[derive(Debug, Default)]
pub struct PolicyConfigBuilder {
    config: PolicyConfig,
}

impl PolicyConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(mut self, mode: PolicyMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn directive(mut self, name: DirectiveName, source: impl Into<String>) -> Self {
        self.config
            .set_directive(name, DirectivePolicy::new(true, source));
        self
    }

    pub fn disabled_directive(mut self, name: DirectiveName, source: impl Into<String>) -> Self {
        self.config
            .set_directive(name, DirectivePolicy::new(false, source));
        self
    }

    #[inline]
    pub fn report_to(mut self, value: impl Into<String>) -> Self {
        self.config.report_to = Some(value.into());
        self
    }

    #[inline]
    pub fn build(self) -> PolicyConfig {
        self.config
    }
}
