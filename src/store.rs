use crate::core::compiler::{compile_header, compile_report_to};
use crate::core::config::PolicyConfig;
use crate::error::CspError;
use actix_web::http::header::{HeaderName, HeaderValue};
use arc_swap::ArcSwap;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestContext {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "loggedin")]
    LoggedIn,
    #[serde(rename = "frontend")]
    Frontend,
}

impl RequestContext {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::LoggedIn => "loggedin",
            Self::Frontend => "frontend",
        }
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three per-context policies together, one record per stored
/// configuration. A missing context deserializes to its default, which is
/// `Disabled` and emits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPolicies {
    #[serde(default)]
    pub admin: PolicyConfig,
    #[serde(default)]
    pub loggedin: PolicyConfig,
    #[serde(default)]
    pub frontend: PolicyConfig,
}

impl ContextPolicies {
    #[inline]
    pub fn config_for(&self, context: RequestContext) -> &PolicyConfig {
        match context {
            RequestContext::Admin => &self.admin,
            RequestContext::LoggedIn => &self.loggedin,
            RequestContext::Frontend => &self.frontend,
        }
    }

    #[inline]
    pub fn config_mut(&mut self, context: RequestContext) -> &mut PolicyConfig {
        match context {
            RequestContext::Admin => &mut self.admin,
            RequestContext::LoggedIn => &mut self.loggedin,
            RequestContext::Frontend => &mut self.frontend,
        }
    }
}

/// Compiled header pairs for one context: at most the CSP header and the
/// companion `Report-To` header.
#[derive(Debug, Clone, Default)]
pub struct CompiledHeaders {
    headers: SmallVec<[(HeaderName, HeaderValue); 2]>,
}

impl CompiledHeaders {
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(HeaderName, HeaderValue)> {
        self.headers.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }
}

/// Process-wide policy store. Readers take a lock-free snapshot; writers
/// swap in a new one and invalidate the compiled-header cache, so a request
/// never observes a half-updated configuration.
pub struct PolicyStore {
    policies: ArcSwap<ContextPolicies>,
    compiled: DashMap<RequestContext, CompiledHeaders>,
}

impl PolicyStore {
    pub fn new(policies: ContextPolicies) -> Self {
        Self {
            policies: ArcSwap::from_pointee(policies),
            compiled: DashMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CspError> {
        let policies: ContextPolicies =
            serde_json::from_str(json).map_err(|e| CspError::SerializationError(e.to_string()))?;
        Ok(Self::new(policies))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CspError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<ContextPolicies> {
        self.policies.load_full()
    }

    /// Applies `f` to a copy of the current policies and swaps the result
    /// in. Compiled headers are invalidated and rebuilt on next use.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut ContextPolicies),
    {
        let mut next = (*self.policies.load_full()).clone();
        f(&mut next);
        self.policies.store(Arc::new(next));
        self.compiled.clear();
        log::debug!("policy store updated, compiled header cache cleared");
    }

    /// Returns the compiled header pairs for `context`, compiling and
    /// caching them on first use. A compile failure drops the affected
    /// header and is logged rather than propagated; emitting the remaining
    /// headers beats failing the request.
    pub fn headers_for(&self, context: RequestContext) -> CompiledHeaders {
        if let Some(hit) = self.compiled.get(&context) {
            return hit.value().clone();
        }

        let snapshot = self.policies.load();
        let config = snapshot.config_for(context);
        let mut headers = SmallVec::new();

        match compile_header(config) {
            Ok(Some(pair)) => headers.push(pair),
            Ok(None) => {}
            Err(e) => log::warn!("skipping CSP header for context {}: {}", context, e),
        }

        match compile_report_to(config) {
            Ok(Some(pair)) => headers.push(pair),
            Ok(None) => {}
            Err(e) => log::warn!("skipping Report-To header for context {}: {}", context, e),
        }

        let compiled = CompiledHeaders { headers };
        self.compiled.insert(context, compiled.clone());
        compiled
    }
}

impl Default for PolicyStore {
    #[inline]
    fn default() -> Self {
        Self::new(ContextPolicies::default())
    }
}

impl fmt::Debug for PolicyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyStore")
            .field("policies", &self.policies.load_full())
            .field("compiled_contexts", &self.compiled.len())
            .finish()
    }
}
