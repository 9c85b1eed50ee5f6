//! Project references and REST endpoint paths.
//!
//! GitHub addresses a project as two path segments; GitLab addresses it as
//! one percent-encoded `namespace/name` segment.

use super::{Adapter, ProviderKind};
use crate::error::{ForgeError, Result};
use serde::Serialize;

/// A project named as `owner/name`. The owner may contain nested groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    pub owner: String,
    pub name: String,
}

impl ProjectRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/name`, splitting at the last `/`.
    pub fn parse(full_name: &str) -> Result<Self> {
        let trimmed = full_name.trim().trim_matches('/');
        match trimmed.rsplit_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(ForgeError::UserError(format!(
                "invalid project '{}'. Expected 'owner/name'",
                full_name
            ))),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// A resource under a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Commits,
    /// Per-commit detail carrying stats and files (GitLab: the commit diff).
    CommitDetail(String),
    /// All change requests regardless of state.
    ChangeRequests,
    ChangeRequestDetail(u64),
    /// Files touched by a change request.
    ChangeRequestFiles(u64),
    Issues,
    Issue(u64),
    Branches,
    Contributors,
}

/// A REST endpoint relative to a provider's API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Repositories visible to the authenticated user.
    Repos,
    Project(ProjectRef, Resource),
}

impl Endpoint {
    /// Path relative to the API base, without a leading `/`.
    pub fn path(&self, provider: ProviderKind) -> Result<String> {
        let adapter = provider.adapter();
        match self {
            Endpoint::Repos => Ok(adapter.repos_path().to_string()),
            Endpoint::Project(project, resource) => Ok(format!(
                "{}/{}",
                adapter.project_path(project)?,
                adapter.resource_path(resource)
            )),
        }
    }

    /// Absolute URL under `base`.
    pub fn url(&self, provider: ProviderKind, base: &str) -> Result<String> {
        Ok(format!("{}/{}", base.trim_end_matches('/'), self.path(provider)?))
    }
}

/// Validate one GitHub path segment and encode it.
pub(super) fn single_segment(adapter: &dyn Adapter, label: &str, value: &str) -> Result<String> {
    if value.is_empty() || value.contains('/') {
        return Err(ForgeError::Provider {
            provider: adapter.kind(),
            message: format!(
                "{} '{}' must be a single non-empty path segment",
                label, value
            ),
        });
    }
    Ok(encode_component(value))
}

/// Percent-encode everything outside the URI-component unreserved set.
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as-is and encodes UTF-8 bytes of
/// everything else, so `/` becomes `%2F`.
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
