use super::catalog::CatalogError;

/// Strategy for handling a failed author deletion
#[derive(Debug, PartialEq, Eq)]
pub enum RemediationStrategy {
    /// Resolve the author's dependents and retry the deletion
    Remediate,
    /// Report the failure unchanged, retrying blind is unsafe
    Surface,
}

impl CatalogError {
    /// Determine how a failed author delete should be handled
    pub fn to_remediation_strategy(&self) -> RemediationStrategy {
        match self {
            // 412 - Precondition Failed
            //
            // The catalog refuses to delete an author while books or prizes still reference it.
            // This is the only signal that dependents exist, so it is the only one we act on.
            Self::Api { .. } if self.is_conflict() => RemediationStrategy::Remediate,

            // Any other status - not found, bad request, server errors
            //
            // Nothing tells us dependents are the cause, deleting them could destroy data for
            // a failure that has nothing to do with them.
            Self::Api { .. } => RemediationStrategy::Surface,

            // Network error, timeout or undecodable body
            Self::Request(_) => RemediationStrategy::Surface,
        }
    }
}
