//! Planner delta → ordered, provider-shaped change requests.

use anexia_dns_provider::RecordRequest;

use crate::endpoint::Endpoint;
use crate::error::{SyncError, SyncResult};
use crate::plan::Changes;

/// Mutation kind of a [`ChangeSetEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "CREATE"),
            Self::Update => write!(f, "UPDATE"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One record mutation.
///
/// `record.name` is still fully qualified here; the reconciler rewrites it to
/// the zone-relative form once the owning zone is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSetEntry {
    pub action: ChangeAction,
    pub record: RecordRequest,
}

/// Builds change set entries from planner endpoints.
#[derive(Debug, Clone, Default)]
pub struct ChangeSetBuilder {
    region: Option<String>,
}

impl ChangeSetBuilder {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }

    /// One entry per endpoint, in input order.
    ///
    /// The first target becomes the record data; the TTL is copied only when
    /// configured. An endpoint without targets is rejected.
    pub fn build(&self, action: ChangeAction, endpoints: &[Endpoint]) -> SyncResult<Vec<ChangeSetEntry>> {
        endpoints
            .iter()
            .map(|endpoint| {
                let rdata = endpoint
                    .primary_target()
                    .ok_or_else(|| SyncError::EmptyTargets {
                        dns_name: endpoint.dns_name.clone(),
                    })?;
                Ok(ChangeSetEntry {
                    action,
                    record: RecordRequest {
                        name: endpoint.dns_name.clone(),
                        record_type: endpoint.record_type.clone(),
                        rdata: rdata.to_string(),
                        region: self.region.clone(),
                        ttl: endpoint.record_ttl.seconds(),
                    },
                })
            })
            .collect()
    }

    /// Creates, then updates (from `update_new`), then deletes.
    ///
    /// Deletes run last so that no identifier a create or update still relies
    /// on is freed first.
    pub fn build_all(&self, changes: &Changes) -> SyncResult<Vec<ChangeSetEntry>> {
        let mut entries = Vec::with_capacity(changes.len());
        entries.extend(self.build(ChangeAction::Create, &changes.create)?);
        entries.extend(self.build(ChangeAction::Update, &changes.update_new)?);
        entries.extend(self.build(ChangeAction::Delete, &changes.delete)?);
        Ok(entries)
    }
}
