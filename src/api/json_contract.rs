use serde::{Deserialize, Serialize};

use crate::error::{RatingError, RatingResult};

use super::RatingSnapshot;

pub const RATING_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope written by [`RatingSnapshot::to_json_contract_v1_pretty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RatingSnapshot,
}

/// Either shape a host may hand back: versioned envelope first, bare snapshot second.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Versioned(RatingSnapshotJsonContractV1),
    Bare(RatingSnapshot),
}

impl RatingSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> RatingResult<String> {
        let envelope = RatingSnapshotJsonContractV1 {
            schema_version: RATING_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&envelope)
            .map_err(|e| RatingError::Serialization(format!("snapshot contract v1: {e}")))
    }

    /// Parses a bare snapshot or a v1 envelope; other schema versions are rejected.
    pub fn from_json_compat_str(input: &str) -> RatingResult<Self> {
        match serde_json::from_str::<SnapshotPayload>(input) {
            Ok(SnapshotPayload::Bare(snapshot)) => Ok(snapshot),
            Ok(SnapshotPayload::Versioned(envelope))
                if envelope.schema_version == RATING_SNAPSHOT_JSON_SCHEMA_V1 =>
            {
                Ok(envelope.snapshot)
            }
            Ok(SnapshotPayload::Versioned(envelope)) => Err(RatingError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                envelope.schema_version
            ))),
            Err(e) => Err(RatingError::Serialization(format!(
                "snapshot json matches neither bare nor v1 shape: {e}"
            ))),
        }
    }
}
