//! JSON bodies exchanged with the registry and the station record service

use precinct_core::{
    CriminalRecordRequest, MissingPersonRecordRequest, RecordEditRequest, RecordId,
};
use serde::{Deserialize, Serialize};

/// Registry entry for a bound station service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCriminalRecordBody {
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub captured: bool,
}

impl From<&CriminalRecordRequest> for CreateCriminalRecordBody {
    fn from(request: &CriminalRecordRequest) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            description: request.description.clone(),
            captured: request.status.is_captured(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMissingRecordBody {
    pub first_name: String,
    pub last_name: String,
    pub last_address: String,
    /// Sent exactly as typed, `MM/DD/YY`
    pub last_seen_date: String,
    pub last_location: String,
    pub resolved: bool,
}

impl From<&MissingPersonRecordRequest> for CreateMissingRecordBody {
    fn from(request: &MissingPersonRecordRequest) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            last_address: request.last_address.clone(),
            last_seen_date: request.last_seen_date.as_str().to_string(),
            last_location: request.last_location.clone(),
            resolved: request.resolved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCriminalRecordBody {
    pub record_id: String,
    pub captured: bool,
}

impl From<&RecordEditRequest> for EditCriminalRecordBody {
    fn from(request: &RecordEditRequest) -> Self {
        Self {
            record_id: request.record_id.clone(),
            captured: request.status.is_captured(),
        }
    }
}

/// `getRecordCounts` takes no arguments; the body is `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCountsBody {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    #[serde(default)]
    pub record_id: Option<String>,
}

impl CreatedRecord {
    /// The new record's id; a missing or empty id means nothing was created
    pub fn into_record_id(self) -> Option<RecordId> {
        self.record_id.and_then(RecordId::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub counts: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOutcome {
    pub updated: bool,
}
