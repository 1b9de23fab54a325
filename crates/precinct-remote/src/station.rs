//! Station record service client
//!
//! Every operation is a `POST <endpoint>/<op>` with a JSON body. Anything
//! other than a decodable 2xx reply is a transport failure.

use std::time::Instant;

use precinct_core::errors::{ExError, PrecinctError};
use precinct_core::{
    log_op_end, log_op_error, log_op_start, CriminalRecordRequest, MissingPersonRecordRequest,
    RecordEditRequest, RecordId, RecordService,
};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::wire::{
    CreateCriminalRecordBody, CreateMissingRecordBody, CreatedRecord, EditCriminalRecordBody,
    EditOutcome, RecordCounts, RecordCountsBody,
};

/// Handle on one station's record service
pub struct RemoteStationService {
    client: Client,
    endpoint: String,
}

impl RemoteStationService {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call<B, T>(&self, op: &str, body: &B) -> Result<T, ExError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log_op_start!(op, endpoint = self.endpoint.as_str());
        let start = Instant::now();

        let result = self.send(op, body).map_err(|e| {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
        Ok(result)
    }

    fn send<B, T>(&self, op: &str, body: &B) -> Result<T, ExError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.endpoint, op);
        self.client
            .post(&url)
            .json(body)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<T>())
            .map_err(|e| transport_error(op, e))
    }
}

fn transport_error(op: &str, err: reqwest::Error) -> ExError {
    let message = if err.is_decode() {
        format!("unreadable reply: {}", err)
    } else if let Some(status) = err.status() {
        format!("station service replied {}", status)
    } else {
        err.to_string()
    };
    PrecinctError::Transport {
        op: op.to_string(),
        reason: message,
    }
    .into()
}

impl RecordService for RemoteStationService {
    fn create_criminal_record(
        &self,
        request: &CriminalRecordRequest,
    ) -> Result<Option<RecordId>, ExError> {
        let reply: CreatedRecord =
            self.call("createCRecord", &CreateCriminalRecordBody::from(request))?;
        Ok(reply.into_record_id())
    }

    fn create_missing_record(
        &self,
        request: &MissingPersonRecordRequest,
    ) -> Result<Option<RecordId>, ExError> {
        let reply: CreatedRecord =
            self.call("createMRecord", &CreateMissingRecordBody::from(request))?;
        Ok(reply.into_record_id())
    }

    fn record_counts(&self) -> Result<String, ExError> {
        let reply: RecordCounts = self.call("getRecordCounts", &RecordCountsBody::default())?;
        Ok(reply.counts)
    }

    fn edit_criminal_record(&self, request: &RecordEditRequest) -> Result<bool, ExError> {
        let reply: EditOutcome = self.call("editCRecord", &EditCriminalRecordBody::from(request))?;
        Ok(reply.updated)
    }
}
