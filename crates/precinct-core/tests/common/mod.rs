// Shared test doubles for the station record service and its locator.
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

use precinct_core::logging_facility::AuditRecorder;
use precinct_core::{
    BadgeId, Console, CriminalRecordRequest, ExError, ExErrorKind, MissingPersonRecordRequest,
    RecordEditRequest, RecordId, RecordService, ServiceLocator, SessionContext, StationCode,
};
use precinct_core_types::SessionId;

/// One call observed by the fake service
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCriminal(CriminalRecordRequest),
    CreateMissing(MissingPersonRecordRequest),
    Counts,
    Edit(RecordEditRequest),
}

/// Scripted record service that remembers every call it receives
pub struct FakeRecordService {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub criminal_id: Option<String>,
    pub missing_id: Option<String>,
    pub counts: String,
    pub edit_result: bool,
    pub transport_down: bool,
    pub forbid_calls: bool,
}

impl FakeRecordService {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            criminal_id: Some("CR42".to_string()),
            missing_id: Some("MR7".to_string()),
            counts: "PD 3, SPB 0".to_string(),
            edit_result: true,
            transport_down: false,
            forbid_calls: false,
        }
    }

    /// A service that fails the test if it is ever called
    pub fn forbidden() -> Self {
        Self {
            forbid_calls: true,
            ..Self::new()
        }
    }

    pub fn calls_handle(&self) -> Rc<RefCell<Vec<Call>>> {
        self.calls.clone()
    }

    fn observe(&self, call: Call) -> Result<(), ExError> {
        assert!(
            !self.forbid_calls,
            "record service must not be called, got {:?}",
            call
        );
        let op = match &call {
            Call::CreateCriminal(_) => "createCRecord",
            Call::CreateMissing(_) => "createMRecord",
            Call::Counts => "getRecordCounts",
            Call::Edit(_) => "editCRecord",
        };
        self.calls.borrow_mut().push(call);
        if self.transport_down {
            return Err(ExError::new(ExErrorKind::Transport)
                .with_op(op)
                .with_message("connection reset"));
        }
        Ok(())
    }
}

impl RecordService for FakeRecordService {
    fn create_criminal_record(
        &self,
        request: &CriminalRecordRequest,
    ) -> Result<Option<RecordId>, ExError> {
        self.observe(Call::CreateCriminal(request.clone()))?;
        Ok(self.criminal_id.clone().and_then(RecordId::new))
    }

    fn create_missing_record(
        &self,
        request: &MissingPersonRecordRequest,
    ) -> Result<Option<RecordId>, ExError> {
        self.observe(Call::CreateMissing(request.clone()))?;
        Ok(self.missing_id.clone().and_then(RecordId::new))
    }

    fn record_counts(&self) -> Result<String, ExError> {
        self.observe(Call::Counts)?;
        Ok(self.counts.clone())
    }

    fn edit_criminal_record(&self, request: &RecordEditRequest) -> Result<bool, ExError> {
        self.observe(Call::Edit(request.clone()))?;
        Ok(self.edit_result)
    }
}

/// Locator that can never find anything
pub struct UnreachableRegistry;

impl ServiceLocator for UnreachableRegistry {
    fn resolve(&self, station: &StationCode) -> Result<Box<dyn RecordService>, ExError> {
        Err(ExError::new(ExErrorKind::ServiceUnavailable)
            .with_op("resolve")
            .with_key(station.lookup_key())
            .with_message("connection refused"))
    }
}

/// Locator handing out one prepared service, remembering the station asked for
pub struct SingleStationRegistry {
    service: RefCell<Option<FakeRecordService>>,
    pub requested: RefCell<Vec<String>>,
}

impl SingleStationRegistry {
    pub fn new(service: FakeRecordService) -> Self {
        Self {
            service: RefCell::new(Some(service)),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl ServiceLocator for SingleStationRegistry {
    fn resolve(&self, station: &StationCode) -> Result<Box<dyn RecordService>, ExError> {
        self.requested.borrow_mut().push(station.lookup_key());
        let service = self
            .service
            .borrow_mut()
            .take()
            .expect("station resolved more than once");
        Ok(Box::new(service))
    }
}

/// Output sink the test keeps a handle to after the console is moved away
#[derive(Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub type TestConsole = Console<Cursor<Vec<u8>>, SharedOutput>;

/// Console fed with `input`, plus a handle on everything it prints
pub fn console(input: &str) -> (TestConsole, SharedOutput) {
    let output = SharedOutput::default();
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), output.clone());
    (console, output)
}

pub fn recorder(badge: &str) -> AuditRecorder {
    AuditRecorder::new(SessionId::new(), badge)
}

pub fn context(badge: &str, service: FakeRecordService) -> SessionContext {
    SessionContext::new(BadgeId::new(badge), Box::new(service), recorder(badge))
}

/// Terminal whose output side has gone away
pub struct BrokenOutput;

impl Write for BrokenOutput {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "terminal closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Console with scripted input that fails on every write
pub fn broken_console(input: &str) -> Console<Cursor<Vec<u8>>, BrokenOutput> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), BrokenOutput)
}
