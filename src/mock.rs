//! In-memory transport for deterministic tests: replays queued replies, injects
//! transport faults and records every outbound request.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Instant,
};

use bytes::Bytes;

use crate::error::{RestError, RestResult};
use crate::transport::{RestBytes, RestFuture, RestRequest, RestResponse, RestTransport};

#[derive(Clone, Debug)]
pub enum MockFault {
    Connect(String),
    Receive(String),
    Timeout(String),
}

impl MockFault {
    pub fn connection_refused() -> Self {
        Self::Connect("mock transport: connection refused".to_string())
    }

    fn into_error(self) -> RestError {
        match self {
            Self::Connect(reason) => RestError::connect(reason),
            Self::Receive(reason) => RestError::receive(reason, None),
            Self::Timeout(reason) => RestError::timeout(reason),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MockReply {
    pub status: u16,
    pub headers: Vec<(String, RestBytes)>,
    pub body: RestBytes,
}

impl MockReply {
    pub fn new(status: u16, body: impl Into<RestBytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, body.into())
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::text(status, body).with_header("content-type", "application/json")
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<RestBytes>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

#[derive(Clone, Debug)]
enum MockStep {
    Reply(MockReply),
    Fault(MockFault),
}

#[derive(Debug, Default)]
struct MockTransportState {
    steps: VecDeque<MockStep>,
    outbound: Vec<RestRequest>,
    last_status: Option<u16>,
    last_error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockTransportState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(reply: MockReply) -> Self {
        let transport = Self::new();
        transport.queue_reply(reply);
        transport
    }

    pub fn failing(fault: MockFault) -> Self {
        let transport = Self::new();
        transport.queue_fault(fault);
        transport
    }

    pub fn queue_reply(&self, reply: MockReply) {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while queueing reply")
            .steps
            .push_back(MockStep::Reply(reply));
    }

    pub fn queue_fault(&self, fault: MockFault) {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while queueing fault")
            .steps
            .push_back(MockStep::Fault(fault));
    }

    pub fn outbound(&self) -> Vec<RestRequest> {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while reading outbound log")
            .outbound
            .clone()
    }

    pub fn last_request(&self) -> Option<RestRequest> {
        self.outbound().pop()
    }

    pub fn request_count(&self) -> usize {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while counting requests")
            .outbound
            .len()
    }

    pub fn last_status(&self) -> Option<u16> {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while reading last status")
            .last_status
    }

    pub fn last_error(&self) -> Option<String> {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while reading last error")
            .last_error
            .clone()
    }
}

impl RestTransport for MockTransport {
    fn execute(&self, request: RestRequest) -> RestFuture<RestResult<RestResponse>> {
        let transport = self.clone();
        Box::pin(async move {
            let start = Instant::now();
            let mut state = transport
                .state
                .lock()
                .expect("mock transport mutex poisoned while executing");
            state.outbound.push(request);

            // An empty queue answers 200 with an empty body, which is not JSON.
            let step = state
                .steps
                .pop_front()
                .unwrap_or_else(|| MockStep::Reply(MockReply::new(200, Bytes::new())));

            match step {
                MockStep::Fault(fault) => {
                    let error = fault.into_error();
                    state.last_error = Some(error.to_string());
                    Err(error)
                }
                MockStep::Reply(reply) => {
                    state.last_status = Some(reply.status);
                    Ok(RestResponse {
                        status: reply.status,
                        headers: reply.headers,
                        body: reply.body,
                        elapsed: start.elapsed(),
                    })
                }
            }
        })
    }
}
