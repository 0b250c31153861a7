use std::sync::{Arc, Mutex};

use crate::domain::{FetchedPayload, InvalidSource};
use crate::ports::{FetchRequest, HttpTransport};

/// In-memory transport recording every request it receives.
#[derive(Clone)]
pub struct FakeTransport {
    pub requests: Arc<Mutex<Vec<FetchRequest>>>,
    status: u16,
    body: Vec<u8>,
    content_type: Option<String>,
}

impl FakeTransport {
    pub fn ok(body: impl Into<Vec<u8>>, content_type: Option<&str>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            status: 200,
            body: body.into(),
            content_type: content_type.map(str::to_string),
        }
    }

    pub fn status(status: u16) -> Self {
        Self { status, ..Self::ok(Vec::new(), None) }
    }

    pub fn recorded_requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for FakeTransport {
    fn get(&self, request: &FetchRequest) -> Result<FetchedPayload, InvalidSource> {
        self.requests.lock().unwrap().push(request.clone());
        if !(200..300).contains(&self.status) {
            return Err(InvalidSource::HttpStatus {
                url: request.url.to_string(),
                status: self.status,
                reason: "Fake".to_string(),
            });
        }
        Ok(FetchedPayload::remote(self.body.clone(), self.content_type.clone()))
    }
}
