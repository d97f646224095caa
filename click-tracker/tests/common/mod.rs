#![allow(dead_code)]

use click_tracker::{ApiRequest, ClickApi, HttpResponse, TransportError};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

pub type Outcome = Result<HttpResponse, TransportError>;

pub fn json(status: u16, body: &str) -> Outcome {
    Ok(HttpResponse::new(status, body))
}

pub fn unreachable(message: &str) -> Outcome {
    Err(TransportError::new(message))
}

/// Answers requests from a fixed script, in order, and records every request
/// it was asked to make.
#[derive(Default)]
pub struct ScriptedApi {
    script: RefCell<VecDeque<Outcome>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl ScriptedApi {
    pub fn new(script: impl IntoIterator<Item = Outcome>) -> Self {
        ScriptedApi {
            script: RefCell::new(script.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl ClickApi for ScriptedApi {
    async fn execute(&self, request: &ApiRequest) -> Outcome {
        self.calls.borrow_mut().push(*request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted request: {}", request))
    }
}

/// Holds every request open until the test answers it, so tests can choose
/// the order in which overlapping requests settle.
#[derive(Default)]
pub struct GatedApi {
    pending: RefCell<Vec<(ApiRequest, oneshot::Sender<Outcome>)>>,
}

impl GatedApi {
    pub fn pending(&self) -> Vec<ApiRequest> {
        self.pending.borrow().iter().map(|(req, _)| *req).collect()
    }

    /// Answer the `index`th still-open request.
    pub fn answer(&self, index: usize, outcome: Outcome) {
        let (_, sender) = self.pending.borrow_mut().remove(index);
        sender.send(outcome).expect("request was dropped");
    }
}

impl ClickApi for GatedApi {
    async fn execute(&self, request: &ApiRequest) -> Outcome {
        let (sender, receiver) = oneshot::channel();
        self.pending.borrow_mut().push((*request, sender));
        receiver
            .await
            .unwrap_or_else(|_| Err(TransportError::new("request abandoned")))
    }
}
