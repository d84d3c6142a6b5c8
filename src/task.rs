// One in-flight detection request and its execute/complete protocol
// WHY: execute runs on a pool worker and may only touch task-owned data; complete runs back on
// the awaiting caller task, so formatting and callbacks never race with the caller

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, trace};

use crate::engine::{LanguageIdentifier, RawDetectionOutcome};
use crate::error::DetectError;
use crate::format;
use crate::hints::Hints;
use crate::result::{DetectionResult, Failure, FailureKind};

/// Everything the engine needs for one call, owned by the request
#[derive(Debug, Clone)]
pub struct DetectionRequest {
    pub text: Vec<u8>,
    /// Number of leading bytes of `text` to classify
    pub len: usize,
    pub is_plain_text: bool,
    pub hints: Hints,
    /// Reserved engine flag, forwarded untouched
    pub flags: i32,
}

impl DetectionRequest {
    /// Copy `text` into a new request; the caller's buffer is free to change afterwards
    pub fn new(text: impl Into<Vec<u8>>, is_plain_text: bool, hints: Hints) -> Self {
        let text = text.into();
        Self {
            len: text.len(),
            text,
            is_plain_text,
            hints,
            flags: 0,
        }
    }

    pub fn with_flags(mut self, flags: i32) -> Self {
        self.flags = flags;
        self
    }
}

/// Lifecycle of a task; `Delivered` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Created,
    Scheduled,
    Executing,
    Completed,
    Delivered,
}

#[derive(Debug)]
enum Execution {
    Pending,
    Finished(RawDetectionOutcome),
    Faulted(String),
}

/// Unit of asynchronous detection work
#[derive(Debug)]
pub struct DetectionTask {
    id: u64,
    request: DetectionRequest,
    state: TaskState,
    execution: Execution,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

impl DetectionTask {
    pub fn new(id: u64, request: DetectionRequest) -> Self {
        trace!(task = id, bytes = request.len, "Task created");
        Self {
            id,
            request,
            state: TaskState::Created,
            execution: Execution::Pending,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    fn transition(&mut self, next: TaskState) {
        trace!(task = self.id, from = ?self.state, to = ?next, "Task state change");
        self.state = next;
    }

    pub(crate) fn mark_scheduled(&mut self) {
        self.transition(TaskState::Scheduled);
    }

    /// Run the engine and keep its raw outcome on the task.
    /// Blocks for the whole computation.
    pub fn execute(&mut self, engine: &dyn LanguageIdentifier) {
        self.transition(TaskState::Executing);
        let request = &self.request;
        let outcome = engine.identify(
            &request.text,
            request.len,
            request.is_plain_text,
            &request.hints,
            request.flags,
        );
        self.execution = Execution::Finished(outcome);
    }

    /// `execute`, with an engine panic recorded as a fault instead of unwinding
    /// through the worker thread
    pub fn execute_guarded(&mut self, engine: &dyn LanguageIdentifier) {
        let run = panic::catch_unwind(AssertUnwindSafe(|| self.execute(engine)));
        if let Err(payload) = run {
            let message = panic_message(payload.as_ref());
            error!(task = self.id, "Detection engine panicked: {}", message);
            self.execution = Execution::Faulted(message);
        }
    }

    /// Format the outcome and hand it to `on_complete` exactly once.
    /// Consumes the task: nothing is retained after delivery.
    pub fn complete<F, R>(mut self, on_complete: F) -> R
    where
        F: FnOnce(DetectionResult) -> R,
    {
        let result = match std::mem::replace(&mut self.execution, Execution::Pending) {
            Execution::Finished(outcome) => format::format(&outcome),
            Execution::Faulted(message) => DetectionResult::Failure(Failure::new(
                FailureKind::EngineFault,
                DetectError::EngineFault(message).to_string(),
            )),
            Execution::Pending => DetectionResult::Failure(Failure::new(
                FailureKind::Unavailable,
                DetectError::WorkerLost.to_string(),
            )),
        };
        self.transition(TaskState::Completed);

        let delivered = on_complete(result);
        self.transition(TaskState::Delivered);
        delivered
    }
}
