// Fixed pool of OS threads running task execute phases
// WHY: detection is CPU-bound and blocking; dedicated threads keep it off the async runtime,
// and each task travels back to its caller over a oneshot so completion happens on the caller

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::engine::LanguageIdentifier;
use crate::error::{DetectError, Result};
use crate::task::DetectionTask;

/// A scheduled task plus the continuation that returns it to the caller
struct Assignment {
    task: DetectionTask,
    reply: oneshot::Sender<DetectionTask>,
}

type SharedReceiver = Arc<Mutex<mpsc::Receiver<Assignment>>>;

struct Worker {
    name: String,
    handle: Option<JoinHandle<()>>,
}

fn next_assignment(receiver: &SharedReceiver) -> Option<Assignment> {
    // Guard is released at the end of this statement, after recv returns
    let received = match receiver.lock() {
        Ok(guard) => guard.recv(),
        Err(poisoned) => poisoned.into_inner().recv(),
    };
    received.ok()
}

fn run_worker(name: &str, receiver: SharedReceiver, engine: Arc<dyn LanguageIdentifier>) {
    debug!(worker = name, "Detection worker started");
    let mut executed = 0u64;

    while let Some(Assignment { mut task, reply }) = next_assignment(&receiver) {
        task.execute_guarded(engine.as_ref());
        executed += 1;

        let id = task.id();
        if reply.send(task).is_err() {
            // Caller stopped waiting; the result is dropped unseen
            debug!(worker = name, task = id, "Caller went away before completion");
        }
    }

    debug!(worker = name, executed, "Detection worker stopped");
}

/// Worker threads sharing one job channel
pub struct WorkerPool {
    sender: Option<mpsc::Sender<Assignment>>,
    workers: Vec<Worker>,
}

impl WorkerPool {
    /// Start `size` workers named `{prefix}-{n}` around a shared engine
    pub fn new(size: usize, prefix: &str, engine: Arc<dyn LanguageIdentifier>) -> Result<Self> {
        if size == 0 {
            return Err(DetectError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }

        let (sender, receiver) = mpsc::channel();
        let receiver: SharedReceiver = Arc::new(Mutex::new(receiver));
        let mut workers = Vec::with_capacity(size);

        for n in 0..size {
            let name = format!("{prefix}-{n}");
            let receiver = Arc::clone(&receiver);
            let engine = Arc::clone(&engine);
            let thread_name = name.clone();
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || run_worker(&thread_name, receiver, engine))
                .map_err(|e| DetectError::Spawn(e.to_string()))?;
            workers.push(Worker {
                name,
                handle: Some(handle),
            });
        }

        info!("Started detection worker pool with {} workers", size);
        Ok(Self {
            sender: Some(sender),
            workers,
        })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queue a task; the receiver resolves with the executed task
    pub fn submit(&self, mut task: DetectionTask) -> Result<oneshot::Receiver<DetectionTask>> {
        let sender = self.sender.as_ref().ok_or(DetectError::PoolClosed)?;
        let (reply, receiver) = oneshot::channel();
        task.mark_scheduled();
        sender
            .send(Assignment { task, reply })
            .map_err(|_| DetectError::PoolClosed)?;
        Ok(receiver)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the channel lets workers drain queued tasks and exit
        drop(self.sender.take());
        for worker in &mut self.workers {
            if let Some(handle) = worker.handle.take() {
                if handle.join().is_err() {
                    warn!(worker = worker.name.as_str(), "Detection worker panicked during shutdown");
                }
            }
        }
        debug!("Detection worker pool shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProfileEngine;
    use crate::hints::Hints;
    use crate::task::{DetectionRequest, TaskState};

    fn pool(size: usize) -> WorkerPool {
        WorkerPool::new(size, "test-worker", Arc::new(ProfileEngine::new())).unwrap()
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = WorkerPool::new(0, "test-worker", Arc::new(ProfileEngine::new()));
        assert!(matches!(result, Err(DetectError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_submitted_task_comes_back_executed() {
        let pool = pool(2);
        assert_eq!(pool.size(), 2);

        let task = DetectionTask::new(9, DetectionRequest::new("the cat and the dog", true, Hints::default()));
        let task = pool.submit(task).unwrap().await.unwrap();

        assert_eq!(task.id(), 9);
        assert_eq!(task.state(), TaskState::Executing);
        let result = task.complete(|r| r);
        assert_eq!(result.success().unwrap().primary().unwrap().code, "en");
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_stall_workers() {
        let pool = pool(1);
        let abandoned = pool
            .submit(DetectionTask::new(1, DetectionRequest::new("abandoned", true, Hints::default())))
            .unwrap();
        drop(abandoned);

        let task = pool
            .submit(DetectionTask::new(2, DetectionRequest::new("und die", true, Hints::default())))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(task.id(), 2);
    }
}
