//! Test doubles for the workflow seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::task::Poll;

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, TaskApi};
use crate::models::{Notice, Task};
use crate::notify::Notifier;

/// A backend call as the mock saw it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(String),
    Create(Task),
    Update(Task),
    Delete(String),
}

#[derive(Default)]
struct Inner {
    collection: RefCell<Vec<Task>>,
    calls: RefCell<Vec<Call>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    yield_on_writes: Cell<bool>,
}

/// In-memory backend keyed by title
#[derive(Clone, Default)]
pub struct MockTaskApi {
    inner: Rc<Inner>,
}

impl MockTaskApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        api.set_tasks(tasks);
        api
    }

    /// Swap the backend collection, as another client would
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        *self.inner.collection.borrow_mut() = tasks;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    /// Suspend each write once after recording it, so concurrent callers interleave
    pub fn yield_on_writes(&self, enabled: bool) {
        self.inner.yield_on_writes.set(enabled);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|call| **call == Call::List).count()
    }

    fn record(&self, call: Call) {
        self.inner.calls.borrow_mut().push(call);
    }

    async fn maybe_yield(&self) {
        if !self.inner.yield_on_writes.get() {
            return;
        }
        let mut yielded = false;
        futures::future::poll_fn(|cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await;
    }

    fn rejected(method: &str, status: u16) -> ApiError {
        ApiError::Status {
            method: method.to_string(),
            url: "mock://tasks".to_string(),
            status,
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for MockTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.record(Call::List);
        if self.inner.fail_reads.get() {
            return Err(Self::rejected("GET", 500));
        }
        Ok(self.inner.collection.borrow().clone())
    }

    async fn get_task(&self, title: &str) -> ApiResult<Task> {
        self.record(Call::Get(title.to_string()));
        if self.inner.fail_reads.get() {
            return Err(Self::rejected("GET", 500));
        }
        self.inner
            .collection
            .borrow()
            .iter()
            .find(|task| task.title == title)
            .cloned()
            .ok_or_else(|| Self::rejected("GET", 404))
    }

    async fn create_task(&self, task: &Task) -> ApiResult<u16> {
        self.record(Call::Create(task.clone()));
        self.maybe_yield().await;
        if self.inner.fail_writes.get() {
            return Err(Self::rejected("POST", 400));
        }
        self.inner.collection.borrow_mut().push(task.clone());
        Ok(200)
    }

    async fn update_task(&self, task: &Task) -> ApiResult<u16> {
        self.record(Call::Update(task.clone()));
        self.maybe_yield().await;
        if self.inner.fail_writes.get() {
            return Err(Self::rejected("PUT", 500));
        }
        let mut collection = self.inner.collection.borrow_mut();
        match collection.iter_mut().find(|existing| existing.title == task.title) {
            Some(existing) => {
                existing.description = task.description.clone();
                Ok(200)
            }
            None => Err(Self::rejected("PUT", 404)),
        }
    }

    async fn delete_task(&self, title: &str) -> ApiResult<u16> {
        self.record(Call::Delete(title.to_string()));
        self.maybe_yield().await;
        if self.inner.fail_writes.get() {
            return Err(Self::rejected("DELETE", 500));
        }
        let mut collection = self.inner.collection.borrow_mut();
        let before = collection.len();
        collection.retain(|task| task.title != title);
        if collection.len() == before {
            return Err(Self::rejected("DELETE", 404));
        }
        Ok(200)
    }
}

/// Notifier that remembers what it was asked to show
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
