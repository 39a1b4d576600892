//! Mock user repository for testing.
//!
//! Pages and detail records are scripted per page number / user id, and
//! every call is recorded for verification. The gate lets a test hold
//! requests in flight to exercise re-entrancy guards deterministically.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

use crate::domain::User;
use crate::error::FetchError;
use crate::traits::{HttpError, UserRepository};

#[derive(Debug, Clone)]
enum Scripted<T> {
    Value(T),
    Fail(String),
}

/// Mock repository with scripted responses and call recording.
///
/// # Example
///
/// ```ignore
/// use roster::adapters::mock::MockUserRepository;
///
/// let repository = MockUserRepository::new();
/// repository.set_page(1, vec![user(1, "Janet", "Weaver")]);
/// repository.set_page(2, vec![]);
///
/// let page = repository.users_page(1).await?;
/// assert_eq!(repository.page_calls(), vec![1]);
/// ```
#[derive(Clone, Default)]
pub struct MockUserRepository {
    inner: Arc<Inner>,
}

struct Inner {
    pages: Mutex<HashMap<u32, Scripted<Vec<User>>>>,
    details: Mutex<HashMap<u64, Scripted<User>>>,
    page_calls: Mutex<Vec<u32>>,
    detail_calls: Mutex<Vec<u64>>,
    gated: AtomicBool,
    gate: Semaphore,
    blocked: AtomicUsize,
    blocked_changed: Notify,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
            details: Mutex::new(HashMap::new()),
            page_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
            gated: AtomicBool::new(false),
            gate: Semaphore::new(0),
            blocked: AtomicUsize::new(0),
            blocked_changed: Notify::new(),
        }
    }
}

impl MockUserRepository {
    /// Create a new mock repository. Unscripted pages and ids fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the users returned for `page`.
    pub fn set_page(&self, page: u32, users: Vec<User>) {
        self.inner
            .pages
            .lock()
            .unwrap()
            .insert(page, Scripted::Value(users));
    }

    /// Script a failure for `page`.
    pub fn fail_page(&self, page: u32, message: &str) {
        self.inner
            .pages
            .lock()
            .unwrap()
            .insert(page, Scripted::Fail(message.to_string()));
    }

    /// Script the user returned for `id`.
    pub fn set_detail(&self, id: u64, user: User) {
        self.inner
            .details
            .lock()
            .unwrap()
            .insert(id, Scripted::Value(user));
    }

    /// Script a failure for `id`.
    pub fn fail_detail(&self, id: u64, message: &str) {
        self.inner
            .details
            .lock()
            .unwrap()
            .insert(id, Scripted::Fail(message.to_string()));
    }

    /// Page numbers requested so far, in call order.
    pub fn page_calls(&self) -> Vec<u32> {
        self.inner.page_calls.lock().unwrap().clone()
    }

    /// User ids requested so far, in call order.
    pub fn detail_calls(&self) -> Vec<u64> {
        self.inner.detail_calls.lock().unwrap().clone()
    }

    /// Hold subsequent calls in flight until [`release`](Self::release).
    pub fn hold_requests(&self) {
        self.inner.gated.store(true, Ordering::SeqCst);
    }

    /// Let `n` held calls proceed.
    pub fn release(&self, n: usize) {
        self.inner.gate.add_permits(n);
    }

    /// Number of calls currently held in flight.
    pub fn blocked(&self) -> usize {
        self.inner.blocked.load(Ordering::SeqCst)
    }

    /// Wait until at least `n` calls are held in flight.
    pub async fn wait_until_blocked(&self, n: usize) {
        loop {
            let notified = self.inner.blocked_changed.notified();
            if self.inner.blocked.load(Ordering::SeqCst) >= n {
                return;
            }
            notified.await;
        }
    }

    async fn pause_point(&self) {
        if !self.inner.gated.load(Ordering::SeqCst) {
            return;
        }

        struct BlockGuard<'a>(&'a Inner);
        impl Drop for BlockGuard<'_> {
            fn drop(&mut self) {
                self.0.blocked.fetch_sub(1, Ordering::SeqCst);
                self.0.blocked_changed.notify_waiters();
            }
        }

        self.inner.blocked.fetch_add(1, Ordering::SeqCst);
        self.inner.blocked_changed.notify_waiters();
        let _guard = BlockGuard(&self.inner);

        let permit = self
            .inner
            .gate
            .acquire()
            .await
            .expect("mock gate semaphore closed");
        permit.forget();
    }

    fn failure(message: &str) -> FetchError {
        FetchError::Http(HttpError::Other(message.to_string()))
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn users_page(&self, page: u32) -> Result<Vec<User>, FetchError> {
        self.inner.page_calls.lock().unwrap().push(page);
        self.pause_point().await;

        let scripted = self.inner.pages.lock().unwrap().get(&page).cloned();
        match scripted {
            Some(Scripted::Value(users)) => Ok(users),
            Some(Scripted::Fail(message)) => Err(Self::failure(&message)),
            None => Err(Self::failure(&format!("no scripted page {}", page))),
        }
    }

    async fn user_details(&self, id: u64) -> Result<User, FetchError> {
        self.inner.detail_calls.lock().unwrap().push(id);
        self.pause_point().await;

        let scripted = self.inner.details.lock().unwrap().get(&id).cloned();
        match scripted {
            Some(Scripted::Value(user)) => Ok(user),
            Some(Scripted::Fail(message)) => Err(Self::failure(&message)),
            None => Err(Self::failure(&format!("no scripted user {}", id))),
        }
    }
}
