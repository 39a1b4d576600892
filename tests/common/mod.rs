//! Common test utilities for integration tests.

use std::time::Duration;
use tokio::sync::watch;

use roster::domain::User;

/// Build a user fixture.
pub fn user(id: u64, first: &str, last: &str) -> User {
    User {
        id,
        email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
    }
}

/// Wait until the receiver's value satisfies `pred`, returning it.
///
/// The watch channel conflates intermediate values, so predicates should
/// describe the state being waited for, not a full transition history.
pub async fn wait_for_state<S, F>(rx: &mut watch::Receiver<S>, pred: F) -> S
where
    S: Clone,
    F: Fn(&S) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if pred(&rx.borrow()) {
                return rx.borrow().clone();
            }
            rx.changed().await.expect("state channel closed");
        }
    })
    .await
    .expect("timed out waiting for state")
}
