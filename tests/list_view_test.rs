//! Integration tests for the user-list state machine.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{user, wait_for_state};
use roster::adapters::mock::MockUserRepository;
use roster::fetch::PageFetcher;
use roster::view_state::{UserListAction, UserListUiState, UserListViewState};

fn list_view(repository: &MockUserRepository) -> UserListViewState {
    UserListViewState::new(PageFetcher::new(Arc::new(repository.clone())))
}

fn success_users(state: &UserListUiState) -> Vec<u64> {
    match state {
        UserListUiState::Success { users, .. } => users.iter().map(|u| u.id).collect(),
        other => panic!("expected success state, got {:?}", other),
    }
}

#[tokio::test]
async fn initial_state_is_loading() {
    let repository = MockUserRepository::new();
    let view = list_view(&repository);
    assert_eq!(view.state(), UserListUiState::Loading);
}

#[tokio::test]
async fn first_subscription_loads_the_first_page() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test"), user(2, "B", "Test")]);

    let view = list_view(&repository);
    let mut rx = view.subscribe();

    let state = wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;
    match state {
        UserListUiState::Success { users, loading_page } => {
            assert!(!loading_page);
            assert_eq!(users.len(), 2);
            assert_eq!(users[0].name, "A Test");
            assert_eq!(users[1].id, 2);
        }
        other => panic!("expected success state, got {:?}", other),
    }
    assert_eq!(repository.page_calls(), vec![1]);
}

#[tokio::test]
async fn load_more_shows_trailing_indicator_then_appends() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test"), user(2, "B", "Test")]);
    repository.set_page(2, vec![user(3, "C", "Test")]);

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;

    repository.hold_requests();
    view.on_action(UserListAction::LoadMore);

    // The indicator is published synchronously, before the fetch lands.
    match view.state() {
        UserListUiState::Success { users, loading_page } => {
            assert!(loading_page);
            assert_eq!(users.len(), 2);
        }
        other => panic!("expected success state, got {:?}", other),
    }

    repository.wait_until_blocked(1).await;
    repository.release(1);

    let state = wait_for_state(&mut rx, |s| {
        matches!(s, UserListUiState::Success { loading_page: false, users } if users.len() == 3)
    })
    .await;
    assert_eq!(success_users(&state), vec![1, 2, 3]);
}

#[tokio::test]
async fn exhausted_list_ignores_further_load_more() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test"), user(2, "B", "Test")]);
    repository.set_page(2, vec![]);

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;

    view.on_action(UserListAction::LoadMore);
    wait_for_state(&mut rx, |s| {
        matches!(s, UserListUiState::Success { loading_page: false, .. })
    })
    .await;

    // Past the empty-page sentinel no repository calls are made.
    for _ in 0..3 {
        view.on_action(UserListAction::LoadMore);
    }
    wait_for_state(&mut rx, |s| {
        matches!(s, UserListUiState::Success { loading_page: false, users } if users.len() == 2)
    })
    .await;
    assert_eq!(repository.page_calls(), vec![1, 2]);
}

#[tokio::test]
async fn pagination_failure_keeps_loaded_users() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test"), user(2, "B", "Test")]);
    repository.fail_page(2, "boom");

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;

    repository.hold_requests();
    view.on_action(UserListAction::LoadMore);
    repository.wait_until_blocked(1).await;
    assert!(matches!(
        view.state(),
        UserListUiState::Success { loading_page: true, .. }
    ));
    repository.release(1);

    // The indicator resets and the items survive; the state never
    // regresses to Error once a page has rendered.
    let state = wait_for_state(&mut rx, |s| {
        matches!(s, UserListUiState::Success { loading_page: false, .. })
    })
    .await;
    assert_eq!(success_users(&state), vec![1, 2]);
}

#[tokio::test]
async fn first_load_failure_then_manual_retry() {
    let repository = MockUserRepository::new();
    repository.fail_page(1, "boom");

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Error)).await;

    // The server recovers; retry resumes from the same page.
    repository.set_page(1, vec![user(9, "I", "Test")]);
    repository.hold_requests();
    view.on_action(UserListAction::Retry);
    assert_eq!(view.state(), UserListUiState::Loading);

    repository.wait_until_blocked(1).await;
    repository.release(1);

    let state = wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;
    assert_eq!(success_users(&state), vec![9]);
    assert_eq!(repository.page_calls(), vec![1, 1]);
}

#[tokio::test]
async fn retry_is_ignored_outside_the_error_state() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test")]);

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;

    view.on_action(UserListAction::Retry);
    assert!(matches!(view.state(), UserListUiState::Success { .. }));
    assert_eq!(repository.page_calls(), vec![1]);
}

#[tokio::test]
async fn rapid_double_load_more_fetches_the_page_once() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test"), user(2, "B", "Test")]);
    repository.set_page(2, vec![user(3, "C", "Test")]);

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;

    repository.hold_requests();
    view.on_action(UserListAction::LoadMore);
    repository.wait_until_blocked(1).await;
    view.on_action(UserListAction::LoadMore);

    // The second trigger resolves through the loading guard without a
    // repository call, republishing the items already loaded.
    wait_for_state(&mut rx, |s| {
        matches!(s, UserListUiState::Success { loading_page: false, users } if users.len() == 2)
    })
    .await;

    repository.release(1);
    wait_for_state(&mut rx, |s| {
        matches!(s, UserListUiState::Success { loading_page: false, users } if users.len() == 3)
    })
    .await;
    assert_eq!(repository.page_calls(), vec![1, 2]);
}

#[tokio::test]
async fn late_subscriber_replays_the_latest_state() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test")]);

    let view = list_view(&repository);
    let mut rx = view.subscribe();
    wait_for_state(&mut rx, |s| matches!(s, UserListUiState::Success { .. })).await;

    let rx2 = view.subscribe();
    assert!(matches!(&*rx2.borrow(), UserListUiState::Success { .. }));
    // The second subscription does not refetch.
    assert_eq!(repository.page_calls(), vec![1]);
}

#[tokio::test]
async fn close_cancels_the_in_flight_fetch() {
    let repository = MockUserRepository::new();
    repository.set_page(1, vec![user(1, "A", "Test")]);
    repository.hold_requests();

    let view = list_view(&repository);
    let _rx = view.subscribe();
    repository.wait_until_blocked(1).await;

    view.close();
    repository.release(1);
    tokio::time::sleep(Duration::from_millis(50)).await;

    // No transition is published after teardown.
    assert_eq!(view.state(), UserListUiState::Loading);
}
