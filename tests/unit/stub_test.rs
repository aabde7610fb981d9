//! Tests for the stubbing dispatcher

use chrono::DateTime;

use octoconnect::core::ports::{DispatchError, Dispatcher};
use octoconnect::core::services::{RecordingDispatcher, StubDispatcher};
use octoconnect::github::{Commit, GetRepoLatestCommit, GetUser, GetUserOrgs, GitHubApi, UserDetails};

#[test]
fn test_exact_stub_answers_the_registered_action() {
    let octocat = UserDetails::new("octocat");
    let stub = StubDispatcher::builder()
        .on(GetUser::new("octocat"), octocat.clone())
        .build();

    assert_eq!(stub.invoke(&GetUser::new("octocat")), Ok(octocat));
}

#[test]
fn test_miss_names_the_action() {
    let stub = StubDispatcher::builder()
        .on(GetUser::new("octocat"), UserDetails::new("octocat"))
        .build();

    let err = stub.invoke(&GetUser::new("hubot")).unwrap_err();

    let DispatchError::Unhandled(unhandled) = &err else {
        panic!("expected an unhandled action, got {err:?}");
    };
    assert!(unhandled.action().contains("hubot"));
    assert!(err.to_string().starts_with("unhandled action"));
}

#[test]
fn test_same_fields_different_type_is_a_miss() {
    let stub = StubDispatcher::builder()
        .on(GetUser::new("octocat"), UserDetails::new("octocat"))
        .build();

    assert!(matches!(
        stub.invoke(&GetUserOrgs::new("octocat")),
        Err(DispatchError::Unhandled(_))
    ));
}

#[test]
fn test_wildcard_answers_any_value_of_its_type() {
    let user = UserDetails::new("whoever");
    let stub = StubDispatcher::builder().on_any::<GetUser>(user.clone()).build();

    assert_eq!(stub.user("anything"), Ok(user.clone()));
    assert_eq!(stub.user("something-else"), Ok(user));
    assert!(stub.latest_repo_commit("o", "r").is_err());
}

#[test]
fn test_stub_never_builds_requests() {
    // a recorder in front shows the stub saw the action, and nothing else ran
    let stub = StubDispatcher::builder()
        .on(GetRepoLatestCommit::new("o", "r"), commit("octocat"))
        .build();
    let recorder = RecordingDispatcher::new(&stub);

    let found = recorder.latest_repo_commit("o", "r").unwrap();

    assert_eq!(found, commit("octocat"));
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_empty_table() {
    let stub = StubDispatcher::builder().build();
    assert!(stub.is_empty());
    assert!(stub.user("x").is_err());
}

fn commit(login: &str) -> Commit {
    Commit {
        sha: "abc1234".to_string(),
        message: "Initial commit".to_string(),
        author_name: login.to_string(),
        author_login: Some(login.to_string()),
        authored_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}
