//! Tests for workflows composed from several actions

use chrono::{DateTime, Utc};

use octoconnect::core::models::Status;
use octoconnect::core::ports::{DecodeError, DispatchError, Dispatcher};
use octoconnect::core::services::{RecordingDispatcher, StubDispatcher};
use octoconnect::github::{self, Commit, GetRepoLatestCommit, GetUser, GetUserOrgs, GitHubApi, UserDetails};

use crate::common::{LATEST_COMMIT_JSON, OCTOCAT_JSON, OCTOCAT_ORGS_JSON, ScriptedTransport};

fn commit_by(login: &str) -> Commit {
    Commit {
        sha: "7fd1a60".to_string(),
        message: "Merge pull request #6".to_string(),
        author_name: "The Octocat".to_string(),
        author_login: Some(login.to_string()),
        authored_at: DateTime::<Utc>::from_timestamp(1_331_075_210, 0).unwrap(),
    }
}

#[test]
fn test_latest_commit_author_equals_the_stubbed_user() {
    let author = UserDetails::new("monalisa");
    let stub = StubDispatcher::builder()
        .on(GetRepoLatestCommit::new("octocat", "Hello-World"), commit_by("monalisa"))
        .on(GetUser::new("monalisa"), author.clone())
        .build();

    assert_eq!(stub.latest_commit_author("octocat", "Hello-World"), Ok(author));
}

#[test]
fn test_workflow_dispatches_in_order() {
    let stub = StubDispatcher::builder()
        .on(GetRepoLatestCommit::new("o", "r"), commit_by("monalisa"))
        .on_any::<GetUser>(UserDetails::new("monalisa"))
        .build();
    let recorder = RecordingDispatcher::new(&stub);

    recorder.latest_commit_author("o", "r").unwrap();

    assert_eq!(recorder.recorded_of::<GetRepoLatestCommit>(), vec![GetRepoLatestCommit::new("o", "r")]);
    assert_eq!(recorder.recorded_of::<GetUser>(), vec![GetUser::new("monalisa")]);
    assert!(recorder.recorded()[0].is::<GetRepoLatestCommit>());
}

#[test]
fn test_workflow_stops_at_the_first_failure() {
    let stub = StubDispatcher::builder()
        .on_any::<GetUser>(UserDetails::new("never"))
        .build();
    let recorder = RecordingDispatcher::new(&stub);

    let err = recorder.latest_commit_author("o", "r").unwrap_err();

    assert!(matches!(err, DispatchError::Unhandled(_)));
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_unlinked_commit_author_is_not_looked_up_by_git_name() {
    let unlinked = r#"[{
        "sha": "0123abc",
        "commit": { "message": "Fix", "author": { "name": "torvalds", "date": "2024-01-01T00:00:00Z" } },
        "author": null
    }]"#;
    let transport = ScriptedTransport::new().ok(unlinked).ok(OCTOCAT_JSON);
    let recorder = RecordingDispatcher::new(github::github_dispatcher(&transport, None));

    let err = recorder.latest_commit_author("someone", "repo").unwrap_err();

    match &err {
        DispatchError::Decode(DecodeError::Body { status, message }) => {
            assert_eq!(*status, Status::OK);
            assert!(message.contains("is not linked to a GitHub account"), "{message}");
        },
        other => panic!("expected a body error, got {other:?}"),
    }
    assert_eq!(transport.calls(), 1);
    assert!(recorder.recorded_of::<GetUser>().is_empty());
}

#[test]
fn test_unlinked_stubbed_commit_stops_the_workflow() {
    let mut commit = commit_by("monalisa");
    commit.author_login = None;
    let stub = StubDispatcher::builder()
        .on(GetRepoLatestCommit::new("o", "r"), commit)
        .on_any::<GetUser>(UserDetails::new("The Octocat"))
        .build();

    let err = stub.latest_commit_author("o", "r").unwrap_err();

    assert!(matches!(err, DispatchError::Decode(DecodeError::Body { .. })));
}

#[test]
fn test_user_with_orgs_over_http() {
    let transport = ScriptedTransport::new().ok(OCTOCAT_JSON).ok(OCTOCAT_ORGS_JSON);
    let github = github::github_dispatcher(&transport, None);

    let user = github.user_with_orgs("octocat").unwrap();

    assert_eq!(user.name, "octocat");
    assert_eq!(user.orgs, ["github", "octo-org"]);
    let paths: Vec<String> = transport.requests().iter().map(|r| r.path().to_string()).collect();
    assert_eq!(
        paths,
        ["https://api.github.com/users/octocat", "https://api.github.com/users/octocat/orgs"]
    );
}

#[test]
fn test_latest_commit_author_over_http_matches_direct_calls() {
    let composed = ScriptedTransport::new().ok(LATEST_COMMIT_JSON).ok(OCTOCAT_JSON);
    let direct = ScriptedTransport::new().ok(LATEST_COMMIT_JSON).ok(OCTOCAT_JSON);

    let via_workflow = github::github_dispatcher(&composed, None)
        .latest_commit_author("octocat", "Hello-World")
        .unwrap();

    let dispatcher = github::github_dispatcher(&direct, None);
    let commit = dispatcher.invoke(&GetRepoLatestCommit::new("octocat", "Hello-World")).unwrap();
    let by_hand = dispatcher.invoke(&GetUser::new(commit.author_login.unwrap())).unwrap();

    assert_eq!(via_workflow, by_hand);
    assert_eq!(composed.requests(), direct.requests());
}

#[test]
fn test_orgs_stub_is_separate_from_user_stub() {
    let stub = StubDispatcher::builder()
        .on(GetUser::new("octocat"), UserDetails::new("octocat"))
        .on(GetUserOrgs::new("octocat"), vec!["github".to_string()])
        .build();

    let user = stub.user_with_orgs("octocat").unwrap();

    assert_eq!(user.orgs, ["github"]);
    assert!(stub.user("octocat").unwrap().orgs.is_empty());
}
