//! Tests for the base dispatcher against a scripted transport

use octoconnect::core::models::{Method, Status};
use octoconnect::core::ports::{DecodeError, DispatchError, Dispatcher, TransportError};
use octoconnect::core::services::{BaseConfig, HttpDispatcher};
use octoconnect::github::{self, GetRepoLatestCommit, GetUser, UserDetails};

use crate::common::{LATEST_COMMIT_JSON, OCTOCAT_JSON, ScriptedTransport};

#[test]
fn test_get_user_decodes_octocat() {
    let transport = ScriptedTransport::new().ok(OCTOCAT_JSON);
    let github = github::github_dispatcher(&transport, None);

    let user = github.invoke(&GetUser::new("octocat")).unwrap();

    assert_eq!(user.name, "octocat");
    assert_eq!(user.display_name.as_deref(), Some("The Octocat"));
    assert_eq!(transport.calls(), 1);

    let sent = &transport.requests()[0];
    assert_eq!(sent.method(), Method::Get);
    assert_eq!(sent.path(), "https://api.github.com/users/octocat");
    assert_eq!(sent.header_value("Accept"), Some(github::GITHUB_ACCEPT));
}

#[test]
fn test_latest_commit_sends_query_and_decodes_first_entry() {
    let transport = ScriptedTransport::new().ok(LATEST_COMMIT_JSON);
    let github = github::github_dispatcher(&transport, Some("t"));

    let commit = github.invoke(&GetRepoLatestCommit::new("octocat", "Hello-World")).unwrap();

    assert_eq!(commit.author_login.as_deref(), Some("octocat"));
    assert_eq!(commit.author_name, "The Octocat");
    assert!(commit.message.starts_with("Merge pull request #6"));
    let sent = &transport.requests()[0];
    assert_eq!(sent.uri(), "https://api.github.com/repos/octocat/Hello-World/commits?per_page=1");
    assert_eq!(sent.header_value("authorization"), Some("Bearer t"));
}

#[test]
fn test_not_found_is_a_decode_error_with_status() {
    let transport = ScriptedTransport::new().status(Status::NOT_FOUND);
    let github = github::github_dispatcher(&transport, None);

    let err = github.invoke(&GetUser::new("ghost")).unwrap_err();

    match &err {
        DispatchError::Decode(decode) => assert_eq!(decode.status(), Status::NOT_FOUND),
        other => panic!("expected a decode error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "API returned: 404 Not Found");
}

#[test]
fn test_malformed_body_is_a_body_error() {
    let transport = ScriptedTransport::new().ok("<html>rate limited</html>");
    let github = github::github_dispatcher(&transport, None);

    let err = github.invoke(&GetUser::new("octocat")).unwrap_err();

    assert!(matches!(err, DispatchError::Decode(DecodeError::Body { status: Status::OK, .. })));
}

#[test]
fn test_transport_failure_is_not_retried() {
    let transport = ScriptedTransport::new()
        .reply(Err(TransportError::Timeout))
        .ok(OCTOCAT_JSON);
    let github = github::github_dispatcher(&transport, None);

    let err = github.invoke(&GetUser::new("octocat")).unwrap_err();

    assert_eq!(err, DispatchError::Transport(TransportError::Timeout));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_each_invoke_sends_exactly_one_request() {
    let transport = ScriptedTransport::new().ok(OCTOCAT_JSON).ok(OCTOCAT_JSON);
    let github = github::github_dispatcher(&transport, None);

    let first = github.invoke(&GetUser::new("octocat")).unwrap();
    let second = github.invoke(&GetUser::new("octocat")).unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.calls(), 2);
}

#[test]
fn test_custom_base_url() {
    let transport = ScriptedTransport::new().ok(r#"{"login":"me"}"#);
    let ghe = HttpDispatcher::new(&transport, BaseConfig::new("https://ghe.example.com/api/v3/"));

    assert_eq!(ghe.invoke(&GetUser::new("me")), Ok(UserDetails::new("me")));
    assert_eq!(transport.requests()[0].path(), "https://ghe.example.com/api/v3/users/me");
    assert!(transport.requests()[0].headers().is_empty());
}
