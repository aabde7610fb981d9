//! Property-based tests for the GitHub actions
//!
//! Rendering must be deterministic and decoding must be total: every status
//! and body maps to a value or an error, never a panic.

use octoconnect::core::models::{Response, Status};
use octoconnect::core::ports::{Action, DecodeError, Failure, ResultAction};
use octoconnect::github::{GetRepoLatestCommit, GetUser, GetUserOrgs};
use proptest::prelude::*;

fn any_response() -> impl Strategy<Value = Response> {
    (100u16..600, ".*").prop_map(|(code, body)| Response::new(Status::new(code)).body(body))
}

proptest! {
    /// Equal actions render equal requests
    #[test]
    fn get_user_request_is_deterministic(username in "[A-Za-z0-9-]{1,39}") {
        let first = GetUser::new(username.clone());
        let second = GetUser::new(username);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_request(), second.to_request());
        prop_assert_eq!(first.to_request(), first.to_request());
    }

    /// Repository coordinates end up in the path, and only one commit is asked for
    #[test]
    fn latest_commit_request_shape(owner in "[a-z0-9-]{1,20}", repo in "[a-z0-9._-]{1,20}") {
        let request = GetRepoLatestCommit::new(owner.clone(), repo.clone()).to_request();
        prop_assert_eq!(request.path(), format!("/repos/{owner}/{repo}/commits"));
        prop_assert_eq!(request.query_params(), &[("per_page".to_string(), "1".to_string())][..]);
    }

    /// A user lookup and an organization listing never render the same request
    #[test]
    fn user_and_orgs_requests_never_collide(u in ".{0,30}", v in ".{0,30}") {
        prop_assert_ne!(GetUser::new(u).to_request(), GetUserOrgs::new(v).to_request());
    }

    /// Reserved characters in a login stay inside one path segment
    #[test]
    fn username_is_a_single_path_segment(username in "[A-Za-z0-9/?#%&= .-]{1,30}") {
        let request = GetUser::new(username.clone()).to_request();
        let segment = request.path().strip_prefix("/users/").unwrap_or_default().to_string();

        prop_assert!(!segment.contains(['/', '?', '#']), "segment {segment:?} leaks a delimiter");
        prop_assert_eq!(urlencoding::decode(&segment).unwrap().into_owned(), username);
        prop_assert!(request.query_params().is_empty());
    }

    /// Owner and repository each occupy exactly one segment
    #[test]
    fn repo_coordinates_cannot_reshape_the_path(owner in "[a-z/?#]{1,10}", repo in "[a-z/?#]{1,10}") {
        let request = GetRepoLatestCommit::new(owner, repo).to_request();
        let segments: Vec<&str> = request.path().split('/').collect();
        prop_assert_eq!(segments.len(), 5);
        prop_assert_eq!(segments[4], "commits");
        prop_assert!(!request.path().contains(['?', '#']));
    }

    /// Non-2xx responses are always reported as unsuccessful, whatever the body
    #[test]
    fn unsuccessful_status_is_never_decoded(code in 300u16..600, body in ".*") {
        let response = Response::new(Status::new(code)).body(body);
        let result = GetUser::new("octocat").from_response(&response);
        let is_unsuccessful = matches!(result, Err(DecodeError::Unsuccessful { .. }));
        prop_assert!(is_unsuccessful);
    }

    /// Decoding never panics, in either flavor
    #[test]
    fn decoding_is_total(response in any_response()) {
        let _ = GetUser::new("a").from_response(&response);
        let _ = GetUserOrgs::new("a").from_response(&response);
        let _ = GetRepoLatestCommit::new("o", "r").from_response(&response);

        match GetUser::new("a").checked().from_response(&response) {
            Ok(_) => {
                prop_assert!(response.is_successful());
            },
            Err(Failure::Unsuccessful { status, message }) => {
                prop_assert!(!status.is_successful());
                prop_assert!(message.starts_with("API returned: "));
            },
            Err(Failure::Undecodable { status, .. }) => {
                prop_assert!(status.is_successful());
            },
            Err(Failure::Transport(_)) => {
                prop_assert!(false, "decoding cannot produce a transport failure");
            },
        }
    }
}
