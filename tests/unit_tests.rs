use repofetch::error_handling::{CloneFailure, ListingError};
use repofetch::github::parse_listing;
use repofetch::models::{CloneSummary, RepoListing};

#[test]
fn test_local_name_is_suffix_after_slash() {
    assert_eq!(RepoListing::new("octocat/hello-world").local_name(), "hello-world");
    assert_eq!(RepoListing::new("no-owner").local_name(), "no-owner");
    assert_eq!(RepoListing::new("a/b/c").local_name(), "c");
}

#[test]
fn test_unsafe_local_names() {
    assert!(RepoListing::new("u/repo.rs").has_safe_local_name());
    assert!(RepoListing::new("u/.github").has_safe_local_name());
    assert!(!RepoListing::new("u/").has_safe_local_name());
    assert!(!RepoListing::new("u/..").has_safe_local_name());
    assert!(!RepoListing::new("u/.").has_safe_local_name());
    assert!(!RepoListing::new("").has_safe_local_name());
    assert!(!RepoListing::new("u/a\\b").has_safe_local_name());
}

#[test]
fn test_parse_listing_keeps_order_and_ignores_extra_fields() {
    let repos = parse_listing(
        "u",
        r#"[{"nameWithOwner":"u/b","isPrivate":true},{"nameWithOwner":"u/a"}]"#,
    )
    .unwrap();

    assert_eq!(repos, vec![RepoListing::new("u/b"), RepoListing::new("u/a")]);
}

#[test]
fn test_parse_listing_empty_array() {
    assert!(parse_listing("u", "[]").unwrap().is_empty());
}

#[test]
fn test_parse_listing_rejects_non_json() {
    let err = parse_listing("u", "gh: command not found").unwrap_err();
    assert!(matches!(err, ListingError::InvalidJson { ref owner, .. } if owner == "u"));
}

#[test]
fn test_parse_listing_rejects_records_without_name() {
    let err = parse_listing("u", r#"[{"name":"a"}]"#).unwrap_err();
    assert!(matches!(err, ListingError::InvalidJson { .. }));
}

#[test]
fn test_listing_error_classification() {
    assert!(matches!(
        ListingError::from_stderr("u", "error: not authenticated"),
        ListingError::AuthenticationFailed
    ));
    assert!(matches!(
        ListingError::from_stderr("u", "API rate limit exceeded for user"),
        ListingError::RateLimited
    ));
    assert!(matches!(
        ListingError::from_stderr("u", "dial tcp: i/o timeout"),
        ListingError::Network
    ));

    let other = ListingError::from_stderr("ghost", "  GraphQL: Could not resolve to a User  \n");
    assert_eq!(
        other.to_string(),
        "Failed to list repositories for 'ghost': GraphQL: Could not resolve to a User"
    );
    assert!(!other.hints().is_empty());
}

#[test]
fn test_clone_failure_classification() {
    assert!(matches!(
        CloneFailure::from_stderr("u/a", "git@github.com: Permission denied (publickey)."),
        CloneFailure::SshAuth { .. }
    ));
    assert!(matches!(
        CloneFailure::from_stderr("u/a", "GraphQL: Could not resolve to a Repository with the name 'u/a'."),
        CloneFailure::NotFound { .. }
    ));
    assert!(matches!(
        CloneFailure::from_stderr("u/a", "fatal: unable to access: Connection timed out"),
        CloneFailure::Network { .. }
    ));
    assert!(matches!(
        CloneFailure::from_stderr("u/a", "fatal: destination path 'a' already exists and is not an empty directory."),
        CloneFailure::DestinationExists { .. }
    ));

    let other = CloneFailure::from_stderr("u/a", "fatal: something odd\n");
    assert_eq!(other.to_string(), "Failed to clone u/a: fatal: something odd");
}

#[test]
fn test_summary_display() {
    let mut summary = CloneSummary::default();
    summary.record_cloned();
    summary.record_cloned();
    summary.record_skipped();
    summary.record_failed();

    assert_eq!(summary.total(), 4);
    assert!(summary.has_failures());
    assert_eq!(
        summary.to_string(),
        "Summary:\n  Cloned: 2\n  Skipped: 1\n  Failed: 1"
    );
}
