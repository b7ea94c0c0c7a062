use micro_router::{
    RequestError, RequestSnapshot, RouterOptions,
    request::{RequestFlags, split_uri},
};

#[test]
fn snapshot_when_built_from_uri_then_path_and_query_are_split() {
    let snapshot = RequestSnapshot::builder()
        .method("post")
        .uri("/search?q=rust+router&page=2&page=3")
        .host("Shop.Example.COM")
        .build(&RouterOptions::default());

    assert_eq!(snapshot.method(), "POST");
    assert!(snapshot.is_post());
    assert!(!snapshot.is_get());
    assert_eq!(snapshot.path(), "/search");
    assert_eq!(snapshot.host(), "shop.example.com");
    assert_eq!(snapshot.query_value("q"), Some("rust router"));
    assert_eq!(snapshot.query_value("page"), Some("3"));
    assert_eq!(snapshot.query_or("missing", "fallback"), "fallback");
    assert_eq!(snapshot.flags(), RequestFlags::empty());
}

#[test]
fn snapshot_when_server_query_string_given_then_it_replaces_uri_query() {
    let snapshot = RequestSnapshot::builder()
        .method("GET")
        .uri("/list?from=uri")
        .query_string("from=server&sort=asc")
        .build(&RouterOptions::default());

    assert_eq!(snapshot.path(), "/list");
    assert_eq!(snapshot.query_value("from"), Some("server"));
    assert_eq!(snapshot.query_value("sort"), Some("asc"));
}

#[test]
fn snapshot_when_requested_with_header_set_then_is_ajax() {
    let snapshot = RequestSnapshot::builder()
        .method("GET")
        .uri("/feed")
        .requested_with("XMLHttpRequest")
        .build(&RouterOptions::default());

    assert!(snapshot.is_ajax());
    assert!(!snapshot.is_cli());
}

#[test]
fn snapshot_when_ajax_param_present_then_is_ajax_unless_empty_or_zero() {
    let options = RouterOptions::default();

    assert!(RequestSnapshot::new("GET", "/feed?ajax=1", &options).is_ajax());
    assert!(!RequestSnapshot::new("GET", "/feed?ajax=", &options).is_ajax());
    assert!(!RequestSnapshot::new("GET", "/feed?ajax=0", &options).is_ajax());
    assert!(!RequestSnapshot::new("GET", "/feed", &options).is_ajax());
}

#[test]
fn snapshot_when_ajax_param_renamed_then_new_key_is_used() {
    let options = RouterOptions::builder()
        .ajax_param_name("xhr")
        .build()
        .expect("options should build");

    assert!(RequestSnapshot::new("GET", "/feed?xhr=yes", &options).is_ajax());
    assert!(!RequestSnapshot::new("GET", "/feed?ajax=1", &options).is_ajax());
}

#[test]
fn from_cli_args_when_short_flag_given_then_uri_is_captured() {
    let snapshot =
        RequestSnapshot::from_cli_args(["-r", "/tasks/run?dry=1"], &RouterOptions::default())
            .expect("args should parse");

    assert!(snapshot.is_cli());
    assert_eq!(snapshot.method(), "");
    assert_eq!(snapshot.path(), "/tasks/run");
    assert_eq!(snapshot.query_value("dry"), Some("1"));
}

#[test]
fn from_cli_args_when_attached_short_flag_then_uri_is_captured() {
    let snapshot = RequestSnapshot::from_cli_args(["-r/tasks/run"], &RouterOptions::default())
        .expect("args should parse");

    assert_eq!(snapshot.path(), "/tasks/run");
}

#[test]
fn from_cli_args_when_long_flag_given_then_uri_is_captured() {
    let options = RouterOptions::default();

    let joined = RequestSnapshot::from_cli_args(["--REQUEST_URI=/a"], &options)
        .expect("args should parse");
    assert_eq!(joined.path(), "/a");

    let split = RequestSnapshot::from_cli_args(["--verbose", "--REQUEST_URI", "/b"], &options)
        .expect("args should parse");
    assert_eq!(split.path(), "/b");
}

#[test]
fn from_cli_args_when_both_flags_given_then_short_flag_wins() {
    let snapshot = RequestSnapshot::from_cli_args(
        ["--REQUEST_URI=/long", "-r", "/short"],
        &RouterOptions::default(),
    )
    .expect("args should parse");

    assert_eq!(snapshot.path(), "/short");
}

#[test]
fn from_cli_args_when_short_flag_empty_then_long_flag_is_used() {
    let snapshot = RequestSnapshot::from_cli_args(
        ["-r", "", "--REQUEST_URI=/long"],
        &RouterOptions::default(),
    )
    .expect("args should parse");

    assert_eq!(snapshot.path(), "/long");
}

#[test]
fn from_cli_args_when_source_renamed_then_custom_flag_is_read() {
    let options = RouterOptions::builder()
        .request_uri_source("uri")
        .build()
        .expect("options should build");

    let snapshot = RequestSnapshot::from_cli_args(["--uri=/custom", "--REQUEST_URI=/ignored"], &options)
        .expect("args should parse");
    assert_eq!(snapshot.path(), "/custom");
}

#[test]
fn from_cli_args_when_flag_lacks_value_then_returns_error() {
    match RequestSnapshot::from_cli_args(["-r"], &RouterOptions::default())
        .expect_err("expected missing value")
    {
        RequestError::MissingArgumentValue { flag } => assert_eq!(flag, "-r"),
    }
}

#[test]
fn from_cli_args_when_terminator_seen_then_later_flags_are_ignored() {
    let snapshot = RequestSnapshot::from_cli_args(["--", "-r", "/late"], &RouterOptions::default())
        .expect("args should parse");

    assert_eq!(snapshot.path(), "");
}

#[test]
fn split_uri_when_no_query_then_returns_whole_path() {
    assert_eq!(split_uri("/plain"), ("/plain", None));
    assert_eq!(split_uri("/q?a=1?b"), ("/q", Some("a=1?b")));
}
