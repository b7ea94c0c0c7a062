use micro_router::pattern::{
    PatternCompiler, PatternError, TypeCatalog, compile, compile_with, to_pattern_source,
};

#[test]
fn compile_when_integer_placeholder_named_then_produces_anchored_named_group() {
    let pattern = compile("/user/[i:id]").expect("template should compile");

    assert_eq!(pattern.as_str(), "^/user/(?P<id>[0-9]+)$");
    assert_eq!(pattern.template(), "/user/[i:id]");
    assert_eq!(pattern.param_names().len(), 1);
    assert_eq!(pattern.param_names()[0].as_ref(), "id");
}

#[test]
fn compile_when_path_matches_then_reports_named_capture() {
    let pattern = compile("/user/[i:id]").expect("template should compile");

    let captures = pattern.captures("/user/42").expect("path should match");
    assert_eq!(captures, vec![("id", "42")]);
    assert!(pattern.captures("/user/abc").is_none());
    assert!(!pattern.is_match("/user/42/extra"));
    assert!(!pattern.is_match("/prefix/user/42"));
}

#[test]
fn compile_when_rest_placeholder_then_captures_remaining_path_unnamed() {
    let pattern = compile("/files/[**]").expect("template should compile");

    assert_eq!(pattern.as_str(), "^/files/(.+)$");
    let all = pattern.all_captures("/files/a/b/c").expect("path should match");
    assert_eq!(all, vec![Some("a/b/c")]);
    assert_eq!(pattern.captures("/files/a/b/c"), Some(Vec::new()));
}

#[test]
fn compile_when_default_placeholder_then_stops_at_slash() {
    let pattern = compile("/page/[:slug]").expect("template should compile");

    assert_eq!(pattern.as_str(), "^/page/(?P<slug>[^/]+?)$");
    assert!(pattern.is_match("/page/hello-world"));
    assert!(!pattern.is_match("/page/a/b"));
}

#[test]
fn compile_when_each_builtin_type_used_then_classes_apply() {
    let cases = [
        ("/[a:v]", "/Ab09", "/a-b"),
        ("/[c:v]", "/item_2", "/2item"),
        ("/[h:v]", "/deadBEEF", "/xyz"),
        ("/[s:v]", "/my-post_1", "/my.post"),
        ("/[*:v]/end", "/a/b/end", "/end"),
    ];

    for (template, accepted, rejected) in cases {
        let pattern = compile(template).expect("template should compile");
        assert!(pattern.is_match(accepted), "{template} should accept {accepted}");
        assert!(!pattern.is_match(rejected), "{template} should reject {rejected}");
    }
}

#[test]
fn compile_when_literal_has_regex_metacharacters_then_they_match_literally() {
    let pattern = compile("/feed.xml").expect("template should compile");

    assert!(pattern.is_match("/feed.xml"));
    assert!(!pattern.is_match("/feedxxml"));

    let plus = compile("/a+b/(x)").expect("template should compile");
    assert!(plus.is_match("/a+b/(x)"));
    assert!(!plus.is_match("/aab/x"));
}

#[test]
fn compile_when_unknown_type_then_used_as_inline_class() {
    let pattern = compile(r"/archive/[\d{4}:year]").expect("template should compile");

    assert_eq!(pattern.captures("/archive/2024"), Some(vec![("year", "2024")]));
    assert!(!pattern.is_match("/archive/24"));
}

#[test]
fn compile_when_called_twice_then_output_is_identical() {
    let first = compile("/a/[i:id]/[s:slug]/[**]").expect("template should compile");
    let second = compile("/a/[i:id]/[s:slug]/[**]").expect("template should compile");

    assert_eq!(first.as_str(), second.as_str());
    assert_eq!(first.param_names(), second.param_names());
    assert_eq!(first, second);
}

#[test]
fn compile_when_templates_normalize_alike_then_patterns_are_equal() {
    let by_code = compile("/n/[i:id]").expect("template should compile");
    let by_class = compile("/n/[[0-9]+:id]");

    // a placeholder ends at the first ']', so an inline bracket class is rejected
    assert!(by_class.is_err());

    let inline = compile(r"/n/[\d+:id]").expect("template should compile");
    assert_ne!(by_code, inline);

    let catalog = TypeCatalog::with_extra([("num", "[0-9]+")]);
    let aliased = compile_with("/n/[num:id]", &catalog).expect("template should compile");
    assert_eq!(by_code, aliased);
}

#[test]
fn compile_when_placeholder_unterminated_then_returns_error() {
    match compile("/user/[i:id").expect_err("expected unterminated error") {
        PatternError::UnterminatedPlaceholder { start, .. } => assert_eq!(start, 6),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_parameter_name_empty_then_returns_error() {
    match compile("/user/[i:]").expect_err("expected empty name error") {
        PatternError::ParameterNameEmpty { placeholder, .. } => assert_eq!(placeholder, "[i:]"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_parameter_name_starts_with_digit_then_returns_error() {
    match compile("/[i:1id]").expect_err("expected invalid start error") {
        PatternError::ParameterInvalidStart { name, found, .. } => {
            assert_eq!(name, "1id");
            assert_eq!(found, '1');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_parameter_contains_invalid_character_then_returns_error() {
    match compile("/[i:id-raw]").expect_err("expected invalid character error") {
        PatternError::ParameterInvalidCharacter { invalid, .. } => assert_eq!(invalid, '-'),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_parameter_name_repeated_then_returns_error() {
    match compile("/[i:id]/[a:id]").expect_err("expected duplicate name error") {
        PatternError::DuplicateParameterName { name, .. } => assert_eq!(name, "id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_inline_class_is_not_a_valid_regex_then_returns_error() {
    match compile("/[(:x]").expect_err("expected invalid pattern error") {
        PatternError::InvalidPattern { template, .. } => assert_eq!(template, "/[(:x]"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn to_pattern_source_when_unnamed_placeholders_then_no_names_reported() {
    let (source, names) =
        to_pattern_source("/[]/[*]", &TypeCatalog::default()).expect("template should expand");

    assert_eq!(source, "^/([^/]+?)/(.+?)$");
    assert!(names.is_empty());
}

#[test]
fn pattern_compiler_when_shared_then_reuses_compiled_patterns() {
    let compiler = PatternCompiler::default();
    let first = compiler.compile("/x/[i:id]").expect("template should compile");
    let second = compiler.compile("/x/[i:id]").expect("template should compile");

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(compiler.cached_len(), 1);
}
