use pjax_router::{compile, Matcher, Method, Route, Timing};

fn route(pattern: &str) -> Route<()> {
    Route::new(pattern, Method::Get, Timing::After, ()).unwrap()
}

#[test]
fn construction_exposes_the_registration() {
    let route = Route::new("some-url", Method::Get, Timing::After, ()).unwrap();

    assert_eq!(route.pattern(), "some-url");
    assert_eq!(route.method(), Method::Get);
    assert_eq!(route.timing(), Timing::After);
    assert_eq!(route.matcher().as_str(), "^/?some-url/?$");
}

#[test]
fn id_token_matches_digits_only() {
    let route = route("users/:id");

    assert!(route.matches("/users/76", Method::Get, Timing::After));
    assert!(!route.matches("/users/sdfsdf", Method::Get, Timing::After));
}

#[test]
fn alpha_token_matches_letters_and_hyphen_only() {
    let route = route("users/:alpha");

    assert!(!route.matches("/users/32", Method::Get, Timing::After));
    assert!(route.matches("/users/asfasdf", Method::Get, Timing::After));
    assert!(route.matches("/users/asfasdf-khjasdf", Method::Get, Timing::After));
}

#[test]
fn alphanum_token_matches_letters_digits_and_hyphen() {
    let route = route("users/:alphanum");

    assert!(route.matches("/users/15", Method::Get, Timing::After));
    assert!(route.matches("/users/kjsdf", Method::Get, Timing::After));
    assert!(route.matches("/users/as56-sfdj1", Method::Get, Timing::After));
}

#[test]
fn letter_classes_accept_both_cases() {
    assert!(route("users/:alpha").matches("users/ASDF", Method::Get, Timing::After));
    assert!(route("users/:alphanum").matches("users/A5-b", Method::Get, Timing::After));
}

#[test]
fn literal_text_stays_case_sensitive() {
    assert!(!route("users/:id").matches("Users/15", Method::Get, Timing::After));
}

#[test]
fn any_token_matches_anything() {
    let route = route("files/:any");

    assert!(route.matches("files/a/b/c.txt", Method::Get, Timing::After));
    assert!(route.matches("files/", Method::Get, Timing::After));
}

#[test]
fn segment_token_matches_one_whole_segment() {
    let route = route("users/:/edit");

    assert!(route.matches("users/abc/edit", Method::Get, Timing::After));
    assert!(route.matches("/users/a.b/edit", Method::Get, Timing::After));
    assert!(!route.matches("users/a/b/edit", Method::Get, Timing::After));
}

#[test]
fn generic_multi_token_pattern() {
    let route = route(":alpha/:id");

    assert!(route.matches("/users/15", Method::Get, Timing::After));
}

#[test]
fn nested_multi_token_pattern() {
    let route = route(":alpha/:id/users/:id/:alphanum");

    assert!(route.matches("/lkjsdf/23/users/765/lksdf-ksdf874", Method::Get, Timing::After));
    assert!(!route.matches("/lkjsdf/23/users/sdfsdf/lksdf-ksdf874", Method::Get, Timing::After));
}

#[test]
fn matching_is_anchored_with_optional_surrounding_separators() {
    let route = route("users/:id");

    assert!(route.matches("users/15", Method::Get, Timing::After));
    assert!(route.matches("/users/15", Method::Get, Timing::After));
    assert!(route.matches("users/15/", Method::Get, Timing::After));

    assert!(!route.matches("users/15/edit", Method::Get, Timing::After));
    assert!(!route.matches("xusers/15", Method::Get, Timing::After));
    assert!(!route.matches("admin/users/15", Method::Get, Timing::After));
}

#[test]
fn method_and_timing_must_both_agree() {
    let route = route("users/:id");

    assert!(!route.matches("users/15", Method::Post, Timing::After));
    assert!(!route.matches("users/15", Method::Get, Timing::Before));
    assert!(route.matches("users/15", Method::Get, Timing::After));
}

#[test]
fn unrecognized_tokens_pass_through_literally() {
    let route = route("users/x:y");

    assert!(route.matches("users/x:y", Method::Get, Timing::After));
    assert!(!route.matches("users/x:z", Method::Get, Timing::After));
}

#[test]
fn bad_pattern_is_rejected_at_construction() {
    let err = Route::new("users/(", Method::Get, Timing::After, ()).unwrap_err();
    assert_eq!(err.pattern(), "users/(");
}

#[test]
fn compile_produces_a_standalone_matcher() {
    let matcher = compile("posts/:alphanum").unwrap();

    assert!(matcher.is_match("posts/a1-b2"));
    assert!(!matcher.is_match("posts/a_b"));
}

#[test]
fn methods_parse_case_insensitively_and_render_lowercase() {
    assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
    assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
    assert_eq!("Put".parse::<Method>().unwrap(), Method::Put);
    assert!("patch".parse::<Method>().is_err());

    assert_eq!(Method::Post.as_str(), "post");
    assert_eq!(Method::Delete.to_string(), "delete");
}

#[test]
fn timing_parses_and_defaults_to_after() {
    assert_eq!("before".parse::<Timing>().unwrap(), Timing::Before);
    assert_eq!("AFTER".parse::<Timing>().unwrap(), Timing::After);
    assert!("during".parse::<Timing>().is_err());

    assert_eq!(Timing::default(), Timing::After);
}
