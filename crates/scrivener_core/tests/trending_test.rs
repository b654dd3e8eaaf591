use scrivener_core::TrendingPost;

fn post(author: Option<&str>, body: &str) -> TrendingPost {
    TrendingPost::builder()
        .id("t1")
        .author(author.map(str::to_string))
        .title("What are you writing this week?")
        .body(body)
        .build()
        .expect("Valid post")
}

#[test]
fn test_authorship_is_case_insensitive() {
    let p = post(Some("ScrivenerBot"), "");
    assert!(p.is_authored_by("scrivenerbot"));
    assert!(p.is_authored_by("ScrivenerBot"));
    assert!(!p.is_authored_by("someone_else"));
}

#[test]
fn test_deleted_author_never_matches() {
    let p = post(None, "");
    assert!(!p.is_authored_by("ScrivenerBot"));
    assert!(!p.is_authored_by(""));
}

#[test]
fn test_context_limits_excerpt() {
    let body = "a".repeat(500);
    let p = post(Some("writer"), &body);

    let context = p.context(200);
    let (title, excerpt) = context.split_once('\n').expect("newline");
    assert_eq!(title, "What are you writing this week?");
    assert_eq!(excerpt.len(), 200);
}

#[test]
fn test_context_with_short_or_empty_body() {
    assert_eq!(post(None, "").context(200), "What are you writing this week?\n");
    assert_eq!(
        post(None, "Short.").context(200),
        "What are you writing this week?\nShort."
    );
}
