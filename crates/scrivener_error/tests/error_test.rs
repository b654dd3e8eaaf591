use scrivener_error::{
    ConfigError, ModelsError, ModelsErrorKind, ScrivenerError, ScrivenerErrorKind, SocialError,
    SocialErrorKind,
};

#[test]
fn test_rate_limit_detection() {
    let err = SocialError::new(SocialErrorKind::RateLimit("try again in 9 minutes".into()));
    assert!(err.is_rate_limit());

    let err = SocialError::new(SocialErrorKind::Api {
        status: 500,
        message: "internal".into(),
    });
    assert!(!err.is_rate_limit());

    let err = SocialError::new(SocialErrorKind::Rejected("SUBREDIT_NOEXIST".into()));
    assert!(!err.is_rate_limit());
}

#[test]
fn test_location_tracking() {
    let err = ModelsError::new(ModelsErrorKind::RateLimit);
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_display_includes_kind() {
    let err = ModelsError::new(ModelsErrorKind::Api {
        status: 503,
        message: "over capacity".into(),
    });
    let rendered = err.to_string();
    assert!(rendered.contains("API error 503"));
    assert!(rendered.contains("over capacity"));
}

#[test]
fn test_conversion_to_top_level() {
    let err: ScrivenerError = SocialError::new(SocialErrorKind::Http("reset".into())).into();
    assert!(matches!(err.kind(), ScrivenerErrorKind::Social(_)));

    let err: ScrivenerError = ConfigError::new("missing").into();
    assert!(matches!(err.kind(), ScrivenerErrorKind::Config(_)));
    assert!(err.to_string().starts_with("Scrivener Error"));
}
