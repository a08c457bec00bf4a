use kodegen_tools_richtext::utils::MAX_HTML_SIZE;
use kodegen_tools_richtext::{
    PasteInput, RenderOptions, RichText, RichTextConfig, RichTextError, SanitizeMode,
    detect_office_html, normalize_pasted_html, render_safe_html,
};

mod common;
use common::{comment, timed};

/// Pathological inputs must stay well clear of this.
///
/// The `regex` crate runs in linear time and html5ever's tree builder is
/// iterative, so nothing here should backtrack; the bound is loose to absorb
/// debug builds.
const BUDGET_MS: u128 = 2_000;

#[test]
fn test_redos_resistance_style_attribute() {
    let adversarial = format!("<p style=\"{}\">x</p>", "color:".repeat(10_000));
    let (_, elapsed) = timed(|| comment(&adversarial));

    println!("Style attribute test: {elapsed:?}");
    assert!(
        elapsed.as_millis() < BUDGET_MS,
        "ReDoS vulnerability detected: took {elapsed:?}"
    );
}

#[test]
fn test_redos_resistance_unterminated_conditional_comment() {
    let adversarial = "<p class=MsoNormal><!--[if gte mso 9]>".to_string() + &"a".repeat(100_000);
    let (out, elapsed) = timed(|| {
        normalize_pasted_html(&PasteInput::from_html(adversarial.as_str(), SanitizeMode::Comment))
    });

    println!("Conditional comment test: {elapsed:?}");
    assert!(detect_office_html(&adversarial));
    assert!(!out.contains("[if"));
    assert!(
        elapsed.as_millis() < BUDGET_MS,
        "ReDoS vulnerability detected: took {elapsed:?}"
    );
}

#[test]
fn test_redos_resistance_url_scanner() {
    let adversarial = "https://a.test/".to_string() + &").".repeat(20_000);
    let (out, elapsed) = timed(|| render_safe_html(&adversarial, &RenderOptions::default()));

    println!("URL scanner test: {elapsed:?}");
    assert!(out.contains(r#"href="https://a.test/""#));
    assert!(
        elapsed.as_millis() < BUDGET_MS,
        "ReDoS vulnerability detected: took {elapsed:?}"
    );
}

#[test]
fn test_redos_resistance_rejected_url_runs() {
    let adversarial = "http://[".repeat(20_000);
    let options = RenderOptions {
        mentionify: true,
        ..RenderOptions::default()
    };
    let (out, elapsed) = timed(|| render_safe_html(&adversarial, &options));

    println!("Rejected URL run test: {elapsed:?}");
    assert!(!out.contains("<a "));
    assert!(
        elapsed.as_millis() < BUDGET_MS,
        "ReDoS vulnerability detected: took {elapsed:?}"
    );
}

#[test]
fn test_redos_resistance_mentions() {
    let adversarial = "@".repeat(20_000) + &"a".repeat(20_000);
    let options = RenderOptions {
        mentionify: true,
        ..RenderOptions::default()
    };
    let (_, elapsed) = timed(|| render_safe_html(&adversarial, &options));

    println!("Mention scanner test: {elapsed:?}");
    assert!(
        elapsed.as_millis() < BUDGET_MS,
        "ReDoS vulnerability detected: took {elapsed:?}"
    );
}

#[test]
fn test_deep_nesting_is_flattened() {
    let depth = 5_000;
    let adversarial = "<div>".repeat(depth) + "deep" + &"</div>".repeat(depth);
    let (out, elapsed) = timed(|| comment(&adversarial));

    println!("Deep nesting test: {elapsed:?}");
    assert_eq!(out, "<p>deep</p>");
    assert!(
        elapsed.as_millis() < BUDGET_MS,
        "Deep nesting took {elapsed:?}"
    );
}

#[test]
fn test_deep_nesting_drops_dangerous_text() {
    let adversarial = "<span style=\"color:#000\">".repeat(400)
        + "<script>alert(1)</script>safe"
        + &"</span>".repeat(400);
    let out = comment(&adversarial);
    assert!(out.contains("safe"));
    assert!(!out.contains("alert"));
}

#[test]
fn test_input_size_limit() {
    // MAX_HTML_SIZE (10 MB) is the default cap
    let engine = RichText::new(RichTextConfig::default()).expect("default config is valid");
    let too_large = "a".repeat(MAX_HTML_SIZE + 1);
    let result = engine.sanitize(&too_large);

    assert!(
        matches!(result, Err(RichTextError::InputTooLarge { .. })),
        "Should reject HTML larger than 10 MB"
    );
    assert!(
        result
            .expect_err("over the cap")
            .to_string()
            .contains("too large"),
        "Error message should mention size limit"
    );
}

#[test]
fn test_paste_size_limit_checks_both_flavors() {
    let engine = RichText::new(
        RichTextConfig::builder()
            .max_input_bytes(16)
            .build()
            .expect("valid config"),
    )
    .expect("valid engine");

    let input = PasteInput {
        html: Some("<p>ok</p>".into()),
        text: Some("x".repeat(17)),
        mode: SanitizeMode::Comment,
    };
    assert!(engine.normalize_paste(&input).is_err());
}
