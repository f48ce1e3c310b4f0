use crate::renderer::{Error, Keyword, KeywordCase, RenderStyle};

#[test]
fn render_applies_case() {
    let kw = Keyword::new("inner join");
    assert_eq!(kw.render(KeywordCase::AsIs), "inner join");
    assert_eq!(kw.render(KeywordCase::Lower), "inner join");
    assert_eq!(kw.render(KeywordCase::Upper), "INNER JOIN");
}

#[test]
fn keyword_case_parses_from_strings() {
    assert_eq!("upper".parse::<KeywordCase>(), Ok(KeywordCase::Upper));
    assert_eq!("Lower".parse::<KeywordCase>(), Ok(KeywordCase::Lower));
    assert_eq!("as-is".parse::<KeywordCase>(), Ok(KeywordCase::AsIs));
    assert!(matches!(
        "title".parse::<KeywordCase>(),
        Err(Error::UnknownRenderStyle(_))
    ));
}

#[test]
fn keyword_case_from_integer_codes() {
    assert_eq!(KeywordCase::try_from(0), Ok(KeywordCase::AsIs));
    assert_eq!(KeywordCase::try_from(2), Ok(KeywordCase::Upper));
    assert!(matches!(
        KeywordCase::try_from(7),
        Err(Error::UnknownRenderStyle(_))
    ));
}

#[test]
fn render_style_deserializes_with_defaults() {
    let st: RenderStyle =
        serde_json::from_str(r#"{ "case_style": "lower", "placeholders": "numbered" }"#).unwrap();
    assert_eq!(st.case_style, KeywordCase::Lower);
    assert_eq!(st.placeholders, crate::renderer::PlaceholderStyle::Numbered);
    assert!(!st.delimiter_required);
    assert_eq!(st.delimiter, "\"");
}

#[test]
fn render_style_rejects_unknown_case() {
    let res = serde_json::from_str::<RenderStyle>(r#"{ "case_style": "shouting" }"#);
    assert!(res.is_err());
}
