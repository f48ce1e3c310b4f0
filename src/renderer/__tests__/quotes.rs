use crate::renderer::{RenderStyle, quote_ident, quote_path, style_mssql, style_mysql, style_postgres};

#[test]
fn no_delimiter_leaves_names_as_is() {
    let st = RenderStyle::default();
    assert_eq!(quote_ident("users", &st), "users");
    assert_eq!(quote_ident("User Name", &st), "User Name");
}

#[test]
fn required_delimiter_quotes_and_escapes() {
    let pg = style_postgres();
    assert_eq!(quote_ident("users", &pg), r#""users""#);
    assert_eq!(quote_ident(r#"a"b"#, &pg), r#""a""b""#);

    // MySQL: бэктики, ` → ``
    let my = style_mysql();
    assert_eq!(quote_ident("users", &my), "`users`");
    assert_eq!(quote_ident("a`b", &my), "`a``b`");
}

#[test]
fn asymmetric_delimiters_double_the_closing_one() {
    let ms = style_mssql();
    assert_eq!(quote_ident("users", &ms), "[users]");
    assert_eq!(quote_ident("a]b", &ms), "[a]]b]");
    // открывающая скобка внутри имени не трогается
    assert_eq!(quote_ident("a[b", &ms), "[a[b]");
}

#[test]
fn asterisk_is_never_quoted() {
    assert_eq!(quote_ident("*", &style_postgres()), "*");
}

#[test]
fn path_quotes_each_part() {
    assert_eq!(
        quote_path(["public", "users"], &style_postgres()),
        r#""public"."users""#
    );
    assert_eq!(
        quote_path(["public", "users"], &RenderStyle::default()),
        "public.users"
    );
}
