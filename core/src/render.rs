use indexmap::IndexMap;
use itertools::Itertools;

use crate::{Theme, Token};

/// Namespace root every token path starts with. It is dropped from the path
/// and re-added as the custom property prefix.
pub const NAMESPACE: &str = "nyulh";

/// `["nyulh", "color", "brand", "primary"]` becomes `--nyulh-color-brand-primary`.
///
/// Dots inside segments are replaced as well, so names never contain `.`.
pub fn css_variable_name(path: &[String]) -> String {
    let name = path.iter().skip(1).join("-").replace('.', "-");
    format!("--{NAMESPACE}-{name}")
}

/// Renders a complete stylesheet for `theme`.
///
/// Tokens are grouped by category (third path segment, `other` when missing),
/// categories are emitted in sorted order and tokens keep their source order
/// within a category.
pub fn render(tokens: &[Token], theme: Theme) -> String {
    let scope = theme.scope();

    let mut output = format!("/* NYU Langone Health Design Tokens - {theme} theme */\n");
    output += "/* Generated automatically by nyulh-design-tokens */\n\n";
    match scope.media_query {
        Some(query) => output += &format!("@media {query} {{\n  {} {{\n", scope.selector),
        None => output += &format!("{} {{\n", scope.selector),
    }

    let mut categories: IndexMap<&str, Vec<&Token>> = IndexMap::new();
    for token in tokens {
        categories.entry(token.category()).or_default().push(token);
    }
    for (category, tokens) in categories.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        output += &format!("  /* {} TOKENS */\n", category.to_uppercase());
        for token in tokens {
            output += &declaration(token);
        }
        output += "\n";
    }

    if scope.is_media_scoped() {
        output += "}\n}\n";
    } else {
        output += "}\n";
    }
    output
}

/// Same as [`render`], for a theme given by name. Unknown names render as `light`.
pub fn render_for(tokens: &[Token], theme: &str) -> String {
    render(tokens, Theme::from_identifier(theme))
}

fn declaration(token: &Token) -> String {
    let description = match token.description.as_deref() {
        Some(description) if !description.is_empty() => format!(" /* {description} */"),
        _ => String::new(),
    };
    format!("  {}: {};{}\n", token.css_name(), token.value, description)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn primary() -> Token {
        Token::new(["nyulh", "color", "brand", "primary"], "#57068C")
            .with_description("Primary brand color")
    }

    #[test]
    fn variable_names() {
        let path = |p: &[&str]| p.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(
            css_variable_name(&path(&["nyulh", "color", "brand", "primary"])),
            "--nyulh-color-brand-primary"
        );
        assert_eq!(
            css_variable_name(&path(&["nyulh", "spacing", "1.5"])),
            "--nyulh-spacing-1-5"
        );
        assert_eq!(
            css_variable_name(&path(&["nyulh", "font.size", "h1"])),
            "--nyulh-font-size-h1"
        );
        assert_eq!(css_variable_name(&path(&["nyulh"])), "--nyulh-");

        for p in [&["a.b", "c.d"][..], &["x", "y.z", "w"][..], &["only"][..]] {
            let name = css_variable_name(&path(p));
            assert!(name.starts_with("--nyulh-"));
            assert!(!name.contains('.'));
        }
    }

    #[test]
    fn light_scenario() {
        assert_eq!(
            render(&[primary()], Theme::Light),
            "/* NYU Langone Health Design Tokens - light theme */\n\
             /* Generated automatically by nyulh-design-tokens */\n\
             \n\
             :root {\n\
             \x20 /* BRAND TOKENS */\n\
             \x20 --nyulh-color-brand-primary: #57068C; /* Primary brand color */\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn desktop_scenario() {
        let css = render(&[primary()], Theme::Desktop);
        assert_eq!(
            css,
            "/* NYU Langone Health Design Tokens - desktop theme */\n\
             /* Generated automatically by nyulh-design-tokens */\n\
             \n\
             @media (min-width: 1200px) {\n\
             \x20 :root {\n\
             \x20 /* BRAND TOKENS */\n\
             \x20 --nyulh-color-brand-primary: #57068C; /* Primary brand color */\n\
             \n\
             }\n\
             }\n"
        );
    }

    #[test]
    fn dark_uses_data_attribute_selector() {
        let css = render(&[primary()], Theme::Dark);
        assert!(css.contains("\n[data-theme=\"dark\"] {\n"));
        assert!(css.ends_with("\n}\n"));
        assert!(!css.contains("@media"));
    }

    #[test]
    fn empty_token_list() {
        for theme in Theme::ALL {
            let css = render(&[], theme);
            let header = format!(
                "/* NYU Langone Health Design Tokens - {theme} theme */\n\
                 /* Generated automatically by nyulh-design-tokens */\n\n"
            );
            let body = css.strip_prefix(&header).unwrap();
            let scope = theme.scope();
            let expected = match scope.media_query {
                Some(query) => format!("@media {query} {{\n  {} {{\n}}\n}}\n", scope.selector),
                None => format!("{} {{\n}}\n", scope.selector),
            };
            assert_eq!(body, expected);
        }
    }

    #[test]
    fn categories_sorted_and_stable() {
        let tokens = vec![
            Token::new(["nyulh", "size", "spacing", "sm"], "8px"),
            Token::new(["nyulh", "theme", "color", "text"], "#222"),
            Token::new(["nyulh", "size", "spacing", "xs"], "4px"),
            Token::new(["nyulh", "theme", "color", "bg"], "#fff"),
            Token::new(["nyulh", "zIndex"], "10"),
        ];
        let css = render(&tokens, Theme::Light);
        let lines: Vec<&str> = css.lines().skip(4).collect();
        assert_eq!(
            lines,
            vec![
                "  /* COLOR TOKENS */",
                "  --nyulh-theme-color-text: #222;",
                "  --nyulh-theme-color-bg: #fff;",
                "",
                "  /* OTHER TOKENS */",
                "  --nyulh-zIndex: 10;",
                "",
                "  /* SPACING TOKENS */",
                "  --nyulh-size-spacing-sm: 8px;",
                "  --nyulh-size-spacing-xs: 4px;",
                "",
                "}",
            ]
        );
    }

    #[test]
    fn reordering_within_category_is_preserved() {
        let forward = vec![
            Token::new(["nyulh", "size", "spacing", "xs"], "4px"),
            Token::new(["nyulh", "theme", "color", "bg"], "#fff"),
            Token::new(["nyulh", "size", "spacing", "sm"], "8px"),
        ];
        let swapped = vec![
            forward[2].clone(),
            forward[1].clone(),
            forward[0].clone(),
        ];
        let position = |css: &str, needle: &str| css.find(needle).unwrap();

        let css = render(&forward, Theme::Light);
        assert!(position(&css, "spacing-xs") < position(&css, "spacing-sm"));
        let css = render(&swapped, Theme::Light);
        assert!(position(&css, "spacing-sm") < position(&css, "spacing-xs"));
        assert!(position(&css, "/* COLOR TOKENS */") < position(&css, "/* SPACING TOKENS */"));
    }

    #[test]
    fn category_order_is_ordinal() {
        let tokens = vec![
            Token::new(["nyulh", "x", "color", "a"], "1"),
            Token::new(["nyulh", "x", "Border", "a"], "2"),
            Token::new(["nyulh", "x", "border", "a"], "3"),
        ];
        let css = render(&tokens, Theme::Light);
        let headers: Vec<&str> = css.lines().filter(|l| l.ends_with("TOKENS */")).collect();
        assert_eq!(
            headers,
            vec![
                "  /* BORDER TOKENS */",
                "  /* BORDER TOKENS */",
                "  /* COLOR TOKENS */",
            ]
        );
        let upper = css.find("--nyulh-x-Border-a").unwrap();
        let lower = css.find("--nyulh-x-border-a").unwrap();
        let color = css.find("--nyulh-x-color-a").unwrap();
        assert!(upper < lower && lower < color);
    }

    #[test]
    fn empty_description_is_omitted() {
        let token = Token::new(["nyulh", "color", "x"], "red").with_description("");
        assert!(render(&[token], Theme::Light).contains("  --nyulh-color-x: red;\n"));
    }

    #[test]
    fn deterministic() {
        let tokens = vec![
            primary(),
            Token::new(["nyulh", "spacing", "md"], "16px"),
        ];
        for theme in Theme::ALL {
            assert_eq!(render(&tokens, theme), render(&tokens, theme));
        }
    }

    #[test]
    fn unknown_theme_renders_as_light() {
        let tokens = vec![primary()];
        assert_eq!(
            render_for(&tokens, "unknown"),
            render_for(&tokens, "light")
        );
        assert_eq!(render_for(&tokens, "tablet"), render(&tokens, Theme::Tablet));
    }
}
