/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(test)]
mod tests {
    use crate::render::format::{parse_marker, InlineTag, OutputFormat};
    use crate::render::html::Html;
    use crate::render::plain::{PlainText, Raw};
    use crate::render::rtf::Rtf;
    use crate::render::render_with_format;
    use bibformat_core::template::{compile, FieldSet};
    use bibformat_core::{Item, PluralFlags};

    const RENDERED: &str = "Smith, [i]Tools & <Dies>[/i], pp. 4[ndash]9";

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker("[i]x"), Some((InlineTag::Italic, false, 3)));
        assert_eq!(parse_marker("[/sup]"), Some((InlineTag::Superscript, true, 6)));
        assert_eq!(parse_marker("[ed.]"), None);
        assert_eq!(parse_marker("i]"), None);
    }

    #[test]
    fn test_plain_drops_markers() {
        assert_eq!(PlainText.format(RENDERED), "Smith, Tools & <Dies>, pp. 4\u{2013}9");
    }

    #[test]
    fn test_plain_keeps_unknown_brackets() {
        assert_eq!(PlainText.format("[sic] [ndash"), "[sic] [ndash");
    }

    #[test]
    fn test_raw_is_identity() {
        assert_eq!(Raw.format(RENDERED), RENDERED);
    }

    #[test]
    fn test_html_escapes_and_tags() {
        assert_eq!(
            Html.format(RENDERED),
            "Smith, <em>Tools &amp; &lt;Dies&gt;</em>, pp. 4&ndash;9"
        );
        assert_eq!(
            Html.format("[b]x[/b][u]y[/u]H[sub]2[/sub]O"),
            r#"<strong>x</strong><span style="text-decoration: underline;">y</span>H<sub>2</sub>O"#
        );
    }

    #[test]
    fn test_rtf_groups_and_escapes() {
        assert_eq!(
            Rtf.format("[i]{x}[/i] a\\b[ndash]c"),
            "{\\i \\{x\\}} a\\\\b\\endash c"
        );
        assert_eq!(Rtf.format("[sup]1[/sup]"), "{\\super 1}");
    }

    #[test]
    fn test_rtf_unicode_escapes() {
        assert_eq!(Rtf.format("caf\u{e9}"), "caf\\u233?");
        assert_eq!(Rtf.format("\u{2019}"), "\\u8217?");
        assert_eq!(Rtf.format("\u{fb01}"), "\\u-1279?");
    }

    #[test]
    fn test_render_with_format() {
        let fields = FieldSet::new(["title", "pages"]);
        let template = compile("[i]title[/i]|, pages", &fields);
        let item: Item = [("title", "Essays"), ("pages", "4[ndash]9")]
            .into_iter()
            .collect();
        assert_eq!(
            render_with_format::<Html>(&template, &item, &PluralFlags::new()),
            "<em>Essays</em>, 4&ndash;9"
        );
        assert_eq!(
            render_with_format::<PlainText>(&template, &item, &PluralFlags::new()),
            "Essays, 4\u{2013}9"
        );
    }
}
