//! Explicit entity escaping for text assembled outside maud templates.
//!
//! Maud auto-escapes everything interpolated into its `html!` blocks, so the
//! page renderer never calls this directly. The sitemap, however, is
//! string-assembled XML, and its `<loc>` values interpolate the configured
//! base URL and route paths. The five-entity set below is valid in both HTML
//! and XML text nodes (`&#39;` rather than `&apos;`, which HTML 4 lacked).

/// Escape markup-significant characters in `value`.
///
/// Substitutions are applied in a fixed order with ampersand first, so
/// entities introduced by later substitutions are never double-escaped.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("scrap metal"), "scrap metal");
    }

    #[test]
    fn escapes_all_five_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">it's & done</a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#39;s &amp; done&lt;/a&gt;"
        );
    }

    #[test]
    fn ampersand_first_avoids_double_escaping() {
        // If '&' were escaped after '<', the '&' inside "&lt;" would be
        // re-escaped into "&amp;lt;".
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn mixed_sample_from_contract() {
        assert_eq!(
            escape_html(r#"A & B <tag> "quoted""#),
            "A &amp; B &lt;tag&gt; &quot;quoted&quot;"
        );
    }

    #[test]
    fn leaves_no_raw_markup_characters() {
        let escaped = escape_html("a<b>c\"d'e&f");
        for raw in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(raw), "raw {raw:?} in {escaped:?}");
        }
        // Every remaining '&' must open a known entity.
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|e| rest.starts_with(e)),
                "dangling ampersand in {escaped:?}"
            );
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_html(""), "");
    }
}
