//! XML preprocessing applied before deserialization

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Strip inline formatting tags (`<i>`, `<sup>`, `<sub>`, `<b>`, ...) from EFetch XML
///
/// These tags show up inside `ArticleTitle` and `Affiliation` text and turn
/// the element into mixed content, which the serde deserializer cannot read
/// into a plain string.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag pattern is valid")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            removed_bytes = xml.len() - cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}
