//! Small text extractors used while converting XML records

use std::sync::OnceLock;

use regex::Regex;

/// First e-mail address embedded in affiliation text
///
/// PubMed has no dedicated contact element; addresses are appended to the
/// affiliation, often as "Electronic address: someone@example.com."
pub(super) fn extract_email_from_text(text: &str) -> Option<String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")
            .expect("email pattern is valid")
    });

    re.find(text).map(|m| m.as_str().to_string())
}

/// Display name built from the name parts of an `<Author>` element
pub(super) fn format_author_name(
    last_name: Option<&str>,
    fore_name: Option<&str>,
    initials: Option<&str>,
    collective_name: Option<&str>,
) -> Option<String> {
    fn non_blank(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|s| !s.is_empty())
    }

    let name = match (non_blank(fore_name), non_blank(last_name)) {
        (Some(fore), Some(last)) => format!("{fore} {last}"),
        (None, Some(last)) => match non_blank(initials) {
            Some(init) => format!("{init} {last}"),
            None => last.to_string(),
        },
        (Some(fore), None) => fore.to_string(),
        (None, None) => non_blank(collective_name)?.to_string(),
    };

    Some(name)
}
