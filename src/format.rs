//! Card Formatting
//!
//! Maps record categories and statuses to display glyphs and CSS classes,
//! and escapes record text before it is embedded in markup.

use crate::models::Kind;

const PROPOSAL_ICONS: &[(&str, &str)] = &[
    ("governance", "🏛️"),
    ("healthcare", "🏥"),
    ("education", "📚"),
    ("transportation", "🚌"),
    ("agriculture", "🌾"),
    ("finance", "💰"),
    ("environment", "🌳"),
    ("technology", "💻"),
];

const ISSUE_ICONS: &[(&str, &str)] = &[
    ("corruption", "⚖️"),
    ("healthcare", "🏥"),
    ("education", "📚"),
    ("infrastructure", "🏗️"),
    ("environment", "🌍"),
    ("economy", "📊"),
    ("social", "👥"),
];

const STATUS_CLASSES: &[(&str, &str)] = &[
    ("active", "active"),
    ("in progress", "active"),
    ("pending", "pending"),
    ("under review", "review"),
    ("review", "review"),
    ("new", "new"),
    ("open", "new"),
];

const DEFAULT_STATUS_CLASS: &str = "new";

/// Fallback glyph when a category is missing or unknown
pub fn default_icon(kind: Kind) -> &'static str {
    match kind {
        Kind::Proposal => "💡",
        Kind::Issue => "📋",
    }
}

/// Case-insensitive category lookup in the kind's icon table
pub fn icon_for(kind: Kind, category: Option<&str>) -> &'static str {
    let table = match kind {
        Kind::Proposal => PROPOSAL_ICONS,
        Kind::Issue => ISSUE_ICONS,
    };
    category
        .and_then(|c| lookup(table, c))
        .unwrap_or_else(|| default_icon(kind))
}

/// CSS modifier class for a textual status; unknown statuses read as new
pub fn status_class(status: Option<&str>) -> &'static str {
    status
        .and_then(|s| lookup(STATUS_CLASSES, s))
        .unwrap_or(DEFAULT_STATUS_CLASS)
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Neutralize markup-significant characters for text and attribute contexts
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// `escape` for optional fields; absent text renders as nothing
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_ignores_case() {
        assert_eq!(icon_for(Kind::Proposal, Some("Healthcare")), icon_for(Kind::Proposal, Some("healthcare")));
        assert_eq!(icon_for(Kind::Proposal, Some("TECHNOLOGY")), "💻");
        assert_eq!(icon_for(Kind::Issue, Some("Corruption")), "⚖️");
    }

    #[test]
    fn tables_are_kind_specific() {
        assert_eq!(icon_for(Kind::Proposal, Some("environment")), "🌳");
        assert_eq!(icon_for(Kind::Issue, Some("environment")), "🌍");
        // "corruption" only exists in the issue table
        assert_eq!(icon_for(Kind::Proposal, Some("corruption")), "💡");
    }

    #[test]
    fn unknown_or_missing_category_uses_default() {
        assert_eq!(icon_for(Kind::Proposal, None), "💡");
        assert_eq!(icon_for(Kind::Issue, None), "📋");
        assert_eq!(icon_for(Kind::Issue, Some("space")), "📋");
        assert_eq!(icon_for(Kind::Issue, Some("")), "📋");
    }

    #[test]
    fn status_classes() {
        assert_eq!(status_class(Some("Active")), "active");
        assert_eq!(status_class(Some("In Progress")), "active");
        assert_eq!(status_class(Some("pending")), "pending");
        assert_eq!(status_class(Some("Under Review")), "review");
        assert_eq!(status_class(Some("review")), "review");
        assert_eq!(status_class(Some("OPEN")), "new");
        assert_eq!(status_class(Some("archived")), "new");
        assert_eq!(status_class(None), "new");
    }

    #[test]
    fn escape_removes_raw_markup() {
        let escaped = escape("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn escape_handles_attribute_quotes_and_ampersands() {
        assert_eq!(escape(r#"a "b" & 'c'"#), "a &quot;b&quot; &amp; &#39;c&#39;");
        assert_eq!(escape("নতুন প্রস্তাব"), "নতুন প্রস্তাব");
        assert_eq!(escape(""), "");
        assert_eq!(escape_opt(None), "");
    }
}
