//! Frontend Models
//!
//! Data structures matching the static index documents.

use serde::{Deserialize, Deserializer, Serialize};

/// The two record collections shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Proposal,
    Issue,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Proposal, Kind::Issue];

    /// Identifier used by tab buttons (`data-tab`) and tab panes (`id`)
    pub fn tab_id(self) -> &'static str {
        match self {
            Kind::Proposal => "proposals",
            Kind::Issue => "issues",
        }
    }

    /// Value of the `data-type` attribute on rendered cards
    pub fn card_type(self) -> &'static str {
        match self {
            Kind::Proposal => "proposal",
            Kind::Issue => "issue",
        }
    }

    pub fn from_tab_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tab_id() == id)
    }

    /// File name of the index document for this kind
    pub fn index_file(self) -> &'static str {
        match self {
            Kind::Proposal => "proposals-index.json",
            Kind::Issue => "issues-index.json",
        }
    }
}

/// One proposal or issue entry (identity is `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Records plus the grand total reported by an index document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexDocument {
    pub records: Vec<Record>,
    pub total_count: u64,
}

#[derive(Deserialize)]
struct ProposalsIndex {
    #[serde(default, deserialize_with = "null_as_default")]
    proposals: Vec<Record>,
    #[serde(default, rename = "totalCount", deserialize_with = "null_as_default")]
    total_count: u64,
}

#[derive(Deserialize)]
struct IssuesIndex {
    #[serde(default, deserialize_with = "null_as_default")]
    issues: Vec<Record>,
    #[serde(default, rename = "totalCount", deserialize_with = "null_as_default")]
    total_count: u64,
}

impl IndexDocument {
    /// Parse the body of `proposals-index.json` or `issues-index.json`
    pub fn parse(kind: Kind, body: &str) -> Result<Self, serde_json::Error> {
        let doc = match kind {
            Kind::Proposal => {
                let index: ProposalsIndex = serde_json::from_str(body)?;
                Self { records: index.proposals, total_count: index.total_count }
            }
            Kind::Issue => {
                let index: IssuesIndex = serde_json::from_str(body)?;
                Self { records: index.issues, total_count: index.total_count }
            }
        };
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_proposals_index() {
        let body = r#"{
            "proposals": [
                {"id": "p-1", "title": "Open budgets", "category": "Governance",
                 "summary": "Publish budgets", "status": "Active"}
            ],
            "totalCount": 40
        }"#;
        let doc = IndexDocument::parse(Kind::Proposal, body).unwrap();
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].id, "p-1");
        assert_eq!(doc.records[0].category.as_deref(), Some("Governance"));
        assert_eq!(doc.total_count, 40);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc = IndexDocument::parse(Kind::Issue, "{}").unwrap();
        assert!(doc.records.is_empty());
        assert_eq!(doc.total_count, 0);

        let doc = IndexDocument::parse(Kind::Issue, r#"{"issues":[{"id":"i-9","category":null}]}"#).unwrap();
        assert_eq!(doc.records[0].title, "");
        assert_eq!(doc.records[0].category, None);
        assert_eq!(doc.records[0].status, None);
    }

    #[test]
    fn null_fields_read_as_missing() {
        let doc = IndexDocument::parse(Kind::Proposal, r#"{"proposals": null, "totalCount": null}"#).unwrap();
        assert!(doc.records.is_empty());
        assert_eq!(doc.total_count, 0);

        let doc = IndexDocument::parse(Kind::Issue, r#"{"issues": null, "totalCount": 4}"#).unwrap();
        assert!(doc.records.is_empty());
        assert_eq!(doc.total_count, 4);

        let doc = IndexDocument::parse(
            Kind::Proposal,
            r#"{"proposals": [{"id": null, "title": null, "summary": null}], "totalCount": 1}"#,
        )
        .unwrap();
        assert_eq!(doc.records[0].id, "");
        assert_eq!(doc.records[0].title, "");
        assert_eq!(doc.records[0].summary, None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(IndexDocument::parse(Kind::Proposal, "<html>not found</html>").is_err());
        assert!(IndexDocument::parse(Kind::Proposal, r#"{"proposals": 3}"#).is_err());
    }

    #[test]
    fn tab_ids_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_tab_id(kind.tab_id()), Some(kind));
        }
        assert_eq!(Kind::from_tab_id("archive"), None);
    }
}
