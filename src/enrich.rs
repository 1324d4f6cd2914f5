//! Record enrichment.
//!
//! Turns each PubMed identifier into one [`EnrichedRecord`] by fetching its
//! summary and running every author through the affiliation heuristic.

use crate::affiliation::{classify_affiliation, AffiliationClass};
use crate::error::Result;
use crate::pubmed::{AuthorEntry, DocSummary, PubMedClient};
use serde::Serialize;
use tracing::{debug, info};

/// Placeholder written for any missing or empty value
pub const NOT_AVAILABLE: &str = "N/A";

/// One report row. Every field holds a display string, never an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(rename = "PubmedID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

/// Return `value`, or `"N/A"` when it is absent or empty
pub fn defaulted(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Running state while folding over a record's authors
#[derive(Debug, Default)]
struct AuthorTally {
    non_academic: Vec<String>,
    companies: Vec<String>,
    email: Option<String>,
}

impl AuthorTally {
    fn push(mut self, author: &AuthorEntry) -> Self {
        match classify_affiliation(&author.affiliation) {
            AffiliationClass::Academic => {}
            AffiliationClass::Industry => self.non_academic.push(author.name.clone()),
            AffiliationClass::IndustryWithCompanyTag => {
                self.non_academic.push(author.name.clone());
                self.companies.push(author.affiliation.clone());
            }
        }

        // Last non-empty email wins, academic authors included
        if !author.email.is_empty() {
            self.email = Some(author.email.clone());
        }

        self
    }
}

/// Build the report row for one identifier.
///
/// A missing summary still yields a row, with every field set to `"N/A"`.
pub fn build_record(id: &str, summary: Option<DocSummary>) -> EnrichedRecord {
    let doc = summary.unwrap_or_default();

    let tally = doc
        .authors
        .iter()
        .fold(AuthorTally::default(), AuthorTally::push);

    let non_academic = tally.non_academic.join(", ");
    let companies = tally.companies.join(", ");

    EnrichedRecord {
        id: id.to_string(),
        title: defaulted(doc.title.as_deref()),
        publication_date: defaulted(doc.pubdate.as_deref()),
        non_academic_authors: defaulted(Some(&non_academic)),
        company_affiliations: defaulted(Some(&companies)),
        corresponding_email: defaulted(tally.email.as_deref()),
    }
}

/// Fetch and enrich each identifier in order, one request at a time
pub async fn enrich(client: &PubMedClient, ids: &[String]) -> Result<Vec<EnrichedRecord>> {
    let mut records = Vec::with_capacity(ids.len());

    for (idx, id) in ids.iter().enumerate() {
        let summary = client.summary(id).await?;
        if summary.is_none() {
            debug!(id = %id, "No summary object for identifier");
        }

        let record = build_record(id, summary);
        debug!(
            index = idx + 1,
            total = ids.len(),
            id = %record.id,
            non_academic = %record.non_academic_authors,
            "Enriched record"
        );
        records.push(record);
    }

    info!(count = records.len(), "Enrichment complete");
    Ok(records)
}
