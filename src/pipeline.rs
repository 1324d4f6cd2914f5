//! Search-then-enrich pipeline.

use crate::enrich::{enrich, EnrichedRecord};
use crate::error::Result;
use crate::pubmed::PubMedClient;
use tracing::info;

/// Run a PubMed search for `query` and enrich every returned identifier.
///
/// Records come back in the order the search returned their identifiers.
pub async fn get_papers_list(client: &PubMedClient, query: &str) -> Result<Vec<EnrichedRecord>> {
    let ids = client.search(query).await?;
    info!(query = query, ids = ids.len(), "Enriching search results");

    enrich(client, &ids).await
}
