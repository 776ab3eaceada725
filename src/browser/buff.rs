use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::models::web::{ContainerKind, FetchInfo};

/// What came back from walking one catalog's identifiers. `details` keeps fetch
/// order and is keyed by the marketplace value so a skipped container never
/// shifts the key of the ones after it.
#[derive(Debug)]
pub struct DetailReport {
    pub details: IndexMap<String, Value>,
    pub skipped: Vec<String>, // non-200 answers
    pub missing: usize,       // listing entries without a value field
}

pub async fn get_container_list(client: &Client, cfg: &FetchInfo, kind: &ContainerKind) -> Result<Value, String> {
    // Sending the GET request trying to mimic the one used by the buff163 android app
    let response = client.get( kind.list_url(cfg) )
        .headers( cfg.headers.to_owned() )
        .send()
        .await.map_err(|e| format!("Error sending GET request to the buff container list API. \n{}", e))?;

    if response.status() != StatusCode::OK { return Err( format!("GET Request failed! \n{}", response.status()) ) }

    let listing: Value = response.json()
        .await.map_err(|e| format!("Parsing the buff {} listing response to JSON failed. \n{}", kind.as_str(), e))?;

    Ok(listing)
}

/// One GET per identifier, strictly one at a time. A non-200 answer skips that
/// container and the run keeps going; a transport error kills the whole run,
/// same as on the listing endpoint.
pub async fn get_container_details(
    client: &Client,
    cfg: &FetchInfo,
    kind: &ContainerKind,
    values: &[Option<String>]
) -> Result<DetailReport, String> {

    let mut details: IndexMap<String, Value> = IndexMap::new();
    let mut skipped: Vec<String> = Vec::new();
    let mut missing: usize = 0;

    let pb = ProgressBar::new(values.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message( format!("Fetching {} details", kind.as_str()) );

    for value in values {
        pb.inc(1);

        let Some(value) = value else { missing += 1; continue };

        let response = client.get( kind.detail_url(cfg, value) )
            .headers( cfg.headers.to_owned() )
            .send()
            .await.map_err(|e| format!("Error sending GET request to the buff container detail API. \n{}", e))?;

        if response.status() != StatusCode::OK { skipped.push( value.clone() ); continue }

        let detail: Value = response.json()
            .await.map_err(|e| format!("Parsing the buff container {} detail response to JSON failed. \n{}", value, e))?;

        details.insert( value.clone(), detail );
    }

    pb.finish_with_message("Done");

    Ok( DetailReport { details, skipped, missing } )
}
