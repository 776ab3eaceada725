mod models;
use models::{wear::WearRecord, web::{ContainerKind, FetchInfo}};

mod browser;
use browser::{buff, buff::DetailReport, csgoapi};

mod parsing;
use parsing::listing;

mod matching;
mod persist;

mod fetch_config_tmp;
use fetch_config_tmp::FETCH;

use reqwest::Client;

#[tokio::main]
async fn main() {
    // Whatever goes wrong, say so and exit like nothing happened. A half-done
    // run just gets redone from the top, the files are overwritten anyway.
    if let Err(e) = run().await {
        println!("ERROR: {}", e);
    }
}

async fn run() -> Result<(), String> {
    let cfg: FetchInfo = FETCH.clone();
    let client = Client::new();

    // -----------------------------------------------------------------------------------------------

    println!("Fetching weapon cases list...");
    let weapon_cases_data = buff::get_container_list(&client, &cfg, &ContainerKind::WeaponCase).await?;
    println!("Fetching map collections list...");
    let map_collections_data = buff::get_container_list(&client, &cfg, &ContainerKind::MapCollection).await?;

    println!("Saving container lists...");
    persist::save_to_file( ContainerKind::WeaponCase.listing_file(), &weapon_cases_data )?;
    persist::save_to_file( ContainerKind::MapCollection.listing_file(), &map_collections_data )?;

    // -----------------------------------------------------------------------------------------------

    let mut reports: Vec<(ContainerKind, DetailReport)> = Vec::new();

    for (kind, listing_data) in [
        (ContainerKind::WeaponCase, &weapon_cases_data),
        (ContainerKind::MapCollection, &map_collections_data)
    ] {
        let values = listing::extract_values(listing_data);
        println!("Extracted {} values from the {} listing.", values.len(), kind.as_str());

        let report = buff::get_container_details(&client, &cfg, &kind, &values).await?;

        // Saved once here and once more after enrichment, so a wear-data
        // failure still leaves the raw details on disk.
        persist::save_to_file( kind.details_file(), &report.details )?;

        reports.push((kind, report));
    }

    // -----------------------------------------------------------------------------------------------

    println!("Fetching wear data from the CSGO-API dataset...");
    let wear_data: Vec<WearRecord> = csgoapi::get_wear_data(&client, &cfg).await?;
    println!("Got {} wear records.", wear_data.len());

    for (kind, report) in &mut reports {
        println!("Matching wear data with {}...", kind.as_str());
        let enriched = matching::match_wear_data(&mut report.details, &wear_data, cfg.match_workers)?;
        println!("Enriched {} items with a float range.", enriched);

        persist::save_to_file( kind.details_file(), &report.details )?;
    }

    // -----------------------------------------------------------------------------------------------

    for (kind, report) in &reports {
        println!(
            "{}: saved {} container details to {} ({} skipped, {} listing entries without a value).",
            kind.as_str(), report.details.len(), kind.details_file(), report.skipped.len(), report.missing
        );
        if !report.skipped.is_empty() {
            println!("Skipped containers: {:?}", report.skipped);
        }
    }

    Ok(())
}
