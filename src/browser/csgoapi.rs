use reqwest::{Client, StatusCode};

use crate::models::{wear::WearRecord, web::FetchInfo};

// https://github.com/ByMykel/CSGO-API — static dataset served straight off
// raw.githubusercontent.com, so no headers needed here.
pub async fn get_wear_data(client: &Client, cfg: &FetchInfo) -> Result<Vec<WearRecord>, String> {
    let response = client.get( &cfg.wear_url )
        .send()
        .await.map_err(|e| format!("Error sending GET request to the CSGO-API skins dataset. \n{}", e))?;

    if response.status() != StatusCode::OK { return Err( format!("GET Request failed! \n{}", response.status()) ) }

    let records: Vec<WearRecord> = response.json()
        .await.map_err(|e| format!("Parsing the CSGO-API skins dataset to wear records failed. \n{}", e))?;

    Ok(records)
}
