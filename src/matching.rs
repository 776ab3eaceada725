use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::{Value, json};

use crate::models::wear::WearRecord;

/// Walks every detail payload's `data.items` list and swaps it for an enriched
/// copy. Items of one payload are matched in parallel on a pool of `workers`
/// threads; payloads themselves go one after another. Returns how many items
/// actually picked up a float range.
pub fn match_wear_data(
    details: &mut IndexMap<String, Value>,
    wear_records: &[WearRecord],
    workers: usize
) -> Result<usize, String> {

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| format!("Building the wear matcher thread pool failed. \n{}", e))?;

    let mut enriched: usize = 0;

    for detail in details.values_mut() {
        let Some(items) = detail.get("data")
            .and_then( |d| d.get("items") )
            .and_then( |i| i.as_array() )
            .cloned() else { continue };

        let matched: Vec<Value> = pool.install(|| {
            items.par_iter()
                .map( |good| enrich_item(good, wear_records) )
                .collect()
        });

        enriched += matched.iter().zip(&items).filter( |(new, old)| new != old ).count();

        if let Some(slot) = detail.get_mut("data").and_then( |d| d.get_mut("items") ) {
            *slot = Value::Array(matched);
        }
    }

    Ok(enriched)
}

// Pure per-item unit of work: no mutation of anything shared, just a new Value.
// The first record whose name equals the item's localized_name wins; the
// dataset has duplicate names, so scan order matters and stays fixed. Records
// without both float bounds are passed over.
fn enrich_item(good: &Value, wear_records: &[WearRecord]) -> Value {
    let Some(short_name) = good.get("localized_name").and_then( |n| n.as_str() ) else { return good.clone() };

    for skin in wear_records {
        if skin.name.as_deref() != Some(short_name) { continue }

        let (Some(min_float), Some(max_float)) = (skin.min_float, skin.max_float) else { continue };

        let mut merged = good.clone();
        let Some(obj) = merged.as_object_mut() else { return good.clone() };

        obj.insert( "max_float".to_string(), json!(max_float) );
        obj.insert( "min_float".to_string(), json!(min_float) );

        return merged;
    }

    good.clone()
}
