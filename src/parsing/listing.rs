use serde_json::Value;

/// Pulls the `value` identifier out of every listing entry, in listing order.
/// An entry without one still takes up a slot as None so the sequence length
/// always mirrors the listing. A listing without `data.items` yields nothing.
pub fn extract_values(listing: &Value) -> Vec<Option<String>> {
    listing.get("data")
        .and_then( |d| d.get("items") )
        .and_then( |i| i.as_array() )
        .map( |items| items.iter()
            .map( |item| item.get("value").and_then( |v| v.as_str() ).map( str::to_owned ) )
            .collect()
        )
        .unwrap_or_default()
}
