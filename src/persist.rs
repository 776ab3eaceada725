use serde::Serialize;

/// Overwrites `filename` with indented UTF-8 JSON. serde_json never escapes
/// non-ASCII, so the chinese localized names land in the file as-is.
pub fn save_to_file<T: Serialize>(filename: &str, data: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("Serializing the data for {} failed. \n{}", filename, e))?;

    std::fs::write(filename, json)
        .map_err(|e| format!("Writing the file {} failed. \n{}", filename, e))?;

    Ok(())
}
