use serde::Deserialize;

/// One skin entry from the ByMykel CSGO-API dataset. The dataset carries a lot
/// more per skin (rarity, collections, crates...) but the matcher only needs the
/// name and the float range, and not every entry has a range (gloves, vanilla
/// knives), so everything stays optional.
#[derive(Debug, Clone, Deserialize)]
pub struct WearRecord {
    pub name: Option<String>,
    pub min_float: Option<f64>,
    pub max_float: Option<f64>,
}
