use std::sync::LazyLock;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use strum::EnumIter;

// Header bundle of the buff163 android app (2.102.0.0 on a Mi 10S). The listing and
// detail endpoints answer a login prompt instead of data without these.
pub static BUFF_ANDROID_HEADERS_DEFAULT: LazyLock<HeaderMap> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    for (name, value) in [
        ("host", "buff.163.com"),
        ("app-version", "1505"),
        ("app-version-code", "2.102.0.0"),
        ("brand", "Xiaomi"),
        ("build-fingerprint", "Xiaomi/thyme/thyme:13/TKQ1.221114.001/V816.0.4.0.TGACNXM:user/release-keys"),
        ("channel", "Official"),
        ("device-id-weak", "d28f4a3c49922111"),
        ("manufacturer", "Xiaomi"),
        ("model", "M2102J2SC"),
        ("network", "WIFI/"),
        ("product", "thyme"),
        ("resolution", "1080x2206"),
        ("screen-density", "440.00"),
        ("screen-size", "6.35"),
        ("system-type", "Android"),
        ("system-version", "33"),
        ("timestamp", "1741326777.413"),
        ("timezone", "China Standard Time"),
        ("timezone-offset", "28800000"),
        ("timezone-offset-dst", "28800000"),
        ("locale", "zh_CN"),
        ("locale-supported", "zh-Hans"),
    ] {
        headers.insert( HeaderName::from_static(name), HeaderValue::from_static(value) );
    }
    headers
});

//--------------------

/// Everything a fetch needs, passed in at the call site so tests can point the
/// fetchers at mock endpoints instead of the live API.
#[derive(Debug, Clone)]
pub struct FetchInfo {
    pub api_base: String,
    pub wear_url: String,
    pub page_num: u32,
    pub page_size: u32,
    pub match_workers: usize, // Pool size of the wear matcher
    pub headers: HeaderMap,
}

//--------------------

#[derive(Debug, Clone, Copy, PartialEq, EnumIter)]
pub enum ContainerKind {
    WeaponCase,
    MapCollection,
}
impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::WeaponCase => "weapon_cases",
            ContainerKind::MapCollection => "map_collections",
        }
    }

    // Only weapon cases take the extra type2 filter on the listing endpoint
    fn type2(&self) -> Option<&'static str> {
        match self {
            ContainerKind::WeaponCase => Some("weapon_case_collection"),
            ContainerKind::MapCollection => None,
        }
    }

    fn detail_type(&self) -> &'static str {
        match self {
            ContainerKind::WeaponCase => "weaponcase",
            ContainerKind::MapCollection => "itemset",
        }
    }

    pub fn listing_file(&self) -> &'static str {
        match self {
            ContainerKind::WeaponCase => "weapon_case.json",
            ContainerKind::MapCollection => "map_collection.json",
        }
    }

    pub fn details_file(&self) -> &'static str {
        match self {
            ContainerKind::WeaponCase => "weapon_case_details.json",
            ContainerKind::MapCollection => "map_collection_details.json",
        }
    }

    pub fn list_url(&self, cfg: &FetchInfo) -> String {
        let mut url = format!(
            "{}/api/market/csgo_container_list/v2?type={}&page_num={}&page_size={}",
            cfg.api_base, self.as_str(), cfg.page_num, cfg.page_size
        );
        if let Some(type2) = self.type2() {
            url.push_str( &format!("&type2={}", type2) );
        }
        url
    }

    pub fn detail_url(&self, cfg: &FetchInfo, value: &str) -> String {
        format!(
            "{}/api/market/csgo_container?container={}&is_container=1&container_type={}&unusual_only=0&game=csgo&appid=730",
            cfg.api_base, value, self.detail_type()
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn test_cfg() -> FetchInfo {
        FetchInfo {
            api_base: String::from("http://localhost:8080"),
            wear_url: String::from("http://localhost:8080/skins.json"),
            page_num: 1,
            page_size: 60,
            match_workers: 2,
            headers: BUFF_ANDROID_HEADERS_DEFAULT.to_owned(),
        }
    }

    #[test]
    fn weapon_case_list_url_carries_type2() {
        let url = ContainerKind::WeaponCase.list_url( &test_cfg() );
        assert_eq!(
            url,
            "http://localhost:8080/api/market/csgo_container_list/v2?type=weapon_cases&page_num=1&page_size=60&type2=weapon_case_collection"
        );
    }

    #[test]
    fn map_collection_list_url_has_no_type2() {
        let url = ContainerKind::MapCollection.list_url( &test_cfg() );
        assert_eq!(
            url,
            "http://localhost:8080/api/market/csgo_container_list/v2?type=map_collections&page_num=1&page_size=60"
        );
    }

    #[test]
    fn detail_urls_use_the_right_container_type() {
        let cfg = test_cfg();
        assert_eq!(
            ContainerKind::WeaponCase.detail_url(&cfg, "101"),
            "http://localhost:8080/api/market/csgo_container?container=101&is_container=1&container_type=weaponcase&unusual_only=0&game=csgo&appid=730"
        );
        assert_eq!(
            ContainerKind::MapCollection.detail_url(&cfg, "101"),
            "http://localhost:8080/api/market/csgo_container?container=101&is_container=1&container_type=itemset&unusual_only=0&game=csgo&appid=730"
        );
    }

    #[test]
    fn every_kind_has_distinct_output_files() {
        let cfg = test_cfg();
        for kind in ContainerKind::iter() {
            assert!( !kind.list_url(&cfg).is_empty() );
            assert_ne!( kind.listing_file(), kind.details_file() );
        }
        assert_ne!( ContainerKind::WeaponCase.details_file(), ContainerKind::MapCollection.details_file() );
    }

    #[test]
    fn header_bundle_has_the_full_android_fingerprint() {
        let headers = BUFF_ANDROID_HEADERS_DEFAULT.to_owned();
        assert_eq!( headers.len(), 22 );
        assert_eq!( headers.get("host").and_then(|h| h.to_str().ok()), Some("buff.163.com") );
        assert_eq!( headers.get("system-type").and_then(|h| h.to_str().ok()), Some("Android") );
    }
}
