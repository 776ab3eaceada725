use std::sync::LazyLock;

use crate::models::web::{BUFF_ANDROID_HEADERS_DEFAULT, FetchInfo};

pub static FETCH: LazyLock<FetchInfo> = LazyLock::new(|| {
    FetchInfo {
        api_base: String::from("https://buff.163.com"),
        // zh-CN locale so names line up with the localized_name buff sends back
        wear_url: String::from("https://raw.githubusercontent.com/ByMykel/CSGO-API/main/public/api/zh-CN/skins.json"),
        page_num: 1,
        page_size: 60, // One page covers every container buff lists per type
        match_workers: 10,
        headers: BUFF_ANDROID_HEADERS_DEFAULT.to_owned(),
    }
});
