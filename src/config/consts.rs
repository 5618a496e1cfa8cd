// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://wofsauge.github.io/IsaacDocs/rep/enums/";
pub const USER_AGENT: &str = concat!("id_pools/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Output
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_BUNDLE_FILE: &str = "itemmap.js";
