use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub price_file: String,
    pub asset_dir: String,
    pub coingecko_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Same port the calculator has always listened on.
            bind_addr: "0.0.0.0:5000".into(),
            price_file: "./data/bitcoin_prices.json".into(),
            // Where trunk/wasm-bindgen drops the compiled bundle.
            asset_dir: "./pkg".into(),
            coingecko_api_key: None,
        }
    }
}

/// Defaults, overlaid by `dca.toml` (flat string keys), overlaid by env vars.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("dca.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_overrides(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = std::env::var("DCA_BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("DCA_PRICE_FILE") {
        settings.price_file = v;
    }
    if let Ok(v) = std::env::var("DCA_ASSET_DIR") {
        settings.asset_dir = v;
    }
    if let Ok(v) = std::env::var("COINGECKO_API_KEY") {
        settings.coingecko_api_key = Some(v);
    }

    settings
}

pub fn apply_file_overrides(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.bind_addr = v.clone();
    }
    if let Some(v) = file_cfg.get("price_file") {
        settings.price_file = v.clone();
    }
    if let Some(v) = file_cfg.get("asset_dir") {
        settings.asset_dir = v.clone();
    }
    if let Some(v) = file_cfg.get("coingecko_api_key") {
        settings.coingecko_api_key = Some(v.clone());
    }
}
