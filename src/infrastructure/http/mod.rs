pub mod dca_api_client;

pub use dca_api_client::DcaApiClient;
