#[cfg(target_arch = "wasm32")]
pub mod http;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(not(target_arch = "wasm32"))]
pub mod prices;
#[cfg(not(target_arch = "wasm32"))]
pub mod spot;
