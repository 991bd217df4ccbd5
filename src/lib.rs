pub mod domain;
pub mod infrastructure;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

/// Single setup routine for the browser side: install the logging stack,
/// then mount the form application. Every event binding happens once,
/// inside the Leptos component tree.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn initialize() {
    use crate::domain::logging::{LogComponent, get_logger};

    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(
        infrastructure::services::ConsoleLogger::new_development(),
    ));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider));

    get_logger().info(
        LogComponent::Form("Initialize"),
        "🚀 DCA calculator UI starting",
    );

    leptos::mount_to_body(app::App);
}
