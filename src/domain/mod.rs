pub mod dca;
pub mod errors;
pub mod form;
pub mod logging;
