pub mod outcome;
pub mod panel;
pub mod value_objects;

pub use outcome::{DcaResult, SubmissionOutcome, classify_submission};
pub use panel::PanelState;
pub use value_objects::{FormInputs, PurchaseInterval};
