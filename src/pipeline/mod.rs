//! Request classification pipeline.
//!
//! Every inbound message is scored without any network call:
//! 1. `normalize()` — join subject/body, bound length, lower-case
//! 2. `IndicatorSet::score()` — weighted pattern matching per dimension
//! 3. `decide()` — hybrid decision (confident external hint, else rule tree)
//! 4. `guidance()` — reply guidance block for the chosen type

pub mod classifier;
pub mod guidance;
pub mod rules;
pub mod types;

pub use classifier::RequestClassifier;
pub use guidance::guidance;
pub use types::{ClassificationResult, ClassificationSource, ExternalHint, RequestType};
