pub mod analysis;
pub mod listing;
pub mod rating;
pub mod view_model;

pub use analysis::{AnalysisResult, CategoryTexts, Score, ScoreCategory};
pub use listing::{IncompleteQuery, ListingQuery, PreScanResult};
pub use rating::Rating;
pub use view_model::{update, Action, View, ViewModel};
