pub mod hand;
pub mod odds;
pub mod optimize;

pub use hand::{Hand, HandError};
pub use odds::{Evaluator, Recommendation, Side};
