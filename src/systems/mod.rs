mod common;
mod topcoder_sys;

pub use common::{PlayerRecord, PlayerStore, Rating, RatingSystem};
pub use topcoder_sys::TopcoderSys;
