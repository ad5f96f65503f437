pub mod error;
pub mod util;

pub use error::{EngineError, ErrorCode, Result};
pub use util::time::{format_local_timestamp, now_epoch_secs, ONE_YEAR_SECS};
