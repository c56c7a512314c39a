pub(crate) mod debug;
pub(crate) mod stamp;

pub(crate) use debug::{debug_log, set_debug};
pub(crate) use stamp::run_stamp;
