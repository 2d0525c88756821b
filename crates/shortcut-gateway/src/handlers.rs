mod home;
mod shorten;
mod stats;

pub use home::{home_handler, HOME_BANNER};
pub use shorten::{shorten_empty_handler, shorten_handler, shorten_redirect_handler};
pub use stats::{stats_handler, StatsQuery};
