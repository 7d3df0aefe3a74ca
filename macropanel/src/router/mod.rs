pub mod quotes;
pub mod series;
pub mod util;
