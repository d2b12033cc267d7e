pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
pub mod ui;

pub use page_header::PageHeader;
pub use progress_bar::ProgressBar;
pub use stat_card::StatCard;
