//! Overview dashboard panels.

mod export;
pub use export::ExportPanel;

mod filter_bar;
pub use filter_bar::FilterBar;

mod kpi;
pub use kpi::KpiGrid;

pub mod live;
pub use live::LiveUsersCard;

mod reports;
pub use reports::SavedReportsPanel;

mod top_pages;
pub use top_pages::TopPagesPanel;

mod traffic;
pub use traffic::TrafficPanel;
