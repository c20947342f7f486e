//! Top-level views

mod analytics;
mod dashboard;
mod landing;
mod login;
mod upload;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use upload::UploadPage;
