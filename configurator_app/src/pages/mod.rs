//! Routed wizard pages.

mod configure;
mod landing;
mod review;

pub use configure::ConfigurePage;
pub use landing::LandingPage;
pub use review::ReviewPage;
