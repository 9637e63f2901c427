pub mod config;
pub mod database;
pub mod geoip;
pub mod logging;

pub use config::load_config;
pub use database::init_database;
pub use geoip::init_geo_locator;
pub use logging::init_logging;
