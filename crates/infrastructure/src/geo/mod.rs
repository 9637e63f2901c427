pub mod maxmind;

pub use maxmind::{DisabledGeoLocator, MaxMindGeoLocator};
