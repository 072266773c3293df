pub mod vehicle_form;
pub mod hal;

pub use vehicle_form::VehicleForm;
pub use hal::{CollectionLinks, EmbeddedVehicles, Link, PageMetadata, VehicleCollectionModel, VehicleLinks, VehicleModel};
