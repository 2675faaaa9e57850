use kernel::id::Id;

pub use kernel::id::markers::{Shipment as ShipmentMarker, User as UserMarker};
pub type ShipmentId = Id<ShipmentMarker>;
pub type UserId = Id<UserMarker>;
