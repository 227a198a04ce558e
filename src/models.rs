pub mod maintenance;
pub mod rooms;
pub mod tenant;
pub mod visit;
