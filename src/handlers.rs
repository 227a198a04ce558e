pub mod maintenance;
pub mod rooms;
pub mod tenants;
pub mod visits;
