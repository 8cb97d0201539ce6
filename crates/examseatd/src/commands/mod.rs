pub mod allocate;
pub mod rooms;
