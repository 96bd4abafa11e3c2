//! Services: authorized transport and the REST endpoints behind it

pub mod api;
