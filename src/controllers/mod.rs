pub mod emission_controller;
pub mod vehicle_controller;
