pub mod emission_dto;
pub mod vehicle_dto;
