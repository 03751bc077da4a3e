pub mod room_service;
pub mod room_type_service;
pub mod service_service;
pub mod slider_service;
