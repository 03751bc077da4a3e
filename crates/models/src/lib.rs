pub mod db;
pub mod errors;
pub mod room;
pub mod room_gallery;
pub mod room_type;
pub mod service;
pub mod service_gallery;
pub mod slider_item;

#[cfg(test)]
mod tests;
