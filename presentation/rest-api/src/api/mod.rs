pub mod alert;
pub mod error;
pub mod health;
pub mod item;
pub mod params;
pub mod tags;
