pub mod health;
pub mod item;
pub mod metrics;
