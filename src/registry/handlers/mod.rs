pub mod agents;
pub mod common;
pub mod fleet;
pub mod inventory;
pub mod navigation;
pub mod orders;
pub mod system;
