pub mod capability;
pub mod chat;
pub mod describe;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod paths;
pub mod persist;
pub mod registry;
pub mod sample;
pub mod settings;
pub mod state;
