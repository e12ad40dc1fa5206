mod debug_messenger;
mod instance;
pub mod layer;
mod query;
pub mod registry;
mod session;

pub use instance::get_instance_layers;
pub use session::Session;
