pub mod manager;
pub mod slot;

pub use manager::InstanceManager;
pub use slot::InstanceSlot;
