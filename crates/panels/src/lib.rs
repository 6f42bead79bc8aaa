pub mod builder;
pub mod iterator;
pub mod singleton;

pub use builder::BuilderPanel;
pub use iterator::IteratorPanel;
pub use singleton::SingletonPanel;
