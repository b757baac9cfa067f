//! FAQ store infrastructure - In-memory and MongoDB backends

mod factory;
mod in_memory;
mod mongodb;

pub use factory::{StoreConfig, StoreFactory, StoreType};
pub use in_memory::InMemoryFaqRepository;
pub use mongodb::{MongoConfig, MongoFaqRepository};
