mod pool;
pub mod queries;
pub mod schema;
pub mod store;

pub use pool::*;
pub use schema::init_database;
