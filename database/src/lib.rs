pub mod schema;

mod connection;

pub use connection::pool;
pub use schema::articles::initialize;
pub use sqlx;
