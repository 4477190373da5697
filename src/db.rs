use diesel::r2d2::{self, ConnectionManager};

#[cfg(feature = "mysql")]
pub type DbConnection = diesel::mysql::MysqlConnection;

#[cfg(not(feature = "mysql"))]
pub type DbConnection = diesel::sqlite::SqliteConnection;

pub type Backend = <DbConnection as diesel::Connection>::Backend;

pub type DbPool = r2d2::Pool<ConnectionManager<DbConnection>>;

/// Opens the pool the server hands to every request handler.
pub fn init_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<DbConnection>::new(database_url);
    r2d2::Pool::builder().max_size(max_size).build(manager)
}
