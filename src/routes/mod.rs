mod routes;

pub use routes::{cors, init_routes};
