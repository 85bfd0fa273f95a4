// Library for tests to access modules

pub mod config;
pub mod filter;
pub mod models;
pub mod routes;
pub mod status;
pub mod store;
pub mod version;
pub mod worker;
