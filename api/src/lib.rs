// Student roster API: router, handlers, and shared state

pub mod handlers;
pub mod routes;
pub mod state;
