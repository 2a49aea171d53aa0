pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod stateless_llm;
pub mod translate;

#[cfg(test)]
pub(crate) mod test_server;
