pub mod api_server;
pub mod sample_store;

pub use api_server::{run_api_server, start_api_server};
pub use sample_store::SampleDataStore;
