pub mod client_config;
pub mod envelope;
pub mod file_object;
pub(crate) mod server_action;
pub mod server_record;
pub mod subuser_record;
pub mod usage;
