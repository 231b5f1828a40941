pub mod server;
pub mod subuser;
