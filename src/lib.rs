pub mod modules {
    pub mod registry;
    pub mod specific_profile;
}
pub mod config;
pub mod error;
pub mod handler_trait;
pub mod logging;
pub mod profile;
pub mod specific_handler;
