//! Profile capabilities and the manager that owns the active instance.

pub mod capability;
pub mod manager;
pub mod specific_api;

pub use capability::{BaseApi, BaseProfile, Capability, Profile, ProfileState};
pub use manager::{ProfileHandle, ProfileManager};
pub use specific_api::SpecificApi;
