//! Registry of profile modules known to the host.
//!
//! Each module publishes a [`ModuleDescriptor`] (factory, name, version), the
//! same triple a dynamically loaded library would export from its symbol
//! table. The registry is filled at startup and resolution is a plain lookup.

use crate::error::{ProfileError, Result};
use crate::modules::specific_profile;
use crate::profile::{Profile, ProfileState};
use std::collections::BTreeMap;

/// Factory published by a profile module. It wraps the state it is given in a
/// fresh instance, or fails without leaving anything behind.
pub type BuildProfileFn = fn(state: ProfileState) -> Result<Box<dyn Profile>>;

#[derive(Debug, Clone, Copy)]
pub struct ModuleDescriptor {
    pub build: BuildProfileFn,
    pub name: &'static str,
    pub version: u32,
}

impl ModuleDescriptor {
    /// Create a new, still disabled instance with the given identity.
    pub fn create(&self, instance_id: i32, service_id: i32) -> Result<Box<dyn Profile>> {
        (self.build)(ProfileState::new(instance_id, service_id))
    }
}

#[derive(Debug, Default, Clone)]
pub struct ModuleRegistry {
    modules: BTreeMap<&'static str, ModuleDescriptor>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        ModuleRegistry {
            modules: BTreeMap::new(),
        }
    }

    /// Registry holding every profile module compiled into the host.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .modules
            .insert(specific_profile::DESCRIPTOR.name, specific_profile::DESCRIPTOR);
        registry
    }

    pub fn register(&mut self, descriptor: ModuleDescriptor) -> Result<()> {
        if self.modules.contains_key(descriptor.name) {
            return Err(ProfileError::AlreadyRegistered(descriptor.name));
        }
        self.modules.insert(descriptor.name, descriptor);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<ModuleDescriptor> {
        self.modules
            .get(name)
            .copied()
            .ok_or_else(|| ProfileError::NotRegistered(name.to_string()))
    }

    /// Resolve without a name: valid only while exactly one module is registered.
    pub fn resolve_sole(&self) -> Result<ModuleDescriptor> {
        let mut descriptors = self.modules.values();
        match (descriptors.next(), descriptors.next()) {
            (Some(descriptor), None) => Ok(*descriptor),
            (None, _) => Err(ProfileError::NoProfilesRegistered),
            (Some(_), Some(_)) => Err(ProfileError::AmbiguousProfile(self.names())),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.modules.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
