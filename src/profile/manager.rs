//! Owner of the active profile instance.
//!
//! The manager resolves a descriptor, creates and enables the instance, and
//! then only ever lends it out as a [`ProfileHandle`]. Handles are scoped
//! `RefCell` borrows, so an instance can't be killed while a call is using it.

use crate::config::Config;
use crate::error::{ProfileError, Result};
use crate::modules::registry::{ModuleDescriptor, ModuleRegistry};
use crate::profile::capability::{set_enabled, BaseApi, Capability, Profile};
use log::{debug, error, info, warn};
use std::cell::{Cell, RefCell, RefMut};

pub struct ProfileManager {
    descriptor: ModuleDescriptor,
    slot: RefCell<Option<Box<dyn Profile>>>,
    outstanding: Cell<usize>,
}

impl ProfileManager {
    /// Resolve the configured profile, create it with the configured identity
    /// and enable it.
    pub fn new(registry: &ModuleRegistry, config: &Config) -> Result<Self> {
        debug!("constructing profile manager");
        let descriptor = match config.profile.as_deref() {
            Some(name) => registry.resolve(name)?,
            None => registry.resolve_sole()?,
        };
        Self::with_descriptor(descriptor, config.instance_id, config.service_id)
    }

    pub fn with_descriptor(
        descriptor: ModuleDescriptor,
        instance_id: i32,
        service_id: i32,
    ) -> Result<Self> {
        info!("loading profile");
        info!("name:    {}", descriptor.name);
        info!("version: {}", descriptor.version);

        let mut profile = descriptor.create(instance_id, service_id)?;
        set_enabled(profile.as_mut(), true);

        Ok(ProfileManager {
            descriptor,
            slot: RefCell::new(Some(profile)),
            outstanding: Cell::new(0),
        })
    }

    pub fn descriptor(&self) -> ModuleDescriptor {
        self.descriptor
    }

    pub fn has_instance(&self) -> bool {
        match self.slot.try_borrow() {
            Ok(slot) => slot.is_some(),
            // Only a live handle holds the slot, so an instance exists.
            Err(_) => true,
        }
    }

    /// Borrows not yet balanced by [`release_handle`](Self::release_handle).
    pub fn outstanding_borrows(&self) -> usize {
        self.outstanding.get()
    }

    /// Borrow the active instance. `None` once the instance has been killed,
    /// or while another handle is still alive.
    pub fn get_handle(&self) -> Option<ProfileHandle<'_>> {
        let slot = match self.slot.try_borrow_mut() {
            Ok(slot) => slot,
            Err(_) => {
                warn!(
                    "profile {} requested while another call holds it",
                    self.descriptor.name
                );
                return None;
            }
        };
        let profile = RefMut::filter_map(slot, |slot| slot.as_deref_mut()).ok()?;

        self.outstanding.set(self.outstanding.get() + 1);
        debug!(
            "borrowed profile {} ({} outstanding)",
            self.descriptor.name,
            self.outstanding.get()
        );
        Some(ProfileHandle {
            profile,
            name: self.descriptor.name,
        })
    }

    /// Balance one successful [`get_handle`](Self::get_handle).
    pub fn release_handle(&self) {
        match self.outstanding.get() {
            0 => warn!(
                "release of profile {} without a matching borrow",
                self.descriptor.name
            ),
            n => {
                self.outstanding.set(n - 1);
                debug!(
                    "released profile {} ({} outstanding)",
                    self.descriptor.name,
                    n - 1
                );
            }
        }
    }

    /// Destroy the owned instance. `Ok(false)` if there was none.
    pub fn kill_instance(&self) -> Result<bool> {
        let mut slot = self
            .slot
            .try_borrow_mut()
            .map_err(|_| ProfileError::InstanceBusy)?;
        let Some(profile) = slot.take() else {
            return Ok(false);
        };
        drop(slot);

        let unreleased = self.outstanding.replace(0);
        if unreleased != 0 {
            warn!(
                "killing profile {} with {} unreleased borrows",
                self.descriptor.name, unreleased
            );
        }
        info!(
            "killing profile {} (instance {}, service {})",
            self.descriptor.name,
            profile.instance_id(),
            profile.service_id()
        );
        drop(profile);
        Ok(true)
    }
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if let Err(err) = self.kill_instance() {
            error!("failed to kill profile on teardown: {}", err);
        }
    }
}

/// Scoped, non-owning borrow of the active profile.
pub struct ProfileHandle<'a> {
    profile: RefMut<'a, dyn Profile + 'static>,
    name: &'static str,
}

impl ProfileHandle<'_> {
    pub fn profile_name(&self) -> &'static str {
        self.name
    }

    pub fn instance_id(&self) -> i32 {
        self.profile.instance_id()
    }

    pub fn service_id(&self) -> i32 {
        self.profile.service_id()
    }

    pub fn is_enabled(&self) -> bool {
        self.profile.is_enabled()
    }

    pub fn last_error(&self) -> i32 {
        self.profile.last_error()
    }

    pub fn api(&mut self) -> &mut (dyn BaseApi + 'static) {
        self.profile.api()
    }

    /// Checked narrowing of the generic handle to the operation set `C`.
    pub fn narrow<C: Capability + ?Sized>(&mut self) -> Result<&mut C> {
        let profile = self.name;
        C::narrow(self.profile.api()).ok_or(ProfileError::CapabilityMismatch {
            capability: C::NAME,
            profile,
        })
    }
}
