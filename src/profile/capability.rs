//! Capability traits shared by the host and every profile module.
//!
//! A profile is reached through three independent layers: [`BaseProfile`]
//! hands its owner the generic [`BaseApi`] surface, [`Profile`] carries the
//! identity and enable state, and specific operation sets (see
//! [`crate::profile::specific_api`]) extend [`BaseApi`]. Concrete modules
//! implement all of them on one type.

use log::debug;
use std::any::Any;
use std::cell::Cell;

/// Lifecycle-owner capability.
pub trait BaseProfile {
    /// Generic handle the owning manager lends out to callers.
    fn api(&mut self) -> &mut (dyn BaseApi + 'static);
}

/// Generic, stateless dispatch surface of a profile.
pub trait BaseApi {
    /// Concrete-type escape hatch for hosts that know which module they
    /// loaded (diagnostics, tests). Dispatch never goes through it.
    fn as_any(&self) -> &dyn Any;

    /// Capability query for [`SpecificApi`](crate::profile::SpecificApi).
    ///
    /// Every operation set gets one such query here, defaulting to `None`;
    /// a module answers `Some(self)` for the sets it implements. A new
    /// operation set therefore means one new defaulted method on this trait,
    /// while existing modules and the manager stay untouched.
    fn specific_api(&mut self) -> Option<&mut (dyn crate::profile::SpecificApi + 'static)> {
        None
    }
}

/// An operation set a generic [`BaseApi`] handle can be narrowed to.
pub trait Capability {
    const NAME: &'static str;

    fn narrow<'a>(api: &'a mut (dyn BaseApi + 'static)) -> Option<&'a mut Self>;
}

/// Identity and mutable state of a profile instance.
///
/// Only the crate builds one (handed to a module's factory by
/// [`ModuleDescriptor::create`](crate::modules::registry::ModuleDescriptor::create)),
/// and only this module writes `enabled`. Modules can record errors.
///
/// ```compile_fail
/// let state = profile_host::profile::ProfileState::new(28, 42);
/// ```
#[derive(Debug)]
pub struct ProfileState {
    instance_id: i32,
    service_id: i32,
    error: Cell<i32>,
    enabled: Cell<bool>,
}

impl ProfileState {
    pub(crate) fn new(instance_id: i32, service_id: i32) -> Self {
        ProfileState {
            instance_id,
            service_id,
            error: Cell::new(0),
            enabled: Cell::new(false),
        }
    }

    pub fn instance_id(&self) -> i32 {
        self.instance_id
    }

    pub fn service_id(&self) -> i32 {
        self.service_id
    }

    pub fn error(&self) -> i32 {
        self.error.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Record a failure code; 0 clears it.
    pub fn set_error(&self, code: i32) {
        self.error.set(code);
    }
}

/// Profile capability: identity accessors plus the enable-change hook.
pub trait Profile: BaseProfile {
    fn state(&self) -> &ProfileState;

    /// Called by the owning manager after the enabled flag actually flipped.
    /// Must not try to change the enabled state again.
    fn on_enabled_change(&mut self, new_state: bool);

    fn instance_id(&self) -> i32 {
        self.state().instance_id()
    }

    fn service_id(&self) -> i32 {
        self.state().service_id()
    }

    fn last_error(&self) -> i32 {
        self.state().error()
    }

    fn is_enabled(&self) -> bool {
        self.state().is_enabled()
    }
}

/// Flip the enabled flag and notify the profile. Only the `profile` module
/// (where the manager lives) can drive this. Returns whether the state changed.
pub(super) fn set_enabled(profile: &mut dyn Profile, state: bool) -> bool {
    let enabled = &profile.state().enabled;
    if enabled.get() == state {
        return false;
    }
    enabled.set(state);
    debug!(
        "profile {}/{} enabled = {}",
        profile.instance_id(),
        profile.service_id(),
        state
    );
    profile.on_enabled_change(state);
    true
}
