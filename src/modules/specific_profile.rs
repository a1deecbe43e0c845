//! Built-in profile implementing [`SpecificApi`].

use crate::error::Result;
use crate::modules::registry::ModuleDescriptor;
use crate::profile::{BaseApi, BaseProfile, Profile, ProfileState, SpecificApi};
use log::{info, warn};
use std::any::Any;

/// Recorded when `spec_meth_int_res` gets a value with no `i32` integer part.
pub const ERR_OUT_OF_RANGE: i32 = 1;

pub const DESCRIPTOR: ModuleDescriptor = ModuleDescriptor {
    build: build_profile,
    name: "SpecificProfile",
    version: 9000,
};

fn build_profile(state: ProfileState) -> Result<Box<dyn Profile>> {
    Ok(Box::new(SpecificProfile::new(state)))
}

#[derive(Debug)]
pub struct SpecificProfile {
    state: ProfileState,
    channel_open: bool,
    enable_notifications: u32,
}

impl SpecificProfile {
    pub fn new(state: ProfileState) -> Self {
        SpecificProfile {
            state,
            channel_open: false,
            enable_notifications: 0,
        }
    }

    pub fn is_channel_open(&self) -> bool {
        self.channel_open
    }

    /// Number of `on_enabled_change` calls received so far.
    pub fn enable_notifications(&self) -> u32 {
        self.enable_notifications
    }
}

impl BaseProfile for SpecificProfile {
    fn api(&mut self) -> &mut (dyn BaseApi + 'static) {
        self
    }
}

impl Profile for SpecificProfile {
    fn state(&self) -> &ProfileState {
        &self.state
    }

    fn on_enabled_change(&mut self, new_state: bool) {
        info!("SpecificProfile::on_enabled_change new state = {}", new_state);
        self.enable_notifications += 1;
        self.channel_open = new_state;
    }
}

impl BaseApi for SpecificProfile {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn specific_api(&mut self) -> Option<&mut (dyn SpecificApi + 'static)> {
        Some(self)
    }
}

impl SpecificApi for SpecificProfile {
    fn specific_method(&mut self) {
        info!("SpecificProfile::specific_method");
    }

    fn spec_meth_void_res(&mut self, a: i32) {
        info!("SpecificProfile::spec_meth_void_res a = {}", a);
    }

    fn spec_meth_int_res(&mut self, b: f64) -> i32 {
        info!("SpecificProfile::spec_meth_int_res b = {}", b);
        let truncated = b.trunc();
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&truncated) {
            warn!("spec_meth_int_res: {} has no i32 integer part", b);
            self.state.set_error(ERR_OUT_OF_RANGE);
        }
        // `as` saturates and maps NaN to 0.
        truncated as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_res_truncates_toward_zero() {
        let mut profile = SpecificProfile::new(ProfileState::new(28, 42));
        assert_eq!(profile.spec_meth_int_res(100.345), 100);
        assert_eq!(profile.spec_meth_int_res(-7.9), -7);
        assert_eq!(profile.last_error(), 0);
    }

    #[test]
    fn test_int_res_out_of_range_records_error() {
        let mut profile = SpecificProfile::new(ProfileState::new(28, 42));
        assert_eq!(profile.spec_meth_int_res(1e12), i32::MAX);
        assert_eq!(profile.last_error(), ERR_OUT_OF_RANGE);

        let mut profile = SpecificProfile::new(ProfileState::new(28, 42));
        assert_eq!(profile.spec_meth_int_res(f64::NAN), 0);
        assert_eq!(profile.last_error(), ERR_OUT_OF_RANGE);
    }

    #[test]
    fn test_factory_yields_fresh_disabled_instances() {
        let first = DESCRIPTOR.create(1, 2).expect("create");
        let second = DESCRIPTOR.create(3, 4).expect("create");
        assert!(!first.is_enabled());
        assert_eq!((first.instance_id(), first.service_id()), (1, 2));
        assert_eq!((second.instance_id(), second.service_id()), (3, 4));
    }

    #[test]
    fn test_enable_hook_opens_channel() {
        let mut profile = SpecificProfile::new(ProfileState::new(28, 42));
        profile.on_enabled_change(true);
        assert!(profile.is_channel_open());
        assert_eq!(profile.enable_notifications(), 1);
    }
}
