use crate::handler_trait::Handler;
use crate::profile::{ProfileManager, SpecificApi};

/// Forwards [`SpecificApi`] calls to whatever profile the manager owns.
pub struct SpecificHandler<'a> {
    pm: &'a ProfileManager,
}

impl<'a> SpecificHandler<'a> {
    pub fn new(pm: &'a ProfileManager) -> Self {
        SpecificHandler { pm }
    }

    pub fn specific_method(&self) -> bool {
        self.call::<dyn SpecificApi, _>("specific_method", |api| api.specific_method())
            .is_some()
    }

    pub fn spec_meth_void_res(&self, a: i32) -> bool {
        self.call::<dyn SpecificApi, _>("spec_meth_void_res", |api| api.spec_meth_void_res(a))
            .is_some()
    }

    pub fn spec_meth_int_res(&self, b: f64) -> Option<i32> {
        self.call::<dyn SpecificApi, _>("spec_meth_int_res", |api| api.spec_meth_int_res(b))
    }
}

impl Handler for SpecificHandler<'_> {
    fn manager(&self) -> &ProfileManager {
        self.pm
    }
}
