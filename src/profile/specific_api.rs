use crate::profile::capability::{BaseApi, Capability};

/// Operation set exposed by specific profiles.
pub trait SpecificApi: BaseApi {
    fn specific_method(&mut self);

    fn spec_meth_void_res(&mut self, a: i32);

    /// Integer part of `b`, truncated toward zero.
    fn spec_meth_int_res(&mut self, b: f64) -> i32;
}

impl Capability for dyn SpecificApi {
    const NAME: &'static str = "SpecificApi";

    fn narrow<'a>(api: &'a mut (dyn BaseApi + 'static)) -> Option<&'a mut Self> {
        api.specific_api()
    }
}
