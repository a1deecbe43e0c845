use crate::error::{ProfileError, Result};
use crate::profile::{Capability, ProfileManager};
use log::warn;

/// Façade over a [`ProfileManager`] that forwards calls to one operation set.
///
/// Implementors only supply the manager; every call goes through
/// [`dispatch`](Handler::dispatch): borrow a handle, narrow it to `C`, run the
/// operation, release the borrow.
pub trait Handler {
    fn manager(&self) -> &ProfileManager;

    fn dispatch<C, R>(&self, op: impl FnOnce(&mut C) -> R) -> Result<R>
    where
        C: Capability + ?Sized,
    {
        let pm = self.manager();
        let mut handle = pm.get_handle().ok_or(ProfileError::NoActiveProfile)?;
        let outcome = handle.narrow::<C>().map(op);
        drop(handle);
        pm.release_handle();
        outcome
    }

    /// [`dispatch`](Handler::dispatch) with failures logged and folded into `None`.
    fn call<C, R>(&self, op_name: &str, op: impl FnOnce(&mut C) -> R) -> Option<R>
    where
        C: Capability + ?Sized,
    {
        match self.dispatch::<C, R>(op) {
            Ok(result) => Some(result),
            Err(err) => {
                warn!("{} failed: {}", op_name, err);
                None
            }
        }
    }
}
