//! Domain ports for the hexagonal boundary.

mod identity_provisioner;
mod user_store;

#[cfg(test)]
pub use identity_provisioner::MockIdentityProvisioner;
pub use identity_provisioner::{FixtureIdentityProvisioner, IdentityProvisioner};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;
