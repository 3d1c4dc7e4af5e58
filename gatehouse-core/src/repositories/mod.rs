//! Repository traits for the account store.
//!
//! The store itself is an external collaborator. These traits are the
//! interface this subsystem consumes; implementations must enforce email
//! uniqueness so concurrent registrations with the same address cannot both
//! succeed. No locking happens on this side.

mod account;

pub use account::AccountRepository;
