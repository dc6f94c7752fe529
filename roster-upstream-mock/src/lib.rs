//! Roster Upstream Mock - stand-in for the upstream employee API
//!
//! Serves the `{status, data}` employee contract the facade consumes:
//! an in-memory seeded store, name-keyed deletion, and an optional
//! probabilistic throttle that answers 429 for a while once triggered.
//! Also mountable in-process for integration tests.

pub mod api;
pub mod store;
pub mod throttle;

pub use api::{MockState, router};
pub use store::EmployeeStore;
pub use throttle::{Throttle, ThrottleConfig};
