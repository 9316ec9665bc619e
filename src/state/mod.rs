mod persistence;
mod session;

pub use persistence::{load_catalog, load_profile, save_catalog};
pub use session::{Computation, Session};
