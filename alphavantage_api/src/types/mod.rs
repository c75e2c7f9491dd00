mod transaction;
pub use self::transaction::{Envelope, RawInsiderTransaction};
