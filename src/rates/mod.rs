pub mod lookup;

pub use lookup::{RateClient, SUPPORTED_COUNTRIES};
