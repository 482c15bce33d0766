pub mod aggregate;
pub mod pairing;
