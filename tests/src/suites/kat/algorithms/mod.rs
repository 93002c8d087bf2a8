pub mod digest;
pub mod hmac;
pub mod kdf;
