//! Constants for key derivation

/// Default scrypt CPU/memory cost `N`
pub const SCRYPT_DEFAULT_N: u32 = 16_384;

/// Default scrypt block size factor `r`
pub const SCRYPT_DEFAULT_R: u32 = 8;

/// Default scrypt parallelisation factor `p`
pub const SCRYPT_DEFAULT_P: u32 = 1;

/// Default scrypt derived-key length in bytes
pub const SCRYPT_DEFAULT_OUTPUT: usize = 32;

/// Recommended scrypt salt length in bytes
pub const SCRYPT_SALT_SIZE: usize = 16;

/// Size in bytes of one Salsa20/8 block inside BlockMix
pub const SALSA_BLOCK_SIZE: usize = 64;

/// Default PBKDF2 derived-key length in bytes
pub const PBKDF2_DEFAULT_OUTPUT: usize = 32;

/// Recommended minimum PBKDF2 salt length in bytes
pub const PBKDF2_MIN_SALT_SIZE: usize = 16;

/// Block size of the legacy XOR-chain password hash in bytes
pub const LEGACY_ARGON2_BLOCK_SIZE: usize = 4096;

/// Default memory cost of the legacy XOR-chain password hash, in bytes
pub const LEGACY_ARGON2_DEFAULT_MEMORY: u32 = 4096;

/// Default number of passes of the legacy XOR-chain password hash
pub const LEGACY_ARGON2_DEFAULT_TIME: u32 = 3;

/// Default (unused) lane count of the legacy XOR-chain password hash
pub const LEGACY_ARGON2_DEFAULT_PARALLELISM: u32 = 1;

/// Default output length of the legacy XOR-chain password hash
pub const LEGACY_ARGON2_DEFAULT_OUTPUT: usize = 32;

/// Salt length generated for the legacy XOR-chain password hash
pub const LEGACY_ARGON2_SALT_SIZE: usize = 16;

/// Size of the random salt produced by the salted-hash helpers, in bytes
pub const DEFAULT_SALT_SIZE: usize = 64;
