//! Constants for hash functions and extendable-output functions

/// Output size of MD5 in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Internal block size of MD5 in bytes
pub const MD5_BLOCK_SIZE: usize = 64;

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Output size of SHA-224 and SHA-512/224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 and SHA-512/256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Internal block size of SHA-224/256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of the SHA-512 family in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Output size of RIPEMD-160 in bytes
pub const RIPEMD160_OUTPUT_SIZE: usize = 20;

/// Internal block size of RIPEMD-160 in bytes
pub const RIPEMD160_BLOCK_SIZE: usize = 64;

/// Output size of Whirlpool in bytes
pub const WHIRLPOOL_OUTPUT_SIZE: usize = 64;

/// Internal block size of Whirlpool in bytes
pub const WHIRLPOOL_BLOCK_SIZE: usize = 64;

/// Size of the Keccak-f[1600] state in bytes
pub const KECCAK_STATE_BYTES: usize = 200;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Sponge rate of SHA3-256 in bytes (1088 bits)
pub const SHA3_256_RATE: usize = 136;

/// Domain-separation suffix of the SHA-3 hash functions
pub const SHA3_SUFFIX: u8 = 0x06;

/// Sponge rate of SHAKE128 in bytes (1344 bits)
pub const SHAKE128_RATE: usize = 168;

/// Domain-separation suffix of the SHAKE functions
pub const SHAKE_SUFFIX: u8 = 0x1F;

/// Default SHAKE128 output length used when none is requested
pub const SHAKE128_DEFAULT_OUTPUT: usize = 32;

/// Largest single squeeze request accepted by the XOF API (16 MiB)
pub const MAX_XOF_OUTPUT: usize = 1 << 24;

/// Largest block size across all supported hash functions (SHA3-256 rate)
pub const MAX_HASH_BLOCK_SIZE: usize = SHA3_256_RATE;

/// Largest output size across all fixed-length hash functions
pub const MAX_HASH_OUTPUT_SIZE: usize = 64;
