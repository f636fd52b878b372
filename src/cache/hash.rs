//! Routing Hash
//!
//! djb2 string hash used to pick a shard for a key. Not collision
//! resistant; only use it for routing.

/// Seed value of the djb2 hash.
const DJB2_SEED: u64 = 5381;

/// Hashes the bytes of `key` with djb2 (`hash * 33 + byte`, wrapping).
#[inline]
pub fn djb2_hash(key: &str) -> u64 {
    key.bytes().fold(DJB2_SEED, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_hashes_to_seed() {
        assert_eq!(djb2_hash(""), 5381);
    }

    #[test]
    fn test_known_values() {
        // 5381 * 33 + 'a'
        assert_eq!(djb2_hash("a"), 177_670);
        // 177670 * 33 + 'b'
        assert_eq!(djb2_hash("ab"), 5_863_208);
    }

    #[test]
    fn test_matches_shift_add_form() {
        let key = "some fairly long key that will overflow a u64 several times over";
        let mut expected: u64 = 5381;
        for b in key.bytes() {
            expected = (expected << 5).wrapping_add(expected).wrapping_add(b as u64);
        }
        assert_eq!(djb2_hash(key), expected);
    }

    #[test]
    fn test_deterministic_and_distinguishing() {
        assert_eq!(djb2_hash("test"), djb2_hash("test"));
        assert_ne!(djb2_hash("test"), djb2_hash("different"));
    }
}
