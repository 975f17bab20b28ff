//! Hashing utilities for determinism checks.
//!
//! Uses FNV-1a over the bit patterns of every value. These hashes are not
//! cryptographically secure; they exist so two runs can be compared
//! without keeping both states around.

use ripple_space::ScalarField;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn fnv1a_values(mut hash: u64, values: &[f32]) -> u64 {
    for &v in values {
        hash = fnv1a_u32(hash, v.to_bits());
    }
    hash
}

/// Hash a field's dimensions and every value's bits.
///
/// Fields of different shape never share a hash by construction of the
/// input stream, and `0.0` and `-0.0` hash differently.
pub fn field_hash(field: &ScalarField) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, field.width());
    hash = fnv1a_u32(hash, field.height());
    fnv1a_values(hash, field.as_slice())
}

/// Hash a field together with a law's auxiliary state.
///
/// The auxiliary length is folded in at the boundary so moving a value
/// between the two sequences changes the hash.
pub fn state_hash(field: &ScalarField, auxiliary: &[f32]) -> u64 {
    let hash = fnv1a_u32(field_hash(field), auxiliary.len() as u32);
    fnv1a_values(hash, auxiliary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_fields_hash_equal() {
        let mut a = ScalarField::new(4, 3);
        let mut b = ScalarField::new(4, 3);
        a.set(1, 1, 0.5);
        b.set(1, 1, 0.5);
        assert_eq!(field_hash(&a), field_hash(&b));
    }

    #[test]
    fn any_change_alters_hash() {
        let a = ScalarField::new(4, 3);
        let mut b = a.clone();
        b.set(3, 2, f32::EPSILON);
        assert_ne!(field_hash(&a), field_hash(&b));
    }

    #[test]
    fn shape_is_part_of_hash() {
        assert_ne!(
            field_hash(&ScalarField::new(4, 3)),
            field_hash(&ScalarField::new(3, 4))
        );
    }

    #[test]
    fn negative_zero_is_distinct() {
        let a = ScalarField::new(1, 1);
        let mut b = a.clone();
        b.set(0, 0, -0.0);
        assert_ne!(field_hash(&a), field_hash(&b));
    }

    #[test]
    fn auxiliary_state_is_hashed() {
        let field = ScalarField::new(2, 2);
        assert_ne!(state_hash(&field, &[]), field_hash(&field));
        assert_ne!(state_hash(&field, &[0.0]), state_hash(&field, &[1.0]));
    }
}
