//! FNV-1 hashing over the byte representation of keys.
//!
//! Hash-based collections in this crate don't use [`std::hash::Hash`]. Keys instead implement
//! [`ByteHash`], which feeds a canonical byte representation of the key into an [`Fnv1Hasher`].
//! Floats implement [`ByteHash`] (hashing their bit pattern) even though they can't implement
//! [`Hash`](std::hash::Hash).

use std::hash::Hasher;

use crate::collections::contiguous::{FixedArray, Vector};

/// The 32-bit FNV offset basis, the starting state of every hash.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// The 32-bit FNV prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hashes `bytes` with 32-bit FNV-1.
///
/// # Examples
/// ```
/// # use probe_collections::collections::hash::{fnv1, FNV_OFFSET_BASIS};
/// assert_eq!(fnv1(b""), FNV_OFFSET_BASIS);
/// assert_eq!(fnv1(b"a"), 0x050c_5d7e);
/// ```
pub const fn fnv1(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;

    while i < bytes.len() {
        hash = hash.wrapping_mul(FNV_PRIME) ^ bytes[i] as u32;
        i += 1;
    }

    hash
}

/// An incremental 32-bit FNV-1 hasher. Each byte first multiplies the state by [`FNV_PRIME`] and is
/// then XORed into it.
///
/// Feeding bytes in several calls produces the same hash as feeding them all at once. The hasher
/// also implements [`Hasher`], so a type implementing [`Hash`](std::hash::Hash) can implement
/// [`ByteHash`] by forwarding to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1Hasher {
    state: u32,
}

impl Fnv1Hasher {
    /// Creates a new hasher with the state set to [`FNV_OFFSET_BASIS`].
    pub const fn new() -> Fnv1Hasher {
        Fnv1Hasher {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Feeds `bytes` into the hasher.
    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;

        while i < bytes.len() {
            self.state = self.state.wrapping_mul(FNV_PRIME) ^ bytes[i] as u32;
            i += 1;
        }
    }

    /// Returns the hash of every byte fed so far.
    pub const fn finish_u32(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv1Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1Hasher {
    fn finish(&self) -> u64 {
        self.state as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// A type which can be hashed from its byte representation, making it usable as a key in a
/// [`HashMap`](super::HashMap) or [`HashSet`](super::HashSet).
///
/// Two keys that compare equal must write the same bytes. Borrowed forms of a key (such as `str`
/// for `String`) must write the same bytes as the owned key.
pub trait ByteHash {
    /// Feeds the bytes representing self into `state`.
    fn write_bytes(&self, state: &mut Fnv1Hasher);

    /// Returns the FNV-1 hash of the bytes written by [`ByteHash::write_bytes`].
    fn byte_hash(&self) -> u32 {
        let mut state = Fnv1Hasher::new();
        self.write_bytes(&mut state);
        state.finish_u32()
    }
}

macro_rules! impl_byte_hash_le {
    ($($ty:ty),*) => {
        $(
            impl ByteHash for $ty {
                fn write_bytes(&self, state: &mut Fnv1Hasher) {
                    state.update(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_byte_hash_le!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ByteHash for f32 {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        state.update(&self.to_bits().to_le_bytes());
    }
}

impl ByteHash for f64 {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        state.update(&self.to_bits().to_le_bytes());
    }
}

impl ByteHash for bool {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        state.update(&[*self as u8]);
    }
}

impl ByteHash for char {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        (*self as u32).write_bytes(state);
    }
}

impl ByteHash for () {
    fn write_bytes(&self, _state: &mut Fnv1Hasher) {}
}

impl ByteHash for str {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        state.update(self.as_bytes());
    }
}

impl ByteHash for String {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        self.as_str().write_bytes(state);
    }
}

impl<T: ByteHash> ByteHash for [T] {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        for item in self {
            item.write_bytes(state);
        }
    }
}

impl<T: ByteHash, const N: usize> ByteHash for [T; N] {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        self.as_slice().write_bytes(state);
    }
}

impl<T: ByteHash, const N: usize> ByteHash for FixedArray<T, N> {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        (**self).write_bytes(state);
    }
}

impl<T: ByteHash> ByteHash for Vector<T> {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        (**self).write_bytes(state);
    }
}

impl<T: ByteHash + ?Sized> ByteHash for &T {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        (**self).write_bytes(state);
    }

    fn byte_hash(&self) -> u32 {
        (**self).byte_hash()
    }
}

impl<T: ByteHash + ?Sized> ByteHash for Box<T> {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        (**self).write_bytes(state);
    }

    fn byte_hash(&self) -> u32 {
        (**self).byte_hash()
    }
}

macro_rules! impl_byte_hash_tuple {
    ($($name:ident),+) => {
        impl<$($name: ByteHash),+> ByteHash for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write_bytes(&self, state: &mut Fnv1Hasher) {
                let ($($name,)+) = self;
                $($name.write_bytes(state);)+
            }
        }
    };
}

impl_byte_hash_tuple!(A);
impl_byte_hash_tuple!(A, B);
impl_byte_hash_tuple!(A, B, C);
impl_byte_hash_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(fnv1(b""), FNV_OFFSET_BASIS, "Empty input should hash to the offset basis.");
        assert_eq!(fnv1(b"a"), 0x050c_5d7e);
        assert_eq!(fnv1(b"foobar"), 0x31f0_b262);
        assert_eq!(1.5_f32.byte_hash(), 0x0b95_906a, "Floats should hash their bit pattern.");
        assert_eq!(10_u32.byte_hash(), 0xd692_f427, "Integers should hash their LE bytes.");
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut state = Fnv1Hasher::new();
        state.update(b"foo");
        state.update(b"");
        state.update(b"bar");
        assert_eq!(state.finish_u32(), fnv1(b"foobar"));
        assert_eq!(Hasher::finish(&state), fnv1(b"foobar") as u64);
    }

    #[test]
    fn test_borrowed_forms_agree() {
        let owned = String::from("key");
        assert_eq!(owned.byte_hash(), "key".byte_hash());
        assert_eq!((&owned).byte_hash(), owned.byte_hash());
        assert_eq!(Box::new(7_u64).byte_hash(), 7_u64.byte_hash());
        assert_eq!(
            Vector::from([1_u8, 2, 3]).byte_hash(),
            [1_u8, 2, 3].byte_hash(),
            "Contiguous collections should hash like their slices."
        );
        assert_eq!((1_u8, 2_u8).byte_hash(), fnv1(&[1, 2]));
        assert_eq!(().byte_hash(), FNV_OFFSET_BASIS);
    }
}
