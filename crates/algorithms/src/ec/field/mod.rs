//! Generic prime-field arithmetic in Montgomery form
//!
//! A field is described by a zero-sized type implementing [`FieldParams`]
//! over `N` little-endian `u32` limbs. Only the modulus has to be written
//! down; the Montgomery constants are derived from it by `const fn`
//! evaluation when the field is first used.
//!
//! Elements are held as `a·R mod p` with `R = 2^(32·N)`. Every operation
//! returns a fully reduced representative, so the limb arrays of equal
//! elements are identical and equality is a plain limb comparison.
//!
//! All operations are branch-free with respect to element values. The only
//! data-dependent control flow is in [`FieldElement::pow`], which branches on
//! bits of the exponent; callers only pass public exponents.

use core::fmt;
use core::marker::PhantomData;

use keycurve_internal::endian::{
    limbs_from_be_bytes, limbs_from_le_bytes, limbs_to_be_bytes, limbs_to_le_bytes,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// Compile-time description of a prime field with `N` limbs
pub trait FieldParams<const N: usize>: 'static {
    /// Odd prime modulus, little-endian limbs
    const MODULUS: [u32; N];

    /// Human-readable field name
    const NAME: &'static str;

    /// `R mod p` with `R = 2^(32·N)`: the Montgomery form of one
    const R: [u32; N] = pow2_mod::<N>(&Self::MODULUS, 32 * N);

    /// `R² mod p`, used to move values into Montgomery form
    const R2: [u32; N] = pow2_mod::<N>(&Self::MODULUS, 64 * N);

    /// `−p⁻¹ mod 2³²`
    const M0: u32 = neg_inv_u32(Self::MODULUS[0]);

    /// `p − 2`, the Fermat inversion exponent
    const P_MINUS_2: [u32; N] = sub_small::<N>(&Self::MODULUS, 2);
}

/* ------------------------------------------------------------------------ */
/*  Compile-time helpers for deriving field constants                       */
/* ------------------------------------------------------------------------ */

/// `a < b` on little-endian limbs
const fn const_lt<const N: usize>(a: &[u32; N], b: &[u32; N]) -> bool {
    let mut i = N;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

/// `a − b mod 2^(32·N)`
const fn const_sub<const N: usize>(a: &[u32; N], b: &[u32; N]) -> [u32; N] {
    let mut r = [0u32; N];
    let mut borrow = 0u64;
    let mut i = 0;
    while i < N {
        let d = (a[i] as u64)
            .wrapping_sub(b[i] as u64)
            .wrapping_sub(borrow);
        r[i] = d as u32;
        borrow = (d >> 63) & 1;
        i += 1;
    }
    r
}

/// `2^k mod p` by repeated modular doubling
pub const fn pow2_mod<const N: usize>(p: &[u32; N], k: usize) -> [u32; N] {
    let mut x = [0u32; N];
    x[0] = 1;
    let mut i = 0;
    while i < k {
        let mut carry = 0u32;
        let mut j = 0;
        while j < N {
            let next = x[j] >> 31;
            x[j] = (x[j] << 1) | carry;
            carry = next;
            j += 1;
        }
        if carry == 1 || !const_lt(&x, p) {
            x = const_sub(&x, p);
        }
        i += 1;
    }
    x
}

/// `−x⁻¹ mod 2³²` for odd `x`
///
/// Newton iteration: `x` is its own inverse modulo 8, and each step doubles
/// the number of correct low bits (3, 6, 12, 24, 48).
pub const fn neg_inv_u32(x: u32) -> u32 {
    let mut inv = x;
    let mut i = 0;
    while i < 4 {
        inv = inv.wrapping_mul(2u32.wrapping_sub(x.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

/// `a − s` for a small `s`, propagating the borrow
pub const fn sub_small<const N: usize>(a: &[u32; N], s: u32) -> [u32; N] {
    let mut b = [0u32; N];
    b[0] = s;
    const_sub(a, &b)
}

/* ------------------------------------------------------------------------ */
/*  Runtime limb helpers                                                    */
/* ------------------------------------------------------------------------ */

/// Add with carry: returns `(a + b mod 2^(32·N), carry)`
#[inline(always)]
fn adc<const N: usize>(a: &[u32; N], b: &[u32; N]) -> ([u32; N], u32) {
    let mut r = [0u32; N];
    let mut carry = 0u64;
    for i in 0..N {
        let s = a[i] as u64 + b[i] as u64 + carry;
        r[i] = s as u32;
        carry = s >> 32;
    }
    (r, carry as u32)
}

/// Subtract with borrow: returns `(a − b mod 2^(32·N), borrow)`
#[inline(always)]
fn sbb<const N: usize>(a: &[u32; N], b: &[u32; N]) -> ([u32; N], u32) {
    let mut r = [0u32; N];
    let mut borrow = 0u64;
    for i in 0..N {
        let d = (a[i] as u64)
            .wrapping_sub(b[i] as u64)
            .wrapping_sub(borrow);
        r[i] = d as u32;
        borrow = (d >> 63) & 1;
    }
    (r, borrow as u32)
}

#[inline(always)]
fn select_limbs<const N: usize>(a: &[u32; N], b: &[u32; N], choice: Choice) -> [u32; N] {
    let mut r = [0u32; N];
    for i in 0..N {
        r[i] = u32::conditional_select(&a[i], &b[i], choice);
    }
    r
}

/// Element of the prime field described by `F`
pub struct FieldElement<F: FieldParams<N>, const N: usize> {
    /// Montgomery form, always `< p`
    limbs: [u32; N],
    _field: PhantomData<fn() -> F>,
}

impl<F: FieldParams<N>, const N: usize> Clone for FieldElement<F, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FieldParams<N>, const N: usize> Copy for FieldElement<F, N> {}

impl<F: FieldParams<N>, const N: usize> FieldElement<F, N> {
    #[inline(always)]
    const fn from_montgomery(limbs: [u32; N]) -> Self {
        Self {
            limbs,
            _field: PhantomData,
        }
    }

    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        Self::from_montgomery([0u32; N])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        Self::from_montgomery(F::R)
    }

    /// Build a field element from a small literal
    pub fn from_u32(n: u32) -> Self {
        let mut raw = [0u32; N];
        raw[0] = n;
        Self::from_raw_limbs(&raw)
    }

    /// Convert plain little-endian limbs into Montgomery form, reducing mod p
    ///
    /// Valid for any value below `2^(32·N)`.
    #[inline]
    fn from_raw_limbs(raw: &[u32; N]) -> Self {
        Self::from_montgomery(Self::mont_mul(raw, &F::R2))
    }

    /// Decode a little-endian byte string of at most `4·N` bytes, reducing mod p
    pub fn from_le_bytes_reduced(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= 4 * N);
        Self::from_raw_limbs(&limbs_from_le_bytes::<N>(bytes))
    }

    /// Decode a big-endian byte string of at most `4·N` bytes, reducing mod p
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= 4 * N);
        Self::from_raw_limbs(&limbs_from_be_bytes::<N>(bytes))
    }

    /// Decode a big-endian byte string, rejecting values `≥ p`
    ///
    /// The check is constant time; the result is `None` for non-canonical
    /// encodings.
    pub fn from_be_bytes_canonical(bytes: &[u8]) -> CtOption<Self> {
        debug_assert!(bytes.len() <= 4 * N);
        let raw = limbs_from_be_bytes::<N>(bytes);
        let (_, borrow) = sbb(&raw, &F::MODULUS);
        CtOption::new(Self::from_raw_limbs(&raw), Choice::from(borrow as u8))
    }

    /// Canonical integer value as little-endian limbs
    #[inline]
    fn to_raw_limbs(self) -> [u32; N] {
        let mut one = [0u32; N];
        one[0] = 1;
        Self::mont_mul(&self.limbs, &one)
    }

    /// Canonical little-endian encoding; `B` must equal `4·N`
    pub fn to_le_bytes<const B: usize>(&self) -> [u8; B] {
        debug_assert_eq!(B, 4 * N);
        let mut out = [0u8; B];
        limbs_to_le_bytes(&self.to_raw_limbs(), &mut out);
        out
    }

    /// Canonical big-endian encoding; `B` must equal `4·N`
    pub fn to_be_bytes<const B: usize>(&self) -> [u8; B] {
        debug_assert_eq!(B, 4 * N);
        let mut out = [0u8; B];
        limbs_to_be_bytes(&self.to_raw_limbs(), &mut out);
        out
    }

    /// Returns 1 if the element is zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        let acc = self.limbs.iter().fold(0u32, |acc, &l| acc | l);
        acc.ct_eq(&0)
    }

    /// (self + other) mod p
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc(&self.limbs, &other.limbs);
        let (reduced, borrow) = sbb(&sum, &F::MODULUS);
        // Subtract p if the sum overflowed or is still ≥ p
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        Self::from_montgomery(select_limbs(&sum, &reduced, Choice::from(need_reduce as u8)))
    }

    /// (self − other) mod p
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb(&self.limbs, &other.limbs);
        let (fixed, _) = adc(&diff, &F::MODULUS);
        Self::from_montgomery(select_limbs(&diff, &fixed, Choice::from(borrow as u8)))
    }

    /// −self mod p
    #[inline]
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// 2·self mod p
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// (self · other) mod p
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_montgomery(Self::mont_mul(&self.limbs, &other.limbs))
    }

    /// self² mod p
    #[inline]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// self^exp mod p for a public exponent given as little-endian limbs
    ///
    /// Square-and-multiply, most significant bit first. Branches on the
    /// exponent bits, so `exp` must not be secret.
    pub fn pow(&self, exp: &[u32; N]) -> Self {
        let mut result = Self::one();
        for i in (0..N).rev() {
            for bit in (0..32).rev() {
                result = result.square();
                if (exp[i] >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem: self^(p−2)
    ///
    /// The inverse of zero is zero.
    pub fn invert(&self) -> Self {
        self.pow(&F::P_MINUS_2)
    }

    /// Montgomery multiplication, CIOS variant: `a·b·R⁻¹ mod p`
    ///
    /// Requires `a < 2^(32·N)` and `b < p`; the result is then below `2p`
    /// before the final conditional subtraction, and below `p` after it.
    fn mont_mul(a: &[u32; N], b: &[u32; N]) -> [u32; N] {
        let p = &F::MODULUS;
        let mut t = [0u32; N];
        let mut t_hi = 0u32;

        for i in 0..N {
            // t += a · b[i]
            let bi = b[i] as u64;
            let mut carry = 0u64;
            for j in 0..N {
                let s = t[j] as u64 + (a[j] as u64) * bi + carry;
                t[j] = s as u32;
                carry = s >> 32;
            }
            let s = t_hi as u64 + carry;
            t_hi = s as u32;
            let t_top = (s >> 32) as u32;

            // t = (t + m·p) / 2³², with m chosen so the low word cancels
            let m = t[0].wrapping_mul(F::M0) as u64;
            let s = t[0] as u64 + m * (p[0] as u64);
            let mut carry = s >> 32;
            for j in 1..N {
                let s = t[j] as u64 + m * (p[j] as u64) + carry;
                t[j - 1] = s as u32;
                carry = s >> 32;
            }
            let s = t_hi as u64 + carry;
            t[N - 1] = s as u32;
            t_hi = t_top + (s >> 32) as u32;
        }

        let (reduced, borrow) = sbb(&t, p);
        let need_reduce = (t_hi | (borrow ^ 1)) & 1;
        select_limbs(&t, &reduced, Choice::from(need_reduce as u8))
    }
}

impl<F: FieldParams<N>, const N: usize> ConstantTimeEq for FieldElement<F, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl<F: FieldParams<N>, const N: usize> PartialEq for FieldElement<F, N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<F: FieldParams<N>, const N: usize> Eq for FieldElement<F, N> {}

impl<F: FieldParams<N>, const N: usize> ConditionallySelectable for FieldElement<F, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_montgomery(select_limbs(&a.limbs, &b.limbs, choice))
    }
}

impl<F: FieldParams<N>, const N: usize> Default for FieldElement<F, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: FieldParams<N>, const N: usize> Zeroize for FieldElement<F, N> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl<F: FieldParams<N>, const N: usize> fmt::Debug for FieldElement<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x", F::NAME)?;
        for limb in self.to_raw_limbs().iter().rev() {
            write!(f, "{:08x}", limb)?;
        }
        write!(f, ")")
    }
}
