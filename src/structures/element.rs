use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{FieldError, Result};
use crate::utils::is_prime;

/// `base^exp mod modulus`, with `x^0 = 1 mod modulus` for every `x` including zero.
fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if exp.is_zero() {
        return BigUint::one() % modulus;
    }
    base.modpow(exp, modulus)
}

/// An element of the prime field GF(p), where `p` is chosen at runtime.
///
/// Both the value and the order are arbitrary-precision, so the same type
/// covers toy fields like GF(31) and cryptographic ones like GF(2^255 - 19).
/// Every instance satisfies `0 <= value < order`; the constructor enforces it
/// and every operation reduces its result back into that range.
///
/// Elements are immutable. Two elements belong to the same field iff their
/// orders are equal, and binary operations across different fields fail with
/// [`FieldError::MismatchedField`].
///
/// The order is **not** checked for primality. Over a composite order, `+`,
/// `-` and `*` are still correct ring operations, but [`pow`](Self::pow) and
/// [`try_div`](Self::try_div) rely on Fermat's little theorem and silently
/// return meaningless results. Use [`order_is_prime`](Self::order_is_prime)
/// to validate an order up front.
///
/// # Example
///
/// ```
/// use primefield::FieldElement;
///
/// let a = FieldElement::new(25, 57)?;
/// let b = FieldElement::new(19, 57)?;
///
/// assert_eq!(a.try_add(&b)?, FieldElement::new(44, 57)?);
/// assert_eq!((&a * &b)?, FieldElement::new(19, 57)?);
/// # Ok::<(), primefield::FieldError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    order: BigUint,
}

impl FieldElement {
    /// Create the element `value` of the field of order `order`.
    ///
    /// Fails with [`FieldError::OutOfRange`] unless `0 <= value < order`.
    /// Out-of-range values are rejected, never reduced.
    pub fn new<V, O>(value: V, order: O) -> Result<Self>
    where
        V: Into<BigInt>,
        O: Into<BigInt>,
    {
        let value = value.into();
        let order = order.into();
        if value.is_negative() || value >= order {
            log::trace!("rejected field element {} for order {}", value, order);
            return Err(FieldError::OutOfRange { value, order });
        }
        // both are non-negative past the range check
        let (_, value) = value.into_parts();
        let (_, order) = order.into_parts();
        Ok(Self { value, order })
    }

    /// Wrap a value that is already reduced modulo `order`.
    #[inline]
    fn from_reduced(value: BigUint, order: BigUint) -> Self {
        debug_assert!(value < order);
        Self { value, order }
    }

    /// The additive identity of the field of order `order`.
    ///
    /// Fails when `order < 1`.
    pub fn zero<O: Into<BigInt>>(order: O) -> Result<Self> {
        Self::new(0, order)
    }

    /// The multiplicative identity of the field of order `order`.
    ///
    /// Fails when `order < 2`.
    pub fn one<O: Into<BigInt>>(order: O) -> Result<Self> {
        Self::new(1, order)
    }

    /// A uniformly random element of the field of order `order`.
    ///
    /// Fails with [`FieldError::OutOfRange`] when `order < 1`, since such a
    /// field has no elements.
    ///
    /// Requires the `rand` feature.
    #[cfg(feature = "rand")]
    pub fn random<O, R>(order: O, rng: &mut R) -> Result<Self>
    where
        O: Into<BigInt>,
        R: rand::Rng + ?Sized,
    {
        use num_bigint::RandBigInt;

        let order = order.into();
        if !order.is_positive() {
            log::trace!("cannot sample from empty field of order {}", order);
            return Err(FieldError::OutOfRange {
                value: BigInt::zero(),
                order,
            });
        }
        let (_, order) = order.into_parts();
        let value = rng.gen_biguint_below(&order);
        Ok(Self::from_reduced(value, order))
    }

    /// The representative in `[0, order)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The order of the field this element belongs to.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Whether this is the additive identity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the order is prime, i.e. whether this really is a field.
    ///
    /// See [`is_prime`] for the exact guarantees.
    pub fn order_is_prime(&self) -> bool {
        is_prime(&self.order)
    }

    fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.order != other.order {
            log::trace!(
                "field mismatch: order {} combined with order {}",
                self.order,
                other.order
            );
            return Err(FieldError::MismatchedField {
                expected: self.order.clone(),
                got: other.order.clone(),
            });
        }
        Ok(())
    }

    /// `(self + other) mod p`.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other)?;
        let sum = (&self.value + &other.value) % &self.order;
        Ok(Self::from_reduced(sum, self.order.clone()))
    }

    /// `(self - other) mod p`, always in `[0, p)`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other)?;
        let diff = if self.value >= other.value {
            &self.value - &other.value
        } else {
            // wrap around instead of going negative
            &self.order - &other.value + &self.value
        };
        Ok(Self::from_reduced(diff, self.order.clone()))
    }

    /// `(self * other) mod p`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other)?;
        let prod = (&self.value * &other.value) % &self.order;
        Ok(Self::from_reduced(prod, self.order.clone()))
    }

    /// Compute `self^exponent` for any integer exponent, negative included.
    ///
    /// The exponent is first reduced modulo `p - 1` (floored, so the result is
    /// never negative). For nonzero `a`, Fermat's little theorem gives
    /// `a^(p-1) = 1`, which is what makes `a^-1`, `a^-2`, ... meaningful.
    ///
    /// A reduced exponent of zero yields `1 mod p`. In particular `0^0 = 1`,
    /// and `0^(k(p-1)) = 1` as well, since the reduction happens before the
    /// base is looked at. Negative powers of zero likewise come out as plain
    /// powers of zero rather than an error.
    ///
    /// Over the one-element ring (`p = 1`) every power is `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use primefield::FieldElement;
    ///
    /// let a = FieldElement::new(3, 31)?;
    /// assert_eq!(a.pow(30), FieldElement::one(31)?); // Fermat
    /// assert_eq!(a.pow(-1).try_mul(&a)?, FieldElement::one(31)?);
    /// # Ok::<(), primefield::FieldError>(())
    /// ```
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Self {
        let exponent = exponent.into();
        let order_minus_one = BigInt::from(self.order.clone()) - BigInt::one();
        let reduced = if order_minus_one.is_zero() {
            BigUint::zero()
        } else {
            exponent.mod_floor(&order_minus_one).into_parts().1
        };
        let value = mod_pow(&self.value, &reduced, &self.order);
        Self::from_reduced(value, self.order.clone())
    }

    /// Multiplicative inverse `self^(p-2) mod p` by Fermat's little theorem.
    ///
    /// Fails with [`FieldError::DivisionByZero`] for the zero element.
    /// Only meaningful when the order is prime.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            log::trace!("zero has no inverse modulo {}", self.order);
            return Err(FieldError::DivisionByZero);
        }
        // a nonzero value forces order >= 2
        let exponent = &self.order - BigUint::from(2u32);
        let inv = mod_pow(&self.value, &exponent, &self.order);
        Ok(Self::from_reduced(inv, self.order.clone()))
    }

    /// `self * other^-1 mod p`.
    ///
    /// Fails with [`FieldError::MismatchedField`] first, then with
    /// [`FieldError::DivisionByZero`] when `other` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use primefield::{FieldElement, FieldError};
    ///
    /// let a = FieldElement::new(3, 31)?;
    /// let b = FieldElement::new(24, 31)?;
    /// assert_eq!(a.try_div(&b)?, FieldElement::new(4, 31)?); // 4 * 24 = 96 ≡ 3
    ///
    /// let zero = FieldElement::zero(31)?;
    /// assert_eq!(a.try_div(&zero), Err(FieldError::DivisionByZero));
    /// # Ok::<(), FieldError>(())
    /// ```
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other)?;
        let inv = other.inverse()?;
        self.try_mul(&inv)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement<{}>({})", self.order, self.value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.order)
    }
}

/* ---- serde: decimal strings, validated on the way in ---- */

#[cfg(feature = "serde")]
impl serde::Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldElement", 2)?;
        state.serialize_field("value", &self.value.to_str_radix(10))?;
        state.serialize_field("order", &self.order.to_str_radix(10))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Repr {
            value: String,
            order: String,
        }

        let repr = Repr::deserialize(deserializer)?;
        let value: BigInt = repr.value.parse().map_err(D::Error::custom)?;
        let order: BigInt = repr.order.parse().map_err(D::Error::custom)?;
        Self::new(value, order).map_err(D::Error::custom)
    }
}

/* ---- arithmetic operators ---- */
//
// Binary operators are fallible because the operands may come from different
// fields, so they all yield `Result<FieldElement>` and compose with `?`.

impl<'b> Add<&'b FieldElement> for &FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn add(self, rhs: &'b FieldElement) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Add for FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<'b> Sub<&'b FieldElement> for &FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn sub(self, rhs: &'b FieldElement) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl Sub for FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<'b> Mul<&'b FieldElement> for &FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn mul(self, rhs: &'b FieldElement) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl Mul for FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(&rhs)
    }
}

impl<'b> Div<&'b FieldElement> for &FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn div(self, rhs: &'b FieldElement) -> Self::Output {
        self.try_div(rhs)
    }
}

impl Div for FieldElement {
    type Output = Result<FieldElement>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(&rhs)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            self.clone()
        } else {
            FieldElement::from_reduced(&self.order - &self.value, self.order.clone())
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

/* ---- basic tests ---- */
