//! Uniform draws over a borrowed entropy stream.
//!
//! A [`UniformSource`] is a typed *view* over a `&mut R` where `R: Rng`.
//! It owns no state of its own: every draw advances the borrowed generator,
//! and [`UniformSource::cast`] re-borrows the same generator under another
//! numeric type. Interleaving `f64` and `usize` draws through casts therefore
//! consumes a single stream rather than two independent ones.
//!
//! The numeric types are a closed set (see [`Numeric`]); floating-point
//! helpers live behind [`Float`].
//!
//! Notes:
//! - There is no process-wide generator. Callers either pass their own RNG
//!   (seeded, for tests) or use [`with_thread_source`], which borrows
//!   `rand::rng()` for the current thread only.
//! - A view is `!Send` whenever `R` is, so the type system keeps a source on
//!   the thread that created it.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Neg};

use rand::distr::uniform::SampleUniform;
use rand::rngs::ThreadRng;
use rand::Rng;

mod sealed {
    pub trait Sealed {}
}

/// Numeric types a [`UniformSource`] can draw.
///
/// Sealed: implemented for `i32`, `i64`, `u32`, `u64`, `usize`, `f32`, `f64`.
pub trait Numeric: sealed::Sealed + Copy + PartialOrd + SampleUniform + fmt::Debug {
    /// Half-open draw in `[min, max)`.
    ///
    /// A degenerate range (`min >= max`, NaN or infinite float bounds)
    /// yields `min` instead of panicking.
    #[doc(hidden)]
    fn draw<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;
}

/// Floating-point members of [`Numeric`].
pub trait Float: Numeric + Add<Output = Self> + Neg<Output = Self> {
    const ZERO: Self;
    const HALF: Self;
    const ONE: Self;
    /// Distance from `1.0` to the next representable value.
    const EPSILON: Self;
}

macro_rules! impl_int {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Numeric for $t {
            #[inline]
            fn draw<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                if min >= max {
                    return min;
                }
                rng.random_range(min..max)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ident),*) => {$(
        impl sealed::Sealed for $t {}
        impl Numeric for $t {
            #[inline]
            fn draw<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                // `!(a < b)` also catches NaN.
                if !(min < max) || !(max - min).is_finite() {
                    return min;
                }
                rng.random_range(min..max)
            }
        }
        impl Float for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;
            const ONE: Self = 1.0;
            const EPSILON: Self = $t::EPSILON;
        }
    )*};
}

impl_int!(i32, i64, u32, u64, usize);
impl_float!(f32, f64);

/// A typed view over a borrowed uniform generator.
pub struct UniformSource<'a, T, R: ?Sized> {
    rng: &'a mut R,
    _kind: PhantomData<fn() -> T>,
}

impl<T, R: ?Sized> fmt::Debug for UniformSource<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformSource")
            .field("kind", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<'a, T: Numeric, R: Rng + ?Sized> UniformSource<'a, T, R> {
    /// Wrap a generator.
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            _kind: PhantomData,
        }
    }

    /// Uniform draw in `[min, max)`.
    ///
    /// `min >= max` is not an error: the draw degenerates to `min`.
    #[inline]
    pub fn next(&mut self, min: T, max: T) -> T {
        T::draw(self.rng, min, max)
    }

    /// Re-borrow the same generator as a source of another numeric type.
    #[inline]
    pub fn cast<U: Numeric>(&mut self) -> UniformSource<'_, U, R> {
        UniformSource::new(&mut *self.rng)
    }

    /// Like [`cast`](Self::cast), but keeps the original borrow.
    #[inline]
    pub fn into_cast<U: Numeric>(self) -> UniformSource<'a, U, R> {
        UniformSource::new(self.rng)
    }

    /// A uniform index in `[0, n)`, biased down by one ULP so it never lands on `n`.
    ///
    /// `dice(0)` is `0`.
    pub fn dice(&mut self, n: u32) -> u32 {
        roll(&mut self.cast::<f64>(), n)
    }

    /// Replace every entry `n` of `faces` with `dice(n)`, left to right.
    pub fn dice_many(&mut self, faces: &mut [u32]) {
        let mut unit = self.cast::<f64>();
        for n in faces.iter_mut() {
            *n = roll(&mut unit, *n);
        }
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    pub fn choose<'p, X>(&mut self, items: &'p [X]) -> Option<&'p X> {
        if items.is_empty() {
            return None;
        }
        let i = self.cast::<usize>().next(0, items.len());
        items.get(i)
    }
}

impl<T: Float, R: Rng + ?Sized> UniformSource<'_, T, R> {
    /// `-1` or `+1` with equal probability.
    ///
    /// Draws from `[-0.5, 0.5)`; a draw of exactly `0.0` maps to `+1`.
    pub fn sign(&mut self) -> T {
        if self.next(-T::HALF, T::HALF) < T::ZERO {
            -T::ONE
        } else {
            T::ONE
        }
    }

    /// Uniform draw in the closed interval `[0, 1]`.
    ///
    /// The upper bound handed to the half-open generator is `1 + EPSILON`,
    /// the next representable value above `1.0`, so `1.0` itself is
    /// reachable while nothing greater is.
    pub fn next01(&mut self) -> T {
        self.next(T::ZERO, T::ONE + T::EPSILON)
    }
}

fn roll<R: Rng + ?Sized>(unit: &mut UniformSource<'_, f64, R>, n: u32) -> u32 {
    let u = unit.next(0.0, 1.0);
    (u * f64::from(n) * (1.0 - f64::EPSILON)) as u32
}

/// Run `f` with a source borrowing this thread's `rand::rng()`.
///
/// The source lives only for the call; it is never shared across threads.
pub fn with_thread_source<T, O, F>(f: F) -> O
where
    T: Numeric,
    F: FnOnce(&mut UniformSource<'_, T, ThreadRng>) -> O,
{
    let mut rng = rand::rng();
    f(&mut UniformSource::new(&mut rng))
}
