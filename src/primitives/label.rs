//! String labels at the type level.
//!
//! A label is `Str<Nibbles>`, where `Nibbles` is a finite `NCons` list
//! holding the UTF-8 bytes of the string, high nibble first. The `label!`
//! macro builds these types from a string literal:
//!
//! ```text
//! label!("hi")  ->  Str<NCons<X6, NCons<X8, NCons<X6, NCons<X9, NNil>>>>>
//! ```
//!
//! Equality is decided nibble by nibble through `NibbleEq`, so two labels
//! compare equal exactly when their strings do.

use core::marker::PhantomData;
use super::bool::{And, Bool, False, True};
use super::nibble::{Nibble, NibbleEq};

/// End of a nibble list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NNil;

/// Nibble list cons cell.
pub struct NCons<H, T>(PhantomData<(H, T)>);

/// A string label.
pub struct Str<N>(PhantomData<N>);

/// Finite list of nibbles.
pub trait Nibbles: 'static {
    const LEN: usize;

    /// Calls `f` with each nibble value in order.
    fn each<F: FnMut(u8)>(f: &mut F);
}

impl Nibbles for NNil {
    const LEN: usize = 0;

    #[inline(always)]
    fn each<F: FnMut(u8)>(_f: &mut F) {}
}

impl<H: Nibble, T: Nibbles> Nibbles for NCons<H, T> {
    const LEN: usize = T::LEN + 1;

    #[inline(always)]
    fn each<F: FnMut(u8)>(f: &mut F) {
        f(H::VALUE);
        T::each(f);
    }
}

/// A type-level string label.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a label",
    label = "expected a label built with `label!(\"...\")`",
    note = "Set and record keys must be string labels."
)]
pub trait Label: 'static {
    /// Length of the label in bytes.
    const LEN: usize;

    /// Calls `f` with each UTF-8 byte of the label.
    fn write_bytes<F: FnMut(u8)>(f: F);

    /// The label as an owned string.
    #[cfg(feature = "alloc")]
    fn name() -> alloc::string::String {
        let mut bytes = alloc::vec::Vec::with_capacity(Self::LEN);
        Self::write_bytes(|b| bytes.push(b));
        alloc::string::String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl<N: Nibbles> Label for Str<N> {
    const LEN: usize = N::LEN / 2;

    fn write_bytes<F: FnMut(u8)>(mut f: F) {
        let mut high: Option<u8> = None;
        N::each(&mut |n| match high.take() {
            None => high = Some(n),
            Some(h) => f((h << 4) | n),
        });
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Compare two nibble lists.
pub trait NibblesEq<Other> {
    type Out: Bool;
}

impl NibblesEq<NNil> for NNil {
    type Out = True;
}

impl<H, T> NibblesEq<NCons<H, T>> for NNil {
    type Out = False;
}

impl<H, T> NibblesEq<NNil> for NCons<H, T> {
    type Out = False;
}

// Compare heads, then recurse on tails
impl<HA, TA, HB, TB> NibblesEq<NCons<HB, TB>> for NCons<HA, TA>
where
    HA: NibbleEq<HB>,
    HB: Nibble,
    TA: NibblesEq<TB>,
{
    type Out = And<<HA as NibbleEq<HB>>::Out, <TA as NibblesEq<TB>>::Out>;
}

/// Type-level label equality.
pub trait LabelEq<Other> {
    type Out: Bool;
}

impl<A, B> LabelEq<Str<B>> for Str<A>
where
    A: NibblesEq<B>,
{
    type Out = <A as NibblesEq<B>>::Out;
}
