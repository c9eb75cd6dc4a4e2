//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.
//!
//! `Bool::If` is the only primitive. It is a two-entry table indexed by the
//! boolean itself: the `True` impl holds `Then`, the `False` impl holds
//! `Else`. Every other operator below is written in terms of it.

/// Type-level boolean.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level boolean",
    label = "expected `True` or `False`",
    note = "Boolean operators only accept `type_algebra::True` and `type_algebra::False`."
)]
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Same table as `If`, restricted to boolean payloads.
    /// The result is known to implement `Bool` in generic code.
    type Elif<Then: Bool, Else: Bool>: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;
}

/// Conditional select over arbitrary payload types.
pub type If<Cond, Then, Else> = <Cond as Bool>::If<Then, Else>;

// =============================================================================
// Derived operators
// =============================================================================

/// Type-level NOT.
pub trait BoolNot: Bool {
    type Out: Bool;
}

impl<A: Bool> BoolNot for A {
    type Out = A::Elif<False, True>;
}

/// Logical AND
pub trait BoolAnd<Other: Bool>: Bool {
    type Out: Bool;
}

impl<A: Bool, B: Bool> BoolAnd<B> for A {
    type Out = A::Elif<B::Elif<True, False>, False>;
}

/// Logical OR
pub trait BoolOr<Other: Bool>: Bool {
    type Out: Bool;
}

impl<A: Bool, B: Bool> BoolOr<B> for A {
    type Out = A::Elif<True, B::Elif<True, False>>;
}

/// Logical XOR, built from AND/OR/NOT.
pub trait BoolXor<Other: Bool>: Bool {
    type Out: Bool;
}

impl<A: Bool, B: Bool> BoolXor<B> for A {
    type Out = Or<And<A, Not<B>>, And<Not<A>, B>>;
}

/// Logical NAND
pub trait BoolNand<Other: Bool>: Bool {
    type Out: Bool;
}

impl<A: Bool, B: Bool> BoolNand<B> for A {
    type Out = Not<And<A, B>>;
}

pub type Not<A> = <A as BoolNot>::Out;
pub type And<A, B> = <A as BoolAnd<B>>::Out;
pub type Or<A, B> = <A as BoolOr<B>>::Out;
pub type Xor<A, B> = <A as BoolXor<B>>::Out;
pub type Nand<A, B> = <A as BoolNand<B>>::Out;

// =============================================================================
// Const bridge
// =============================================================================

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Type-level boolean for a `const bool`.
pub type Lift<const B: bool> = <() as SelectBool<B>>::Out;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_tables() {
        assert!(<Not<False> as Bool>::VALUE);
        assert!(!<Not<True> as Bool>::VALUE);

        assert!(<And<True, True> as Bool>::VALUE);
        assert!(!<And<True, False> as Bool>::VALUE);
        assert!(!<And<False, True> as Bool>::VALUE);
        assert!(!<And<False, False> as Bool>::VALUE);

        assert!(<Or<True, True> as Bool>::VALUE);
        assert!(<Or<True, False> as Bool>::VALUE);
        assert!(<Or<False, True> as Bool>::VALUE);
        assert!(!<Or<False, False> as Bool>::VALUE);
    }

    #[test]
    fn test_lift() {
        assert!(<Lift<true> as Bool>::VALUE);
        assert!(!<Lift<false> as Bool>::VALUE);
    }
}
