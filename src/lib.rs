//! # Yoneda Lemma
//!
//! Yoneda's lemma, `Nat(Hom(X, -), F) ≅ F(X)`, encoded with Rust generics.
//!
//! This crate provides:
//! - **Morphisms**: [`Hom<X, Y>`], shareable pure functions with identity and composition
//! - **Functors**: the [`EndoFunctor`] trait with the sequence, constant,
//!   identity, composed and hom functors
//! - **Natural Transformations**: the [`NaturalTransformation`] trait and
//!   [`Length`], the transformation `Seq => Const`
//! - **Yoneda**: [`lift_y`] and [`lower_y`], the two directions of the lemma
//! - **Laws**: checkers for the functor, naturality and round-trip laws
//!
//! ## Example
//!
//! ```rust
//! use yoneda_lemma::{lift_y, lower_y, SeqFunctor};
//!
//! let lifted = lift_y::<i32, SeqFunctor>(vec![0, 1, 2]);
//! let recovered: Vec<i32> = lower_y(&lifted);
//! assert_eq!(recovered, vec![0, 1, 2]);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Static Contracts**: a functor without an object mapping, or with a
//!    mistyped `map`, does not compile
//! 2. **Purity**: morphisms are immutable shared closures with no side effects
//! 3. **Laws as Tests**: functor laws and naturality are checked, not assumed

#![warn(missing_docs)]

pub mod category;
mod errors;
mod verification;

pub use category::laws;
pub use category::{
    compose, identity, length, lift_y, lower_y, ComposedFunctor, ConstFunctor, EndoFunctor, Hom,
    HomFunctor, IdentityFunctor, IdentityTransformation, Length, LiftY, Mapped,
    NaturalTransformation, SeqFunctor, VerticalComposition,
};
pub use errors::{LawResult, LawViolation};
pub use verification::{sample_input, stringify, verify, verify_with, VerificationReport};
