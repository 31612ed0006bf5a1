//! Category theory on Rust types
//!
//! Objects are types and morphisms are pure functions. Functors use a generic
//! associated type for their object mapping, so the capability contracts are
//! checked by the compiler; the algebraic laws are checked by [`laws`].

pub mod morphism;
pub mod functor;
pub mod natural_transformation;
pub mod yoneda;
pub mod laws;

pub use morphism::{compose, identity, Hom};
pub use functor::{ComposedFunctor, ConstFunctor, EndoFunctor, IdentityFunctor, Mapped, SeqFunctor};
pub use natural_transformation::{
    length, IdentityTransformation, Length, NaturalTransformation, VerticalComposition,
};
pub use yoneda::{lift_y, lower_y, HomFunctor, LiftY};
