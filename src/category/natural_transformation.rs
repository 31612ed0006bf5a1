// Copyright 2025 Cowboy AI, LLC.

//! Natural transformations between functors
//!
//! A natural transformation `η: F => G` is one conversion `η_X: F(X) -> G(X)`
//! per object `X`, written here as a single generic method. It must make the
//! naturality square commute for every `f: X -> Y`:
//!
//! ```text
//!   G.map(f) ∘ η_X == η_Y ∘ F.map(f)
//! ```

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use super::functor::{ConstFunctor, EndoFunctor, Mapped, SeqFunctor};
use super::morphism::Hom;

/// A natural transformation between two functors
pub trait NaturalTransformation {
    /// Source functor type
    type Source: EndoFunctor;

    /// Target functor type
    type Target: EndoFunctor;

    /// The component at `X`: turn an `F(X)` into a `G(X)`
    fn transform<X: 'static>(&self, fx: Mapped<Self::Source, X>) -> Mapped<Self::Target, X>;

    /// Get a description of this transformation
    fn description(&self) -> String;

    /// The component at `X` as a morphism value
    fn component<X: 'static>(&self) -> Hom<Mapped<Self::Source, X>, Mapped<Self::Target, X>>
    where
        Self: Clone + Send + Sync + 'static,
    {
        let eta = self.clone();
        Hom::new(move |fx: Mapped<Self::Source, X>| eta.transform::<X>(fx))
    }
}

/// `length`: the natural transformation `Seq => Const<usize>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Length;

impl NaturalTransformation for Length {
    type Source = SeqFunctor;
    type Target = ConstFunctor<usize>;

    fn transform<X: 'static>(&self, fx: Mapped<Self::Source, X>) -> Mapped<Self::Target, X> {
        trace!(len = fx.len(), "length");
        fx.len()
    }

    fn description(&self) -> String {
        "length: Seq => Const".to_string()
    }
}

/// Element count of a sequence, the `length` component at `X`
pub fn length<X: 'static>(xs: Vec<X>) -> usize {
    Length.transform::<X>(xs)
}

/// Identity natural transformation `F => F`
pub struct IdentityTransformation<F> {
    _phantom: PhantomData<fn() -> F>,
}

impl<F> IdentityTransformation<F>
where
    F: EndoFunctor,
{
    /// Create a new identity natural transformation
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<F> Default for IdentityTransformation<F>
where
    F: EndoFunctor,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for IdentityTransformation<F> {
    fn clone(&self) -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<F> fmt::Debug for IdentityTransformation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityTransformation")
    }
}

impl<F> NaturalTransformation for IdentityTransformation<F>
where
    F: EndoFunctor,
{
    type Source = F;
    type Target = F;

    fn transform<X: 'static>(&self, fx: Mapped<F, X>) -> Mapped<F, X> {
        fx
    }

    fn description(&self) -> String {
        "identity".to_string()
    }
}

/// Vertical composition `second ∘ first` of `first: F => G` and `second: G => H`
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalComposition<N, M> {
    first: N,
    second: M,
}

impl<N, M> VerticalComposition<N, M>
where
    N: NaturalTransformation,
    M: NaturalTransformation<Source = N::Target>,
{
    /// Create a new composition
    pub fn new(first: N, second: M) -> Self {
        Self { first, second }
    }
}

impl<N, M> NaturalTransformation for VerticalComposition<N, M>
where
    N: NaturalTransformation,
    M: NaturalTransformation<Source = N::Target>,
{
    type Source = N::Source;
    type Target = M::Target;

    fn transform<X: 'static>(&self, fx: Mapped<N::Source, X>) -> Mapped<M::Target, X> {
        let intermediate = self.first.transform::<X>(fx);
        self.second.transform::<X>(intermediate)
    }

    fn description(&self) -> String {
        format!("({}) ∘ ({})", self.second.description(), self.first.description())
    }
}
