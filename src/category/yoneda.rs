// Copyright 2025 Cowboy AI, LLC.

//! The hom-functor and the Yoneda lift/lower construction
//!
//! Yoneda's lemma states `Nat(Hom(X, -), F) ≅ F(X)`. The two directions of
//! the bijection are:
//!
//! - [`lift_y`]: a single value `v: F(X)` determines the natural
//!   transformation `g ↦ F.map(g)(v)` out of `Hom(X, -)`.
//! - [`lower_y`]: any natural transformation `η: Hom(X, -) => F` is recovered
//!   as the value `η(id_X)`.
//!
//! `lower_y(lift_y(v)) == v` for every functor, object and value.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use super::functor::{EndoFunctor, Mapped};
use super::morphism::Hom;
use super::natural_transformation::NaturalTransformation;

/// Covariant hom-functor `Hom(X, -)`: `A ↦ Hom<X, A>`, acting by post-composition
pub struct HomFunctor<X> {
    _domain: PhantomData<fn() -> X>,
}

impl<X> HomFunctor<X> {
    /// Create the hom-functor with domain `X`
    pub fn new() -> Self {
        Self {
            _domain: PhantomData,
        }
    }
}

impl<X> Default for HomFunctor<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> Clone for HomFunctor<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X> Copy for HomFunctor<X> {}

impl<X> fmt::Debug for HomFunctor<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HomFunctor<{}>", std::any::type_name::<X>())
    }
}

impl<X: 'static> EndoFunctor for HomFunctor<X> {
    type Obj<A: 'static> = Hom<X, A>;

    fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>> {
        Hom::new(move |g: Hom<X, A>| g.then(&f))
    }

    fn name(&self) -> String {
        format!("Hom({}, -)", std::any::type_name::<X>())
    }
}

/// A value of `F(X)` viewed as a natural transformation `Hom(X, -) => F`
///
/// The transformation is rebuilt on demand for each object rather than
/// precomputed.
pub struct LiftY<X: 'static, F: EndoFunctor> {
    functor: F,
    value: F::Obj<X>,
}

impl<X: 'static, F: EndoFunctor> LiftY<X, F> {
    /// Lift `value` through an explicit functor instance
    pub fn with_functor(functor: F, value: F::Obj<X>) -> Self {
        Self { functor, value }
    }

    /// The stored `F(X)` value
    pub fn value(&self) -> &F::Obj<X> {
        &self.value
    }

    /// Give back the stored value without applying the identity morphism
    pub fn into_value(self) -> F::Obj<X> {
        self.value
    }
}

impl<X, F> Clone for LiftY<X, F>
where
    X: 'static,
    F: EndoFunctor + Clone,
    F::Obj<X>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            functor: self.functor.clone(),
            value: self.value.clone(),
        }
    }
}

impl<X, F> fmt::Debug for LiftY<X, F>
where
    X: 'static,
    F: EndoFunctor,
    F::Obj<X>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiftY")
            .field("functor", &self.functor.name())
            .field("value", &self.value)
            .finish()
    }
}

impl<X, F> NaturalTransformation for LiftY<X, F>
where
    X: 'static,
    F: EndoFunctor,
    F::Obj<X>: Clone,
{
    type Source = HomFunctor<X>;
    type Target = F;

    fn transform<A: 'static>(&self, g: Mapped<HomFunctor<X>, A>) -> Mapped<F, A> {
        self.functor.map(g).apply(self.value.clone())
    }

    fn description(&self) -> String {
        format!("liftY: Hom({}, -) => {}", std::any::type_name::<X>(), self.functor.name())
    }
}

/// Lift a value of `F(X)` to the natural transformation `Hom(X, -) => F`
pub fn lift_y<X, F>(value: F::Obj<X>) -> LiftY<X, F>
where
    X: 'static,
    F: EndoFunctor + Default,
{
    let lifted = LiftY::with_functor(F::default(), value);
    debug!(functor = %lifted.functor.name(), "lifted value into Hom-natural transformation");
    lifted
}

/// Recover `F(X)` from a natural transformation `Hom(X, -) => F` by applying it to `id_X`
pub fn lower_y<X, N>(eta: &N) -> Mapped<N::Target, X>
where
    X: 'static,
    N: NaturalTransformation<Source = HomFunctor<X>>,
{
    debug!(transformation = %eta.description(), "lowering at the identity morphism");
    eta.transform::<X>(Hom::identity())
}
