// Copyright 2025 Cowboy AI, LLC.

//! Endofunctors on the category of Rust types
//!
//! A functor maps every object (type) `X` to an object `Obj<X>` and every
//! morphism `A -> B` to a morphism `Obj<A> -> Obj<B>`. The object mapping is a
//! generic associated type, so a functor that is missing it, or whose `map`
//! has the wrong shape, is rejected at compile time.
//!
//! Functor laws (checked by [`crate::category::laws`], not at runtime):
//! - `map(id) == id`
//! - `map(g ∘ f) == map(g) ∘ map(f)`

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use super::morphism::Hom;

/// The object a functor `F` sends `X` to
pub type Mapped<F, X> = <F as EndoFunctor>::Obj<X>;

/// An endofunctor on Rust types
pub trait EndoFunctor {
    /// Object mapping
    type Obj<X: 'static>: 'static;

    /// Morphism mapping
    fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>>;

    /// Name used in log records and law violations
    fn name(&self) -> String;
}

/// Sequence functor: `X ↦ Vec<X>`, morphisms act elementwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeqFunctor;

impl EndoFunctor for SeqFunctor {
    type Obj<X: 'static> = Vec<X>;

    fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>> {
        trace!(morphism = %f.description(), "lifting morphism through Seq");
        Hom::new(move |xs: Vec<A>| xs.into_iter().map(|x| f.apply(x)).collect())
    }

    fn name(&self) -> String {
        "Seq".to_string()
    }
}

/// Constant functor: every object goes to the carrier `C`, every morphism to `id_C`
pub struct ConstFunctor<C = usize> {
    _carrier: PhantomData<fn() -> C>,
}

impl<C> ConstFunctor<C> {
    /// Create a constant functor onto `C`
    pub fn new() -> Self {
        Self {
            _carrier: PhantomData,
        }
    }
}

impl<C> Default for ConstFunctor<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ConstFunctor<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ConstFunctor<C> {}

impl<C> fmt::Debug for ConstFunctor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstFunctor<{}>", std::any::type_name::<C>())
    }
}

impl<C: 'static> EndoFunctor for ConstFunctor<C> {
    type Obj<X: 'static> = C;

    fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>> {
        // The morphism's action is discarded; only the carrier value survives.
        trace!(morphism = %f.description(), "discarding morphism in Const");
        Hom::new(|c: C| c)
    }

    fn name(&self) -> String {
        "Const".to_string()
    }
}

/// Identity functor - maps objects and morphisms to themselves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityFunctor;

impl EndoFunctor for IdentityFunctor {
    type Obj<X: 'static> = X;

    fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>> {
        f
    }

    fn name(&self) -> String {
        "Id".to_string()
    }
}

/// Composition of functors: apply `first`, then `second`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposedFunctor<F, G> {
    first: F,
    second: G,
}

impl<F, G> ComposedFunctor<F, G>
where
    F: EndoFunctor,
    G: EndoFunctor,
{
    /// Create the composed functor `second ∘ first`
    pub fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<F, G> EndoFunctor for ComposedFunctor<F, G>
where
    F: EndoFunctor,
    G: EndoFunctor,
{
    type Obj<X: 'static> = G::Obj<F::Obj<X>>;

    fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>> {
        self.second.map(self.first.map(f))
    }

    fn name(&self) -> String {
        format!("{} ∘ {}", self.second.name(), self.first.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_functor_maps_elementwise_in_order() {
        let stringify = Hom::new(|i: i32| i.to_string());
        let mapped = SeqFunctor.map(stringify).apply(vec![0, 1, 2]);
        assert_eq!(mapped, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_seq_functor_empty_input() {
        let double = Hom::new(|i: i32| i * 2);
        assert!(SeqFunctor.map(double).apply(Vec::new()).is_empty());
    }

    #[test]
    fn test_seq_functor_keeps_duplicates() {
        let negate = Hom::new(|i: i32| -i);
        assert_eq!(SeqFunctor.map(negate).apply(vec![4, 4, 1]), vec![-4, -4, -1]);
    }

    #[test]
    fn test_const_functor_ignores_morphism() {
        let functor = ConstFunctor::<usize>::new();
        let explode = Hom::new(|i: i32| i.to_string().repeat(10));
        assert_eq!(functor.map(explode).apply(3), 3);
    }

    #[test]
    fn test_const_functor_other_carrier() {
        let functor = ConstFunctor::<&'static str>::new();
        let f = Hom::new(|b: bool| u8::from(b));
        assert_eq!(functor.map(f).apply("fixed"), "fixed");
    }

    #[test]
    fn test_identity_functor() {
        let f = Hom::new(|i: i32| i + 10);
        assert_eq!(IdentityFunctor.map(f).apply(5), 15);
    }

    #[test]
    fn test_composed_functor() {
        let nested = ComposedFunctor::new(SeqFunctor, SeqFunctor);
        let f = Hom::new(|i: i32| i * i);
        let mapped = nested.map(f).apply(vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(mapped, vec![vec![1, 4], vec![], vec![9]]);
        assert_eq!(nested.name(), "Seq ∘ Seq");
    }

    #[test]
    fn test_composed_with_const_collapses() {
        let functor = ComposedFunctor::new(SeqFunctor, ConstFunctor::<usize>::new());
        let f = Hom::new(|i: i32| i.to_string());
        assert_eq!(functor.map(f).apply(42), 42);
    }
}
