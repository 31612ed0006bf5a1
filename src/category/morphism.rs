// Copyright 2025 Cowboy AI, LLC.

//! Morphism abstractions between objects
//!
//! Objects are Rust types and morphisms are pure, total functions between
//! them. A [`Hom`] wraps a shared immutable closure, so cloning one is cheap
//! and functors can capture it inside the morphisms they build.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// A morphism `X -> Y`
pub struct Hom<X, Y> {
    run: Arc<dyn Fn(X) -> Y + Send + Sync>,
}

impl<X, Y> Hom<X, Y> {
    /// Create a morphism from any pure function or closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(X) -> Y + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Apply the morphism
    pub fn apply(&self, x: X) -> Y {
        (self.run)(x)
    }

    /// Get a human-readable description
    pub fn description(&self) -> String {
        format!("Hom<{}, {}>", type_name::<X>(), type_name::<Y>())
    }
}

impl<X: 'static, Y: 'static> Hom<X, Y> {
    /// Post-compose with `next`, yielding `next ∘ self`
    pub fn then<Z: 'static>(&self, next: &Hom<Y, Z>) -> Hom<X, Z> {
        let first = self.clone();
        let second = next.clone();
        Hom::new(move |x| second.apply(first.apply(x)))
    }
}

impl<X: 'static> Hom<X, X> {
    /// The identity morphism on `X`
    pub fn identity() -> Self {
        Hom::new(|x| x)
    }
}

/// Composition `g ∘ f`: apply `f` first, then `g`
pub fn compose<X, Y, Z>(g: &Hom<Y, Z>, f: &Hom<X, Y>) -> Hom<X, Z>
where
    X: 'static,
    Y: 'static,
    Z: 'static,
{
    f.then(g)
}

/// Identity morphism on `X`
pub fn identity<X: 'static>() -> Hom<X, X> {
    Hom::identity()
}

impl<X, Y> Clone for Hom<X, Y> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<X, Y> fmt::Debug for Hom<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
