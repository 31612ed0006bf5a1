// Copyright 2025 Cowboy AI, LLC.

//! Error types for law checks
//!
//! Ill-formed functors and transformations never get this far: they fail to
//! type-check. What remains is a well-typed construction that breaks one of
//! the algebraic laws, reported with both sides of the failed equation.

use thiserror::Error;

/// A violated categorical law
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// `map(id) != id`
    #[error("Functor identity law violated by {functor}: expected {expected}, got {actual}")]
    FunctorIdentity {
        /// Name of the functor
        functor: String,
        /// The input value
        expected: String,
        /// What `map(id)` produced
        actual: String,
    },

    /// `map(g ∘ f) != map(g) ∘ map(f)`
    #[error("Functor composition law violated by {functor}: map(g ∘ f) gave {composed}, map(g) ∘ map(f) gave {sequenced}")]
    FunctorComposition {
        /// Name of the functor
        functor: String,
        /// Result of mapping the composite
        composed: String,
        /// Result of composing the mapped morphisms
        sequenced: String,
    },

    /// The naturality square does not commute
    #[error("Naturality violated by {transformation}: G.map(f) ∘ η gave {left}, η ∘ F.map(f) gave {right}")]
    Naturality {
        /// Description of the transformation
        transformation: String,
        /// `G.map(f) ∘ η_X`
        left: String,
        /// `η_Y ∘ F.map(f)`
        right: String,
    },

    /// `lower_y(lift_y(v)) != v`
    #[error("Yoneda round trip through {functor} changed the value: started with {original}, recovered {recovered}")]
    YonedaRoundTrip {
        /// Name of the functor
        functor: String,
        /// The lifted value
        original: String,
        /// The lowered value
        recovered: String,
    },
}

/// Result type for law checks
pub type LawResult<T> = Result<T, LawViolation>;

impl LawViolation {
    /// Short name of the violated law
    pub fn law(&self) -> &'static str {
        match self {
            LawViolation::FunctorIdentity { .. } => "functor-identity",
            LawViolation::FunctorComposition { .. } => "functor-composition",
            LawViolation::Naturality { .. } => "naturality",
            LawViolation::YonedaRoundTrip { .. } => "yoneda-round-trip",
        }
    }

    /// One-line context naming the violated law, for the binary's error chain
    pub fn failure_context(&self) -> String {
        format!("Yoneda self-check failed: {} law does not hold", self.law())
    }

    /// Check if this is one of the functor laws
    pub fn is_functor_law(&self) -> bool {
        matches!(
            self,
            LawViolation::FunctorIdentity { .. } | LawViolation::FunctorComposition { .. }
        )
    }
}
