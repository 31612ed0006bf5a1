// Copyright 2025 Cowboy AI, LLC.

//! Checkers for the functor, naturality and Yoneda laws
//!
//! The laws are proof obligations on implementors, so nothing enforces them
//! at runtime. These checkers evaluate both sides of each equation on a
//! sample value and report a [`LawViolation`] when they differ.

use std::fmt::Debug;

use tracing::debug;

use super::functor::{EndoFunctor, Mapped};
use super::morphism::Hom;
use super::natural_transformation::NaturalTransformation;
use super::yoneda::{lower_y, LiftY};
use crate::errors::{LawResult, LawViolation};

/// Check `map(id)(value) == value`
pub fn check_functor_identity<F, X>(functor: &F, value: Mapped<F, X>) -> LawResult<()>
where
    F: EndoFunctor,
    X: 'static,
    Mapped<F, X>: Clone + PartialEq + Debug,
{
    let actual = functor.map(Hom::<X, X>::identity()).apply(value.clone());
    debug!(functor = %functor.name(), "checking identity law");
    if actual == value {
        Ok(())
    } else {
        Err(LawViolation::FunctorIdentity {
            functor: functor.name(),
            expected: format!("{value:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

/// Check `map(g ∘ f)(value) == (map(g) ∘ map(f))(value)`
pub fn check_functor_composition<F, A, B, C>(
    functor: &F,
    f: &Hom<A, B>,
    g: &Hom<B, C>,
    value: Mapped<F, A>,
) -> LawResult<()>
where
    F: EndoFunctor,
    A: 'static,
    B: 'static,
    C: 'static,
    Mapped<F, A>: Clone,
    Mapped<F, C>: PartialEq + Debug,
{
    let composed = functor.map(f.then(g)).apply(value.clone());
    let sequenced = functor
        .map(f.clone())
        .then(&functor.map(g.clone()))
        .apply(value);
    debug!(functor = %functor.name(), "checking composition law");
    if composed == sequenced {
        Ok(())
    } else {
        Err(LawViolation::FunctorComposition {
            functor: functor.name(),
            composed: format!("{composed:?}"),
            sequenced: format!("{sequenced:?}"),
        })
    }
}

/// Check the naturality square `G.map(f) ∘ η_X == η_Y ∘ F.map(f)` at `value`
pub fn check_naturality<N, X, Y>(
    eta: &N,
    source: &N::Source,
    target: &N::Target,
    f: &Hom<X, Y>,
    value: Mapped<N::Source, X>,
) -> LawResult<()>
where
    N: NaturalTransformation,
    X: 'static,
    Y: 'static,
    Mapped<N::Source, X>: Clone,
    Mapped<N::Target, Y>: PartialEq + Debug,
{
    let left = target
        .map(f.clone())
        .apply(eta.transform::<X>(value.clone()));
    let right = eta.transform::<Y>(source.map(f.clone()).apply(value));
    debug!(transformation = %eta.description(), "checking naturality square");
    if left == right {
        Ok(())
    } else {
        Err(LawViolation::Naturality {
            transformation: eta.description(),
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// Check `lower_y(lift_y(value)) == value` for the given functor
pub fn check_yoneda_round_trip<X, F>(functor: F, value: Mapped<F, X>) -> LawResult<()>
where
    X: 'static,
    F: EndoFunctor,
    Mapped<F, X>: Clone + PartialEq + Debug,
{
    let name = functor.name();
    let lifted = LiftY::<X, F>::with_functor(functor, value.clone());
    let recovered = lower_y::<X, _>(&lifted);
    debug!(functor = %name, "checking Yoneda round trip");
    if recovered == value {
        Ok(())
    } else {
        Err(LawViolation::YonedaRoundTrip {
            functor: name,
            original: format!("{value:?}"),
            recovered: format!("{recovered:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::functor::{ComposedFunctor, ConstFunctor, IdentityFunctor, SeqFunctor};
    use crate::category::natural_transformation::Length;

    /// A "functor" that drops the last element: well-typed, but breaks both laws.
    #[derive(Debug, Clone, Copy, Default)]
    struct Truncating;

    impl EndoFunctor for Truncating {
        type Obj<X: 'static> = Vec<X>;

        fn map<A: 'static, B: 'static>(&self, f: Hom<A, B>) -> Hom<Self::Obj<A>, Self::Obj<B>> {
            Hom::new(move |mut xs: Vec<A>| {
                xs.pop();
                xs.into_iter().map(|x| f.apply(x)).collect()
            })
        }

        fn name(&self) -> String {
            "Truncating".to_string()
        }
    }

    #[test]
    fn test_seq_satisfies_functor_laws() {
        let f = Hom::new(|i: i32| i * 3);
        let g = Hom::new(|i: i32| format!("<{i}>"));
        check_functor_identity::<_, i32>(&SeqFunctor, vec![1, 2, 3]).unwrap();
        check_functor_composition(&SeqFunctor, &f, &g, vec![1, 2, 3]).unwrap();
    }

    #[test]
    fn test_const_satisfies_functor_laws() {
        let functor = ConstFunctor::<usize>::new();
        let f = Hom::new(|s: String| s.len());
        let g = Hom::new(|n: usize| n % 2 == 0);
        check_functor_identity::<_, String>(&functor, 11).unwrap();
        check_functor_composition(&functor, &f, &g, 11).unwrap();
    }

    #[test]
    fn test_composed_satisfies_functor_laws() {
        let functor = ComposedFunctor::new(SeqFunctor, IdentityFunctor);
        let f = Hom::new(|i: i32| i - 1);
        let g = Hom::new(|i: i32| i.abs());
        check_functor_composition(&functor, &f, &g, vec![-3, 0, 3]).unwrap();
    }

    #[test]
    fn test_broken_functor_is_reported() {
        let err = check_functor_identity::<_, i32>(&Truncating, vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            LawViolation::FunctorIdentity {
                functor: "Truncating".to_string(),
                expected: "[1, 2]".to_string(),
                actual: "[1]".to_string(),
            }
        );

        let f = Hom::new(|i: i32| i + 1);
        let g = Hom::new(|i: i32| i * 2);
        let err = check_functor_composition(&Truncating, &f, &g, vec![1, 2, 3]).unwrap_err();
        assert_eq!(err.law(), "functor-composition");
    }

    #[test]
    fn test_length_is_natural() {
        let f = Hom::new(|i: i32| i.to_string());
        check_naturality(&Length, &SeqFunctor, &ConstFunctor::new(), &f, vec![0, 1, 2]).unwrap();
        check_naturality(&Length, &SeqFunctor, &ConstFunctor::new(), &f, Vec::new()).unwrap();
    }

    #[test]
    fn test_round_trip_checks() {
        check_yoneda_round_trip::<i32, _>(SeqFunctor, vec![0, 1, 2]).unwrap();
        check_yoneda_round_trip::<i32, _>(ConstFunctor::<usize>::new(), 3).unwrap();
        check_yoneda_round_trip::<i32, _>(Truncating, Vec::new()).unwrap();
    }

    #[test]
    fn test_round_trip_through_broken_functor_fails() {
        let err = check_yoneda_round_trip::<i32, _>(Truncating, vec![4, 5]).unwrap_err();
        assert_eq!(err.law(), "yoneda-round-trip");
        assert_eq!(
            err.to_string(),
            "Yoneda round trip through Truncating changed the value: started with [4, 5], recovered [4]"
        );
    }
}
