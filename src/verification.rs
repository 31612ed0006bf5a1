// Copyright 2025 Cowboy AI, LLC.

//! The self-check run by the binary
//!
//! Computes `length` on both sides of its naturality square and lowers a
//! lifted sequence, failing with a [`LawViolation`] if either identity breaks.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::category::laws::{check_naturality, check_yoneda_round_trip};
use crate::category::{lift_y, lower_y, ConstFunctor, EndoFunctor, Hom, Length, NaturalTransformation, SeqFunctor};
use crate::errors::LawResult;

/// The sequence the binary verifies against
pub fn sample_input() -> Vec<i32> {
    vec![0, 1, 2]
}

/// `i ↦ i.to_string()`, the morphism pushed through both functors
pub fn stringify() -> Hom<i32, String> {
    Hom::new(|i: i32| i.to_string())
}

/// Values computed by [`verify_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// The sequence that was checked
    pub input: Vec<i32>,
    /// `length(Seq.map(f)(input))`
    pub length_after_map: usize,
    /// `Const.map(f)(length(input))`
    pub mapped_length: usize,
    /// `lower_y(lift_y(input))`
    pub recovered: Vec<i32>,
}

impl VerificationReport {
    /// The output lines, in print order
    pub fn lines(&self) -> Vec<String> {
        let recovered = self
            .recovered
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            self.length_after_map.to_string(),
            self.mapped_length.to_string(),
            recovered,
        ]
    }

    /// JSON rendering for structured logs
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Run the self-check on [`sample_input`]
pub fn verify() -> LawResult<VerificationReport> {
    verify_with(sample_input())
}

/// Run the self-check on an arbitrary sequence
pub fn verify_with(input: Vec<i32>) -> LawResult<VerificationReport> {
    let f = stringify();
    let seq = SeqFunctor;
    let konst = ConstFunctor::<usize>::new();

    check_naturality(&Length, &seq, &konst, &f, input.clone())?;
    let length_after_map = Length.transform::<String>(seq.map(f.clone()).apply(input.clone()));
    let mapped_length = konst.map(f).apply(Length.transform::<i32>(input.clone()));

    check_yoneda_round_trip::<i32, _>(seq, input.clone())?;
    let recovered: Vec<i32> = lower_y(&lift_y::<i32, SeqFunctor>(input.clone()));

    info!(
        len = input.len(),
        length_after_map,
        mapped_length,
        "naturality and Yoneda round trip verified"
    );

    Ok(VerificationReport {
        input,
        length_after_map,
        mapped_length,
        recovered,
    })
}
