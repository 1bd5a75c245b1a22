//! Reference model for differential testing.
//!
//! A script of [`Step`]s is replayed against a container and against a
//! plain `Vec<T>`. Indices are taken verbatim, so scripts exercise the
//! out-of-range paths as well: the model predicts exactly which steps
//! must fail.

use std::fmt;

use strand_core::{SeqError, SeqOp, Sequence};

/// One operation of a test script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<T> {
    PushBack(T),
    Insert(usize, T),
    Erase(usize),
    At(usize),
    HasElement(T),
}

/// First point where a container disagreed with the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Position of the offending step in the script.
    pub step: usize,
    pub detail: String,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diverged at step {}: {}", self.step, self.detail)
    }
}

impl std::error::Error for Divergence {}

fn expected_range_error(op: SeqOp, index: usize, len: usize) -> SeqError {
    SeqError::OutOfRange { op, index, len }
}

/// Replay `steps` against `seq` and a `Vec` model, comparing every
/// result, then compare the final contents element by element.
pub fn check_against_model<S, T>(seq: &mut S, steps: &[Step<T>]) -> Result<(), Divergence>
where
    S: Sequence<T>,
    T: Clone + PartialEq + fmt::Debug,
{
    let mut model: Vec<T> = (0..seq.size())
        .map(|i| seq.at(i).cloned())
        .collect::<Result<_, _>>()
        .map_err(|e| Divergence {
            step: 0,
            detail: format!("initial contents unreadable: {e}"),
        })?;

    for (n, step) in steps.iter().enumerate() {
        let diverge = |detail: String| Divergence { step: n, detail };
        let len = model.len();
        match step {
            Step::PushBack(v) => {
                seq.push_back(v.clone());
                model.push(v.clone());
            }
            Step::Insert(i, v) => {
                let got = seq.insert(*i, v.clone());
                if *i <= len {
                    model.insert(*i, v.clone());
                    if got.is_err() {
                        return Err(diverge(format!("insert({i}) failed: {got:?}")));
                    }
                } else if got != Err(expected_range_error(SeqOp::Insert, *i, len)) {
                    return Err(diverge(format!("insert({i}) on len {len} gave {got:?}")));
                }
            }
            Step::Erase(i) => {
                let got = seq.erase(*i);
                let want = if *i < len {
                    Ok(model.remove(*i))
                } else {
                    Err(expected_range_error(SeqOp::Erase, *i, len))
                };
                if got != want {
                    return Err(diverge(format!("erase({i}) gave {got:?}, want {want:?}")));
                }
            }
            Step::At(i) => {
                let got = seq.at(*i).cloned();
                let want = model
                    .get(*i)
                    .cloned()
                    .ok_or_else(|| expected_range_error(SeqOp::At, *i, len));
                if got != want {
                    return Err(diverge(format!("at({i}) gave {got:?}, want {want:?}")));
                }
            }
            Step::HasElement(v) => {
                let got = seq.has_element(v);
                let want = model.contains(v);
                if got != want {
                    return Err(diverge(format!("has_element({v:?}) gave {got}")));
                }
            }
        }
        if seq.size() != model.len() {
            return Err(diverge(format!(
                "size {} after {step:?}, model has {}",
                seq.size(),
                model.len()
            )));
        }
    }

    for (i, want) in model.iter().enumerate() {
        match seq.at(i) {
            Ok(got) if got == want => {}
            other => {
                return Err(Divergence {
                    step: steps.len(),
                    detail: format!("final element {i} is {other:?}, want {want:?}"),
                })
            }
        }
    }
    Ok(())
}
