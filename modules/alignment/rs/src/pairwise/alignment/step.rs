use std::borrow::Borrow;

use derive_getters::{Dissolve, Getters};
use itertools::Itertools;

use super::op::Op;

/// A run of identical operations in the alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: usize,
    /// The alignment operation
    op: Op,
}

impl Step {
    /// Run-length encode a column-by-column list of operations.
    pub fn encode(ops: impl IntoIterator<Item = Op>) -> Vec<Step> {
        ops.into_iter()
            .dedup_with_count()
            .map(|(len, op)| Step { len, op })
            .collect()
    }

    /// The same step with the roles of the sequences swapped.
    pub fn inverted(&self) -> Step {
        Step {
            len: self.len,
            op: self.op.inverted(),
        }
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step>>) -> String {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}
