//! Immediate-operand constraint evaluation.
//!
//! Intrinsics in the `Imm` category (and `maybe_imm` call sites that
//! resolved to the immediate overload) need a compile-time-constant
//! operand to encode the instruction. This module computes the legal
//! range, validates candidate constants, and decides what happens when
//! the operand is not a constant: either the shaping pass synthesizes a
//! jump table over every legal immediate, or — under `no_jmp_table_imm` —
//! the call is a hard compile failure because the encoding truly requires
//! a literal.

use thiserror::Error;

use crate::intrinsic::NamedIntrinsic;
use crate::node::CallOperand;
use crate::registry;

/// Caller errors at a specific call site. These fail the call (and
/// propagate as a unit-level compile failure where the surrounding
/// compiler has no local-failure isolation) but never touch the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImmError {
    #[error("immediate {value} for {id:?} is outside the legal range 0..={upper_bound}")]
    OutOfRange {
        id: NamedIntrinsic,
        value: i64,
        upper_bound: u16,
    },

    #[error("{0:?} requires a compile-time-constant operand and has no jump-table fallback")]
    NonConstWithoutFallback(NamedIntrinsic),
}

/// What the shaping pass must do with an immediate operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmDecision {
    /// The operand is a constant in range; encode it directly.
    Constant(i64),
    /// The operand is not a constant; expand a multi-way dispatch that
    /// tests the runtime value against each immediate in `0..=upper_bound`
    /// and emits the matching fixed-immediate instruction.
    JumpTable { upper_bound: u16 },
}

/// Upper bound of the legal immediate range for `id`.
///
/// Full-range intrinsics accept the whole imm8. The narrower bounds are
/// authored per intrinsic, tied to a structural property of the
/// operation; they are data, not a derived rule.
pub fn imm_upper_bound(id: NamedIntrinsic) -> u16 {
    debug_assert!(
        registry::lookup(id).category == crate::intrinsic::HwIntrinsicCategory::Imm
            || registry::lookup(id).flags.maybe_imm,
        "{:?} takes no immediate operand",
        id
    );
    match id {
        // Lane index into four single-precision lanes.
        NamedIntrinsic::Sse41Extract => 3,
        // Lane index into eight 16-bit lanes.
        NamedIntrinsic::Sse2Extract | NamedIntrinsic::Sse2Insert => 7,
        // Selects one 128-bit half of a 256-bit vector.
        NamedIntrinsic::AvxExtractVector128
        | NamedIntrinsic::AvxInsertVector128
        | NamedIntrinsic::Avx2ExtractVector128 => 1,
        // Comparison-mode space of the VEX compare encodings.
        NamedIntrinsic::AvxCompare => 31,
        _ => {
            debug_assert!(
                registry::lookup(id).flags.full_range_imm,
                "{:?} needs an authored immediate bound",
                id
            );
            255
        }
    }
}

/// Whether `value` is a legal immediate for `id`.
pub fn is_in_imm_range(id: NamedIntrinsic, value: i64) -> bool {
    value >= 0 && value <= imm_upper_bound(id) as i64
}

/// Validates a candidate constant, reporting the legal range on failure.
pub fn validate_imm(id: NamedIntrinsic, value: i64) -> Result<(), ImmError> {
    if is_in_imm_range(id, value) {
        Ok(())
    } else {
        Err(ImmError::OutOfRange {
            id,
            value,
            upper_bound: imm_upper_bound(id),
        })
    }
}

/// Classifies the actual immediate operand of a call site.
///
/// `maybe_imm` callers must first confirm at the call site that the
/// immediate overload applies; the vector overload never comes here.
pub fn evaluate_operand(id: NamedIntrinsic, op: &CallOperand) -> Result<ImmDecision, ImmError> {
    match op.const_value() {
        Some(value) => {
            validate_imm(id, value)?;
            Ok(ImmDecision::Constant(value))
        }
        None => {
            if registry::lookup(id).flags.no_jmp_table_imm {
                Err(ImmError::NonConstWithoutFallback(id))
            } else {
                Ok(ImmDecision::JumpTable {
                    upper_bound: imm_upper_bound(id),
                })
            }
        }
    }
}
