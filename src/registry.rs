//! Descriptor lookup and name resolution.
//!
//! The table in `intrinsic::table` is process-wide immutable state: built
//! before any compilation unit runs, shared read-only across concurrently
//! compiled units, never torn down. Lookups by identifier are total —
//! identifiers only come from name resolution or the compiler's own
//! construction, so a miss is a compiler defect, not user input. Lookups
//! by name may legitimately miss and return `None`, which tells the
//! front-end the call is an ordinary method invocation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::intrinsic::table::TABLE;
use crate::intrinsic::{ElementType, HwIntrinsicInfo, Ins, NamedIntrinsic};
use crate::isa::InstructionSet;

/// Defects in the compiler itself, distinct from user-facing errors. These
/// abort compilation of the affected unit with the offending identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("descriptor table row {index} holds {found:?} instead of the identifier with ordinal {index}")]
    TableMismatch { index: usize, found: NamedIntrinsic },

    #[error("intrinsic {0:?} is marked skip-codegen but reached instruction emission")]
    SkippedIntrinsicReachedCodegen(NamedIntrinsic),
}

/// Per-ISA method-name index, built once on first resolution. Resolution
/// runs on every call site during import, so it has to stay O(1) amortized
/// in the table size.
static METHOD_INDEX: Lazy<HashMap<InstructionSet, HashMap<&'static str, NamedIntrinsic>>> =
    Lazy::new(|| {
        validate().expect("descriptor table failed startup validation");
        let mut index: HashMap<InstructionSet, HashMap<&'static str, NamedIntrinsic>> =
            HashMap::new();
        for info in TABLE.iter() {
            let prev = index.entry(info.isa).or_default().insert(info.name, info.id);
            debug_assert!(
                prev.is_none(),
                "duplicate method name {}.{}",
                info.isa.class_name(),
                info.name
            );
        }
        index
    });

/// Checks the authored table against its row-shape contract: one row per
/// identifier, in ordinal order. Call once at backend initialization;
/// violations are authoring defects.
pub fn validate() -> Result<(), InternalError> {
    for (index, info) in TABLE.iter().enumerate() {
        if info.id.ordinal() != index {
            return Err(InternalError::TableMismatch {
                index,
                found: info.id,
            });
        }
    }
    Ok(())
}

/// Descriptor for an identifier. Total: the table has exactly one row per
/// `NamedIntrinsic` and row order is validated at startup.
pub fn lookup(id: NamedIntrinsic) -> &'static HwIntrinsicInfo {
    let info = &TABLE[id.ordinal()];
    debug_assert_eq!(info.id, id);
    info
}

/// Native opcode for an identifier at a base element type; `Ins::Invalid`
/// where the intrinsic does not support the type.
pub fn lookup_ins(id: NamedIntrinsic, ty: ElementType) -> Ins {
    lookup(id).ins_for(ty)
}

/// Resolves a `(class-name, method-name)` pair to an intrinsic identifier.
/// `None` is the "not recognized" sentinel, not a failure.
pub fn lookup_id(class_name: &str, method_name: &str) -> Option<NamedIntrinsic> {
    let isa = InstructionSet::from_class_name(class_name)?;
    METHOD_INDEX.get(&isa)?.get(method_name).copied()
}

/// Resolves a class name to its instruction-set extension. `None` is the
/// "not recognized" sentinel.
pub fn lookup_isa(class_name: &str) -> Option<InstructionSet> {
    InstructionSet::from_class_name(class_name)
}

/// All registered descriptors, in identifier order.
pub fn all() -> impl Iterator<Item = &'static HwIntrinsicInfo> {
    TABLE.iter()
}

/// Emission-side guard: an intrinsic marked skip-codegen must have been
/// rewritten during shaping; reaching emission unrewritten is a defect in
/// the compiler, not in user input.
pub fn check_codegen_reachable(id: NamedIntrinsic) -> Result<(), InternalError> {
    if !lookup(id).requires_codegen() {
        return Err(InternalError::SkippedIntrinsicReachedCodegen(id));
    }
    Ok(())
}

/// The bespoke handlers layered on top of the table data. Every intrinsic
/// that escapes pure table-driven treatment (`Special` category,
/// `special_import`, `special_codegen`) names its handler here, so the
/// bespoke logic is enumerable rather than hidden behind ad hoc
/// conditionals in the consuming passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialHandler {
    /// movmsk* sign-bit extraction into a general-purpose register.
    MoveMask,
    /// maskmovdqu store through the implicit destination register.
    MaskedStore,
    /// ptest/vtest* flag materialization into a boolean result.
    PackedTest,
    /// Gather operand shaping: base address + index vector + scale.
    GatherAddressing,
}

/// Named bespoke handler for `id`, or `None` when the intrinsic is fully
/// table-driven.
pub fn special_handler(id: NamedIntrinsic) -> Option<SpecialHandler> {
    match id {
        NamedIntrinsic::SseMoveMask => Some(SpecialHandler::MoveMask),
        NamedIntrinsic::Sse2MaskMove => Some(SpecialHandler::MaskedStore),
        NamedIntrinsic::AvxTestZ => Some(SpecialHandler::PackedTest),
        NamedIntrinsic::Avx2GatherVector128
        | NamedIntrinsic::Avx2GatherVector256
        | NamedIntrinsic::Avx2GatherMaskVector128
        | NamedIntrinsic::Avx2GatherMaskVector256 => Some(SpecialHandler::GatherAddressing),
        _ => None,
    }
}
