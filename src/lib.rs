//! hwintrin - Hardware-Intrinsic Descriptor & Classification Engine
//!
//! The single source of truth an x86-64 JIT backend consults about
//! hardware intrinsics: which instruction-set extension an intrinsic
//! requires, how many operands it takes, which native opcode matches each
//! element type, whether an operand must be a compile-time constant and
//! within what bound, and the behavioral flags that drive containment,
//! scheduling, and emission decisions.
//!
//! # Components
//!
//! - **Registry**: immutable descriptor table, built once before any
//!   compilation unit runs, shared read-only across all units
//! - **Name resolver**: `(class, method)` strings to identifiers at import
//!   time; misses are a sentinel, not an error
//! - **Signature-aware sizing**: resolves the real vector width of
//!   width-overloaded intrinsics from the call signature
//! - **Immediate evaluator**: legal ranges for constant operands and the
//!   jump-table-or-fail policy for non-constant ones
//! - **ISA oracle**: full-support and scalar-register queries per
//!   extension, plus the AVX2 gather special case
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 import (call recognition)              │
//! │        registry::lookup_id / registry::lookup_isa      │
//! └────────────────────────────┬───────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────┐
//! │                  shaping / lowering                    │
//! │   sizing::lookup_simd_size   imm::evaluate_operand     │
//! └────────────────────────────┬───────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────┐
//! │              optimization and emission                 │
//! │   flag predicates · isa oracle · registry::lookup_ins  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use hwintrin::{registry, ElementType, HwIntrinsicCategory, NamedIntrinsic};
//!
//! // Import-time recognition.
//! let id = registry::lookup_id("Sse", "Add").unwrap();
//! assert_eq!(id, NamedIntrinsic::SseAdd);
//!
//! // Everything else is a table read.
//! let info = registry::lookup(id);
//! assert_eq!(info.category, HwIntrinsicCategory::SimpleSimd);
//! assert!(info.flags.commutative);
//! assert!(info.supports_type(ElementType::F32));
//! ```

#![warn(clippy::all)]

pub mod imm;
pub mod intrinsic;
pub mod isa;
pub mod node;
pub mod registry;
pub mod sizing;

pub use imm::{ImmDecision, ImmError};
pub use intrinsic::{
    ElementType, HwIntrinsicCategory, HwIntrinsicFlags, HwIntrinsicInfo, Ins, NamedIntrinsic,
    IVAL_UNUSED, NUM_ARGS_VARIABLE,
};
pub use isa::{is_avx2_gather, InstructionSet, IsaError, TargetArch};
pub use node::{CallOperand, HwIntrinsicCall};
pub use registry::{InternalError, SpecialHandler};
pub use sizing::{CallSignature, SigType, SizingError, TypeArg};

use thiserror::Error;

/// Unit-level failure taxonomy. Every error is scoped to the single
/// compilation unit in progress; the shared registry is never mutated and
/// other units proceed unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HwIntrinsicError {
    /// Caller error on an immediate operand at a specific call site.
    #[error(transparent)]
    Imm(#[from] ImmError),

    /// Sizing or type-contract failure during shaping.
    #[error(transparent)]
    Sizing(#[from] SizingError),

    /// Target/configuration mismatch.
    #[error(transparent)]
    Isa(#[from] IsaError),

    /// A defect in the compiler itself; aborts the affected unit.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let imm_err: HwIntrinsicError =
            ImmError::NonConstWithoutFallback(NamedIntrinsic::AesKeygenAssist).into();
        assert!(matches!(imm_err, HwIntrinsicError::Imm(_)));

        let internal: HwIntrinsicError =
            InternalError::SkippedIntrinsicReachedCodegen(NamedIntrinsic::SseStaticCast).into();
        assert!(matches!(internal, HwIntrinsicError::Internal(_)));
    }

    #[test]
    fn test_error_messages_name_the_intrinsic() {
        let err = HwIntrinsicError::from(ImmError::OutOfRange {
            id: NamedIntrinsic::Sse41Extract,
            value: 4,
            upper_bound: 3,
        });
        let message = err.to_string();
        assert!(message.contains("Sse41Extract"));
        assert!(message.contains("0..=3"));
    }
}
