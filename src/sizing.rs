//! Signature-aware SIMD sizing and base-element-type inference.
//!
//! A descriptor's nominal `simd_size` is unreliable for intrinsics that
//! overload on multiple vector widths (`unfixed_simd_size`): the same
//! identifier covers the 128-bit and 256-bit forms, and only the call's
//! resolved signature says which one this call site is. Likewise, some
//! intrinsics' own return type does not determine the base element type
//! driving opcode-row selection; it must come from a designated operand.
//! Both resolutions are pure functions over the signature view the
//! type-system context hands us.

use thiserror::Error;

use crate::intrinsic::{ElementType, NamedIntrinsic};
use crate::registry;

/// One resolved type in a call signature, as this engine needs to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigType {
    /// A SIMD vector type of the given width and element type.
    Vector { bits: u32, elem: ElementType },
    /// A scalar numeric type.
    Scalar(ElementType),
    /// A pointer argument (memory overloads).
    Pointer,
    /// No value (void return, or a slot the front-end has not resolved).
    Void,
}

impl SigType {
    pub fn vector_bits(&self) -> Option<u32> {
        match self {
            SigType::Vector { bits, .. } => Some(*bits),
            _ => None,
        }
    }

    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            SigType::Vector { elem, .. } => Some(*elem),
            SigType::Scalar(elem) => Some(*elem),
            SigType::Pointer | SigType::Void => None,
        }
    }
}

/// A generic type argument as supplied at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeArg {
    Numeric(ElementType),
    NonNumeric,
}

/// The resolved signature of one intrinsic call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSignature {
    pub return_type: SigType,
    pub args: Vec<SigType>,
    pub type_args: Vec<TypeArg>,
}

impl CallSignature {
    /// Signature with no generic type arguments.
    pub fn new(return_type: SigType, args: Vec<SigType>) -> Self {
        CallSignature {
            return_type,
            args,
            type_args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizingError {
    /// Internal-consistency failure: an `unfixed_simd_size` intrinsic whose
    /// signature names no vector type at all. Identifiers reaching this
    /// path were produced by the compiler, so this is a compiler defect.
    #[error("cannot determine the SIMD width of {0:?} from its call signature")]
    AmbiguousSimdSize(NamedIntrinsic),

    /// Internal-consistency failure: the designated base-type source
    /// carries no element type.
    #[error("cannot infer the base element type of {0:?} from its call signature")]
    AmbiguousBaseType(NamedIntrinsic),

    /// Caller error: a generic intrinsic instantiated with a non-numeric
    /// type argument.
    #[error("{id:?} instantiated with a non-numeric type argument at position {index}")]
    NonNumericTypeArg { id: NamedIntrinsic, index: usize },
}

/// The actual vector width of a call site, in bits.
///
/// Fixed-size intrinsics report the table value unchanged. Unfixed ones
/// are resolved from the signature: a 256-bit-class vector anywhere in
/// return or argument position means the wide form, otherwise the
/// narrower form the signature names. Never guesses.
pub fn lookup_simd_size(id: NamedIntrinsic, sig: &CallSignature) -> Result<u32, SizingError> {
    let info = registry::lookup(id);
    if info.has_fixed_simd_size() {
        return Ok(info.simd_size);
    }
    let widest = std::iter::once(&sig.return_type)
        .chain(sig.args.iter())
        .filter_map(SigType::vector_bits)
        .max();
    widest.ok_or(SizingError::AmbiguousSimdSize(id))
}

/// The base element type that selects this call's opcode-row slot.
///
/// Most intrinsics take it from the return type; `base_type_from_first_arg`
/// and `base_type_from_second_arg` redirect the inference to the named
/// operand.
pub fn resolve_base_type(
    id: NamedIntrinsic,
    sig: &CallSignature,
) -> Result<ElementType, SizingError> {
    let info = registry::lookup(id);
    let source = if info.flags.base_type_from_first_arg {
        sig.args.first()
    } else if info.flags.base_type_from_second_arg {
        sig.args.get(1)
    } else {
        Some(&sig.return_type)
    };
    source
        .and_then(SigType::element_type)
        .ok_or(SizingError::AmbiguousBaseType(id))
}

/// Enforces the numeric contract of generic intrinsics: every supplied
/// type argument of a `one_type_generic`/`two_type_generic` intrinsic
/// must be a numeric type.
pub fn validate_type_args(id: NamedIntrinsic, sig: &CallSignature) -> Result<(), SizingError> {
    let info = registry::lookup(id);
    if !info.flags.one_type_generic && !info.flags.two_type_generic {
        return Ok(());
    }
    for (index, type_arg) in sig.type_args.iter().enumerate() {
        if matches!(type_arg, TypeArg::NonNumeric) {
            return Err(SizingError::NonNumericTypeArg { id, index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v128(elem: ElementType) -> SigType {
        SigType::Vector { bits: 128, elem }
    }

    fn v256(elem: ElementType) -> SigType {
        SigType::Vector { bits: 256, elem }
    }

    #[test]
    fn test_fixed_size_ignores_signature() {
        // Avx.Add is a fixed 256-bit intrinsic; the signature is not consulted.
        let sig = CallSignature::new(SigType::Void, vec![]);
        assert_eq!(lookup_simd_size(NamedIntrinsic::AvxAdd, &sig), Ok(256));
        assert_eq!(lookup_simd_size(NamedIntrinsic::SseAdd, &sig), Ok(128));
    }

    #[test]
    fn test_unfixed_size_from_return_type() {
        let sig = CallSignature::new(
            v256(ElementType::F32),
            vec![v256(ElementType::F32), SigType::Scalar(ElementType::U8)],
        );
        assert_eq!(lookup_simd_size(NamedIntrinsic::AvxPermute, &sig), Ok(256));

        let sig = CallSignature::new(
            v128(ElementType::F32),
            vec![v128(ElementType::F32), SigType::Scalar(ElementType::U8)],
        );
        assert_eq!(lookup_simd_size(NamedIntrinsic::AvxPermute, &sig), Ok(128));
    }

    #[test]
    fn test_unfixed_size_from_arguments_when_return_is_scalar() {
        // Avx.TestZ returns bool; only the arguments carry the width.
        let sig = CallSignature::new(
            SigType::Scalar(ElementType::U8),
            vec![v256(ElementType::I32), v256(ElementType::I32)],
        );
        assert_eq!(lookup_simd_size(NamedIntrinsic::AvxTestZ, &sig), Ok(256));
    }

    #[test]
    fn test_unfixed_size_without_vector_is_internal_failure() {
        let sig = CallSignature::new(SigType::Void, vec![SigType::Pointer]);
        assert_eq!(
            lookup_simd_size(NamedIntrinsic::FmaMultiplyAdd, &sig),
            Err(SizingError::AmbiguousSimdSize(NamedIntrinsic::FmaMultiplyAdd))
        );
    }

    #[test]
    fn test_base_type_from_return_by_default() {
        let sig = CallSignature::new(
            v128(ElementType::F32),
            vec![v128(ElementType::F32), v128(ElementType::F32)],
        );
        assert_eq!(
            resolve_base_type(NamedIntrinsic::SseAdd, &sig),
            Ok(ElementType::F32)
        );
    }

    #[test]
    fn test_base_type_from_first_arg() {
        // Sse.MoveMask returns an int mask; the vector operand names the type.
        let sig = CallSignature::new(
            SigType::Scalar(ElementType::I32),
            vec![v128(ElementType::F32)],
        );
        assert_eq!(
            resolve_base_type(NamedIntrinsic::SseMoveMask, &sig),
            Ok(ElementType::F32)
        );
    }

    #[test]
    fn test_base_type_from_second_arg() {
        // Crc32's accumulator is fixed-width; the data operand picks the form.
        let sig = CallSignature::new(
            SigType::Scalar(ElementType::U32),
            vec![
                SigType::Scalar(ElementType::U32),
                SigType::Scalar(ElementType::U16),
            ],
        );
        assert_eq!(
            resolve_base_type(NamedIntrinsic::Sse42Crc32, &sig),
            Ok(ElementType::U16)
        );
    }

    #[test]
    fn test_base_type_source_without_element_type_is_internal_failure() {
        let sig = CallSignature::new(SigType::Scalar(ElementType::I32), vec![SigType::Pointer]);
        assert_eq!(
            resolve_base_type(NamedIntrinsic::SseMoveMask, &sig),
            Err(SizingError::AmbiguousBaseType(NamedIntrinsic::SseMoveMask))
        );
    }

    #[test]
    fn test_generic_type_contract() {
        let mut sig = CallSignature::new(v256(ElementType::F64), vec![]);
        sig.type_args = vec![TypeArg::Numeric(ElementType::F64)];
        assert_eq!(
            validate_type_args(NamedIntrinsic::AvxSetAllVector256, &sig),
            Ok(())
        );

        sig.type_args = vec![TypeArg::NonNumeric];
        assert_eq!(
            validate_type_args(NamedIntrinsic::AvxSetAllVector256, &sig),
            Err(SizingError::NonNumericTypeArg {
                id: NamedIntrinsic::AvxSetAllVector256,
                index: 0
            })
        );

        // StaticCast checks both of its type parameters.
        sig.type_args = vec![TypeArg::Numeric(ElementType::I32), TypeArg::NonNumeric];
        assert_eq!(
            validate_type_args(NamedIntrinsic::SseStaticCast, &sig),
            Err(SizingError::NonNumericTypeArg {
                id: NamedIntrinsic::SseStaticCast,
                index: 1
            })
        );

        // Non-generic intrinsics ignore type arguments entirely.
        assert_eq!(validate_type_args(NamedIntrinsic::SseAdd, &sig), Ok(()));
    }
}
