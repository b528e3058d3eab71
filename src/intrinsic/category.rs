//! Codegen-shape categories for hardware intrinsics.
//!
//! Every intrinsic belongs to exactly one category. The category sets the
//! default expectations for import and emission; the per-intrinsic flag set
//! (`HwIntrinsicFlags`) refines or overrides them.

/// The codegen shape of a hardware intrinsic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HwIntrinsicCategory {
    /// Vector-in, vector-out. Opcode selection is driven entirely by the
    /// base element type of the returned vector.
    SimpleSimd,

    /// The `get_IsSupported` property of an ISA class. Folds to a
    /// compile-time constant when the backend fully implements the ISA.
    IsSupportedProperty,

    /// Requires a compile-time-constant immediate operand (imm8) to encode
    /// the instruction.
    Imm,

    /// Operates over general-purpose registers (crc32, lzcnt, popcnt, ...).
    Scalar,

    /// Operates over vector registers but computes only the first element.
    SimdScalar,

    /// Explicit memory load (Sse.LoadVector128, Avx.LoadVector256, ...).
    MemoryLoad,

    /// Explicit memory store (Sse.Store, Sse2.MaskMove, ...).
    MemoryStore,

    /// No one-to-one native instruction; must be expanded into other
    /// operations before emission.
    Helper,

    /// Defies table-driven classification; both import and emission apply
    /// bespoke rules on top of the table data.
    Special,
}

impl HwIntrinsicCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HwIntrinsicCategory::SimpleSimd => "simple-simd",
            HwIntrinsicCategory::IsSupportedProperty => "is-supported-property",
            HwIntrinsicCategory::Imm => "imm",
            HwIntrinsicCategory::Scalar => "scalar",
            HwIntrinsicCategory::SimdScalar => "simd-scalar",
            HwIntrinsicCategory::MemoryLoad => "memory-load",
            HwIntrinsicCategory::MemoryStore => "memory-store",
            HwIntrinsicCategory::Helper => "helper",
            HwIntrinsicCategory::Special => "special",
        }
    }

    /// Whether the category itself implies a memory access. Intrinsics with
    /// pointer overloads outside these categories carry the
    /// `maybe_memory_load`/`maybe_memory_store` flags instead.
    pub fn is_memory_access(&self) -> bool {
        matches!(
            self,
            HwIntrinsicCategory::MemoryLoad | HwIntrinsicCategory::MemoryStore
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_unique() {
        let all = [
            HwIntrinsicCategory::SimpleSimd,
            HwIntrinsicCategory::IsSupportedProperty,
            HwIntrinsicCategory::Imm,
            HwIntrinsicCategory::Scalar,
            HwIntrinsicCategory::SimdScalar,
            HwIntrinsicCategory::MemoryLoad,
            HwIntrinsicCategory::MemoryStore,
            HwIntrinsicCategory::Helper,
            HwIntrinsicCategory::Special,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_memory_access_categories() {
        assert!(HwIntrinsicCategory::MemoryLoad.is_memory_access());
        assert!(HwIntrinsicCategory::MemoryStore.is_memory_access());
        assert!(!HwIntrinsicCategory::SimpleSimd.is_memory_access());
        assert!(!HwIntrinsicCategory::Special.is_memory_access());
    }
}
