//! Per-intrinsic behavioral traits.
//!
//! Each trait is an independent boolean: no field implies or excludes
//! another by construction. Apparent correlations in the authored table
//! (e.g. memory intrinsics usually carrying `no_containment`) are data
//! conventions, not invariants of this type.
//!
//! The record is built in const context with chainable setters:
//!
//! ```
//! use hwintrin::HwIntrinsicFlags;
//!
//! const FLAGS: HwIntrinsicFlags = HwIntrinsicFlags::NONE.commutative().full_range_imm();
//! assert!(FLAGS.commutative && FLAGS.full_range_imm);
//! assert!(!FLAGS.maybe_imm);
//! ```

/// Behavioral trait set for one hardware intrinsic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HwIntrinsicFlags {
    /// Operand order may be swapped; either operand of a binary op is
    /// eligible for memory-operand containment.
    pub commutative: bool,
    /// A required immediate operand is valid over the full imm8 range
    /// (0-255); absent means the legal range is narrower and authored
    /// per intrinsic.
    pub full_range_imm: bool,
    /// One generic type parameter; a non-numeric type argument is a caller
    /// error.
    pub one_type_generic: bool,
    /// Two generic type parameters; same numeric contract as above.
    pub two_type_generic: bool,
    /// Must be rewritten during early shaping and never reach emission in
    /// its original form.
    pub skip_codegen: bool,
    /// The table's nominal SIMD size is unreliable; the actual width comes
    /// from the call signature.
    pub unfixed_simd_size: bool,
    /// Emission legitimately produces more than one machine instruction.
    pub multi_ins: bool,
    /// Never foldable as a memory operand, even when the operation
    /// resembles a load or store.
    pub no_containment: bool,
    /// Scalar-lane form that must preserve the upper lanes of a designated
    /// source operand.
    pub copy_upper_bits: bool,
    /// The base element type is inferred from the first call operand.
    pub base_type_from_first_arg: bool,
    /// Emission need not mark the enclosing function as using
    /// floating-point state.
    pub no_floating_point_used: bool,
    /// Has both an immediate overload and a vector (non-constant) overload;
    /// resolved per call site.
    pub maybe_imm: bool,
    /// No jump-table fallback exists for a non-constant immediate operand;
    /// such a call is a hard compile failure.
    pub no_jmp_table_imm: bool,
    /// Valid only when general-purpose registers are 64 bits wide.
    pub sixty_four_bit_only: bool,
    /// The second operand may be 64 bits wide even in otherwise 32-bit
    /// forms.
    pub second_arg_maybe_64bit: bool,
    /// The base element type is inferred from the second call operand.
    pub base_type_from_second_arg: bool,
    /// Emission applies intrinsic-specific rules on top of the table data.
    pub special_codegen: bool,
    /// The destination operand is not implicitly a source (non-destructive
    /// three-operand encodings).
    pub no_rmw_semantics: bool,
    /// Import applies intrinsic-specific rules on top of the table data.
    pub special_import: bool,
    /// Has a pointer overload although the category is not MemoryLoad.
    pub maybe_memory_load: bool,
    /// Has a pointer overload although the category is not MemoryStore.
    pub maybe_memory_store: bool,
}

macro_rules! flag_setters {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub const fn $name(mut self) -> Self {
                self.$name = true;
                self
            }
        )+
    };
}

impl HwIntrinsicFlags {
    /// The empty trait set.
    pub const NONE: HwIntrinsicFlags = HwIntrinsicFlags {
        commutative: false,
        full_range_imm: false,
        one_type_generic: false,
        two_type_generic: false,
        skip_codegen: false,
        unfixed_simd_size: false,
        multi_ins: false,
        no_containment: false,
        copy_upper_bits: false,
        base_type_from_first_arg: false,
        no_floating_point_used: false,
        maybe_imm: false,
        no_jmp_table_imm: false,
        sixty_four_bit_only: false,
        second_arg_maybe_64bit: false,
        base_type_from_second_arg: false,
        special_codegen: false,
        no_rmw_semantics: false,
        special_import: false,
        maybe_memory_load: false,
        maybe_memory_store: false,
    };

    flag_setters!(
        commutative,
        full_range_imm,
        one_type_generic,
        two_type_generic,
        skip_codegen,
        unfixed_simd_size,
        multi_ins,
        no_containment,
        copy_upper_bits,
        base_type_from_first_arg,
        no_floating_point_used,
        maybe_imm,
        no_jmp_table_imm,
        sixty_four_bit_only,
        second_arg_maybe_64bit,
        base_type_from_second_arg,
        special_codegen,
        no_rmw_semantics,
        special_import,
        maybe_memory_load,
        maybe_memory_store,
    );
}
