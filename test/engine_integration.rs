//! End-to-end scenarios across the whole engine: import-time recognition
//! through shaping-time sizing and immediate validation, plus the
//! concurrent-lookup property of the shared immutable registry.

use std::thread;

use hwintrin::{
    imm, is_avx2_gather, isa, registry, sizing, CallOperand, CallSignature, ElementType,
    HwIntrinsicCall, HwIntrinsicCategory, ImmDecision, ImmError, Ins, InstructionSet,
    NamedIntrinsic, SigType, TargetArch,
};

fn v128(elem: ElementType) -> SigType {
    SigType::Vector { bits: 128, elem }
}

fn v256(elem: ElementType) -> SigType {
    SigType::Vector { bits: 256, elem }
}

// ============================================================================
// Import-to-emission walkthroughs
// ============================================================================

#[test]
fn test_sse_add_end_to_end() {
    // Recognition.
    let id = registry::lookup_id("Sse", "Add").expect("Sse.Add is registered");

    // Classification.
    let info = registry::lookup(id);
    assert_eq!(info.category, HwIntrinsicCategory::SimpleSimd);
    assert!(info.flags.commutative);
    assert_eq!(info.isa, InstructionSet::Sse);

    // Opcode selection at the single-precision slot.
    let ins = registry::lookup_ins(id, ElementType::F32);
    assert!(ins.is_valid());
    assert_eq!(ins, Ins::Addps);

    // Emission guard: nothing marked this for rewriting.
    assert_eq!(registry::check_codegen_reachable(id), Ok(()));
}

#[test]
fn test_four_lane_extract_immediate_law() {
    // Sse41.Extract indexes one of four single-precision lanes.
    let id = registry::lookup_id("Sse41", "Extract").unwrap();
    for lane in 0..=3 {
        assert_eq!(imm::validate_imm(id, lane), Ok(()));
    }
    assert!(matches!(
        imm::validate_imm(id, 4),
        Err(ImmError::OutOfRange {
            value: 4,
            upper_bound: 3,
            ..
        })
    ));
    assert!(imm::validate_imm(id, -1).is_err());
}

#[test]
fn test_shuffle_call_site_shaping() {
    // Sse.Shuffle(v1, v2, 0b00_01_10_11): recognize, then classify the
    // trailing operand as the immediate and validate it.
    let id = registry::lookup_id("Sse", "Shuffle").unwrap();
    let call = HwIntrinsicCall::new(
        id,
        vec![
            CallOperand::Value,
            CallOperand::Value,
            CallOperand::Const(0b00_01_10_11),
        ],
    );
    assert_eq!(call.num_args(), 3);
    assert!(call.is_imm_operand(2));

    let decision = imm::evaluate_operand(id, call.last_op().unwrap()).unwrap();
    assert_eq!(decision, ImmDecision::Constant(0b00_01_10_11));
}

#[test]
fn test_non_const_immediate_policies() {
    // Jump-table-eligible: the shaping pass gets a dispatch request.
    let extract = registry::lookup_id("Sse41", "Extract").unwrap();
    assert_eq!(
        imm::evaluate_operand(extract, &CallOperand::Value),
        Ok(ImmDecision::JumpTable { upper_bound: 3 })
    );

    // No fallback exists: hard failure for the call.
    let keygen = registry::lookup_id("Aes", "KeygenAssist").unwrap();
    assert_eq!(
        imm::evaluate_operand(keygen, &CallOperand::Value),
        Err(ImmError::NonConstWithoutFallback(keygen))
    );
}

#[test]
fn test_width_overloaded_permute_sizing() {
    let id = registry::lookup_id("Avx", "Permute").unwrap();
    assert!(!registry::lookup(id).has_fixed_simd_size());

    let narrow = CallSignature::new(
        v128(ElementType::F32),
        vec![v128(ElementType::F32), SigType::Scalar(ElementType::U8)],
    );
    assert_eq!(sizing::lookup_simd_size(id, &narrow), Ok(128));

    let wide = CallSignature::new(
        v256(ElementType::F32),
        vec![v256(ElementType::F32), SigType::Scalar(ElementType::U8)],
    );
    assert_eq!(sizing::lookup_simd_size(id, &wide), Ok(256));
}

#[test]
fn test_property_check_folding_inputs() {
    // The importer folds get_IsSupported to constant true only for fully
    // implemented extensions.
    let id = registry::lookup_id("Sse42", "get_IsSupported").unwrap();
    let info = registry::lookup(id);
    assert_eq!(info.category, HwIntrinsicCategory::IsSupportedProperty);
    assert!(info.isa.is_fully_implemented());

    let partial = registry::lookup_id("Fma", "get_IsSupported").unwrap();
    assert!(!registry::lookup(partial).isa.is_fully_implemented());
}

#[test]
fn test_scalar_isa_disables_vector_treatment() {
    let id = registry::lookup_id("Popcnt", "PopCount").unwrap();
    let info = registry::lookup(id);
    assert_eq!(info.category, HwIntrinsicCategory::Scalar);
    assert!(info.isa.is_scalar());
    assert!(!info.is_floating_point_used());
}

#[test]
fn test_gather_recognition_is_independent_of_category() {
    let id = registry::lookup_id("Avx2", "GatherMaskVector256").unwrap();
    // Not a generic memory load; its operand shape needs dedicated handling.
    let info = registry::lookup(id);
    assert_eq!(info.category, HwIntrinsicCategory::Special);
    assert!(is_avx2_gather(id));
    assert!(info.flags.special_import);
    assert!(!info.supports_containment());
}

#[test]
fn test_pointer_overloads_outside_memory_categories() {
    // Category alone must not be used to detect memory access.
    let insert = registry::lookup(NamedIntrinsic::AvxInsertVector128);
    assert_eq!(insert.category, HwIntrinsicCategory::Imm);
    assert!(insert.flags.maybe_memory_load);

    let extract = registry::lookup(NamedIntrinsic::AvxExtractVector128);
    assert!(extract.flags.maybe_memory_store);
}

#[test]
fn test_64bit_only_target_gate() {
    let id = registry::lookup_id("Sse2", "ConvertToInt64").unwrap();
    let info = registry::lookup(id);
    assert_eq!(isa::validate_target(info, TargetArch::X64), Ok(()));
    assert!(isa::validate_target(info, TargetArch::X86).is_err());
}

// ============================================================================
// Concurrency: shared immutable state, no divergence
// ============================================================================

#[test]
fn test_concurrent_lookups_match_sequential() {
    const WORKERS: usize = 16;

    // Sequential baseline over every descriptor.
    let baseline: Vec<_> = registry::all()
        .map(|info| {
            (
                info.id,
                registry::lookup_id(info.isa.class_name(), info.name),
                registry::lookup_ins(info.id, ElementType::F32),
                info.flags,
                info.category,
            )
        })
        .collect();

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let expected = baseline.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let observed: Vec<_> = registry::all()
                        .map(|info| {
                            (
                                info.id,
                                registry::lookup_id(info.isa.class_name(), info.name),
                                registry::lookup_ins(info.id, ElementType::F32),
                                info.flags,
                                info.category,
                            )
                        })
                        .collect();
                    assert_eq!(observed, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

#[test]
fn test_concurrent_imm_evaluation() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                for value in 0..=255i64 {
                    let ok = imm::is_in_imm_range(NamedIntrinsic::SseShuffle, value);
                    assert!(ok, "worker {} saw {} rejected", worker, value);
                    let lane_ok = imm::is_in_imm_range(NamedIntrinsic::Sse41Extract, value);
                    assert_eq!(lane_ok, value <= 3);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
