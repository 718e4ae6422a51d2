//! End-to-end tests of the VM against a mocked host.

use lite_evm::{
    Capabilities, ExecutionResult, Host, Message, Revision, SetOptionResult, StatusCode,
    StorageStatus, Vm, VmConfig,
};
use lite_evm_tests::{HostCall, MockedHost};
use lite_primitives::{Address, Word};
use proptest::prelude::*;

fn sender() -> Address {
    Address::from_hex("0x5000000000000000000000000000000000000005").unwrap()
}

fn destination() -> Address {
    Address::from_hex("0xd00000000000000000000000000000000000000d").unwrap()
}

fn execute(
    vm: &Vm,
    host: &mut MockedHost,
    revision: Revision,
    code: &[u8],
    gas: i64,
) -> ExecutionResult {
    let msg = Message::call(sender(), destination(), gas);
    vm.execute(host, revision, &msg, code)
}

#[test]
fn return_address() {
    let vm = Vm::new();
    let mut host = MockedHost::new();
    let code = hex::decode("306000526014600cf3").unwrap();

    let result = execute(&vm, &mut host, Revision::Frontier, &code, 6);

    assert_eq!(result.status, StatusCode::Success);
    assert_eq!(result.gas_left, 0);
    assert_eq!(hex::encode(&result.output), "d00000000000000000000000000000000000000d");
    assert!(host.recorded_calls().is_empty());
}

#[test]
fn counter_in_storage() {
    let vm = Vm::new();
    let mut host = MockedHost::new();
    host.set_storage_value(&destination(), &Word::ZERO, &Word::from_low_u8(0xbb));
    let code = hex::decode("600160005401600055").unwrap();

    let result = execute(&vm, &mut host, Revision::Frontier, &code, 6);

    assert_eq!(result.status, StatusCode::Success);
    assert_eq!(result.gas_left, 0);
    assert!(result.output.is_empty());
    assert_eq!(host.storage_value(&destination(), &Word::ZERO), Word::from_low_u8(0xbc));
    assert_eq!(
        host.recorded_calls(),
        vec![
            HostCall::GetStorage {
                address: destination(),
                key: Word::ZERO
            },
            HostCall::SetStorage {
                address: destination(),
                key: Word::ZERO,
                value: Word::from_low_u8(0xbc),
                status: StorageStatus::Modified,
            },
        ]
    );
}

#[test]
fn counter_wraps_in_low_byte() {
    let vm = Vm::new();
    let mut host = MockedHost::new();
    host.set_storage_value(&destination(), &Word::ZERO, &Word::from_low_u8(0xff));
    let code = hex::decode("600160005401600055").unwrap();

    let result = execute(&vm, &mut host, Revision::Frontier, &code, 6);

    assert!(result.is_success());
    assert_eq!(host.storage_value(&destination(), &Word::ZERO), Word::ZERO);
}

#[test]
fn vm_identity() {
    let vm = Vm::new();
    assert_eq!(vm.name(), "lite_evm");
    assert!(!vm.version().is_empty());
    assert_eq!(vm.capabilities(), Capabilities::EVM1);
}

#[test]
fn set_option_verbose_values() {
    let mut vm = Vm::new();
    for (value, expected) in [("0x3", 3), ("010", 8), ("5abc", 5), (" 7", 7), ("-1", -1), ("9", 9)] {
        assert_eq!(vm.set_option("verbose", value), SetOptionResult::Success, "{}", value);
        assert_eq!(vm.config().verbose, expected, "{}", value);
    }

    for value in ["", "x", "10", "-2", "0x10"] {
        assert_eq!(vm.set_option("verbose", value), SetOptionResult::InvalidValue, "{}", value);
        assert_eq!(vm.config().verbose, 9);
    }

    assert_eq!(vm.set_option("optimize", "1"), SetOptionResult::InvalidName);
    assert_eq!(vm.config().verbose, 9);
}

#[test]
fn revert_is_gated_by_revision() {
    let vm = Vm::new();
    // PUSH1 0x2a, PUSH1 0, MSTORE, PUSH1 1, PUSH1 31, REVERT
    let code = hex::decode("602a6000526001601ffd").unwrap();

    for revision in Revision::ALL {
        let result = execute(&vm, &mut MockedHost::new(), revision, &code, 100);
        if revision >= Revision::Byzantium {
            assert_eq!(result, ExecutionResult::revert(94, vec![0x2a]), "{}", revision);
        } else {
            assert_eq!(
                result,
                ExecutionResult::failure(StatusCode::UndefinedInstruction),
                "{}",
                revision
            );
        }
    }
}

#[test]
fn undefined_opcodes_fail() {
    let vm = Vm::new();
    for byte in [0x02u8, 0x0c, 0x20, 0x31, 0x56, 0x5f, 0x80, 0xa0, 0xf0, 0xfe, 0xff] {
        let result = execute(&vm, &mut MockedHost::new(), Revision::MAX, &[byte], 10);
        assert_eq!(
            result,
            ExecutionResult::failure(StatusCode::UndefinedInstruction),
            "0x{:02x}",
            byte
        );
    }
}

#[test]
fn number_is_read_from_host_context() {
    let vm = Vm::new();
    let mut host = MockedHost::new();
    host.set_block_number(0x0102);
    // NUMBER, PUSH1 0, SSTORE
    let code = hex::decode("4360005500").unwrap();

    let result = execute(&vm, &mut host, Revision::Frontier, &code, 10);

    assert!(result.is_success());
    assert_eq!(host.storage_value(&destination(), &Word::ZERO), Word::from_low_u8(0x02));
    assert_eq!(host.recorded_calls()[0], HostCall::GetTxContext);
}

#[test]
fn result_outlives_vm_and_host() {
    let result = {
        let vm = Vm::new();
        let mut host = MockedHost::new();
        let code = hex::decode("306000526014600cf3").unwrap();
        execute(&vm, &mut host, Revision::Frontier, &code, 6)
    };
    assert_eq!(result.output, destination().as_bytes().to_vec());
}

#[test]
fn execution_is_deterministic() {
    let vm = Vm::new();
    let code = hex::decode("600160005401600055").unwrap();

    let run = || {
        let mut host = MockedHost::new();
        host.set_storage_value(&destination(), &Word::ZERO, &Word::from_low_u8(0x10));
        let result = execute(&vm, &mut host, Revision::London, &code, 50);
        (result, host.storage(&destination()), host.recorded_calls())
    };

    assert_eq!(run(), run());
}

#[test]
fn concurrent_executions_share_one_vm() {
    let vm = Vm::with_config(VmConfig::default());
    let host = MockedHost::new();
    let code = hex::decode("600160005401600055").unwrap();

    std::thread::scope(|s| {
        for i in 0..8u8 {
            let mut host = host.clone();
            let vm = &vm;
            let code = &code;
            s.spawn(move || {
                let msg = Message::call(sender(), Address::from_bytes([i + 1; 20]), 6);
                for _ in 0..10 {
                    let result = vm.execute(&mut host, Revision::Frontier, &msg, code);
                    assert_eq!(result, ExecutionResult::success(0, vec![]));
                }
            });
        }
    });

    for i in 0..8u8 {
        let account = Address::from_bytes([i + 1; 20]);
        assert_eq!(host.storage_value(&account, &Word::ZERO), Word::from_low_u8(10));
    }
    assert_eq!(host.recorded_calls().len(), 8 * 10 * 2);
}

#[test]
fn boxed_host_can_be_used() {
    let vm = Vm::new();
    let shared = MockedHost::new();
    let mut boxed: Box<dyn Host> = Box::new(shared.clone());
    let msg = Message::call(sender(), destination(), 10);

    let code = hex::decode("6005600055").unwrap();

    let result = vm.execute(&mut boxed, Revision::Frontier, &msg, &code);

    assert!(result.is_success());
    assert_eq!(shared.storage_value(&destination(), &Word::ZERO), Word::from_low_u8(5));
}

proptest! {
    #[test]
    fn gas_is_charged_once_per_instruction(count in 0usize..1024, gas in 0i64..2048) {
        let vm = Vm::new();
        let code = vec![0x30u8; count];
        let result = execute(&vm, &mut MockedHost::new(), Revision::Frontier, &code, gas);

        if gas >= count as i64 {
            prop_assert_eq!(result, ExecutionResult::success(gas - count as i64, vec![]));
        } else {
            prop_assert_eq!(result, ExecutionResult::failure(StatusCode::OutOfGas));
        }
    }

    #[test]
    fn arbitrary_code_respects_result_shape(
        code in proptest::collection::vec(any::<u8>(), 0..64),
        gas in 0i64..128,
    ) {
        let vm = Vm::new();
        let first = execute(&vm, &mut MockedHost::new(), Revision::Cancun, &code, gas);
        let second = execute(&vm, &mut MockedHost::new(), Revision::Cancun, &code, gas);
        prop_assert_eq!(&first, &second);

        match first.status {
            StatusCode::Success | StatusCode::Revert => {
                prop_assert!(first.gas_left >= 0 && first.gas_left <= gas);
            }
            _ => {
                prop_assert_eq!(first.gas_left, 0);
                prop_assert!(first.output.is_empty());
            }
        }
    }
}
