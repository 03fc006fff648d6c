use um_vm::prelude::*;

use std::io::Cursor;

type TestVm = Interpreter<Cursor<Vec<u8>>, Vec<u8>>;

fn run_program(
    program: &[Instruction],
    input: &[u8],
) -> (Result<ProgramState, InterpreterError>, TestVm) {
    let image: Vec<Word> = program.iter().copied().map(Word::from).collect();

    let mut vm = Interpreter::boot(image, Cursor::new(input.to_vec()), Vec::new());
    let result = vm.run();

    (result, vm)
}

#[test]
fn input_reads_bytes_in_order() {
    let program = [
        Instruction::INP(1),
        Instruction::INP(2),
        Instruction::HALT,
    ];

    let (result, vm) = run_program(&program, b"AB");

    assert!(matches!(result, Ok(ProgramState::Halted)));
    assert_eq!(vm.registers()[1], u32::from(b'A'));
    assert_eq!(vm.registers()[2], u32::from(b'B'));
}

#[test]
fn input_at_end_of_stream_is_all_ones() {
    let program = [Instruction::INP(1), Instruction::HALT];

    let (result, vm) = run_program(&program, &[]);

    assert!(matches!(result, Ok(ProgramState::Halted)));
    assert_eq!(vm.registers()[1], 0xffff_ffff);
}

#[test]
fn echo() {
    let program = [
        Instruction::INP(0),
        Instruction::OUT(0),
        Instruction::HALT,
    ];

    let (result, vm) = run_program(&program, b"x");

    assert!(matches!(result, Ok(ProgramState::Halted)));

    let (_, output) = vm.into_io();
    assert_eq!(output, b"x");
}

#[test]
fn output_emits_single_bytes_in_program_order() {
    let program = [
        Instruction::ORTH(0, u32::from(b'h')),
        Instruction::OUT(0),
        Instruction::ORTH(0, u32::from(b'i')),
        Instruction::OUT(0),
        Instruction::HALT,
    ];

    let (result, vm) = run_program(&program, &[]);

    assert!(matches!(result, Ok(ProgramState::Halted)));

    let (_, output) = vm.into_io();
    assert_eq!(output, b"hi");
}

#[test]
fn output_above_a_byte_faults() {
    let program = [
        Instruction::ORTH(0, 256),
        Instruction::OUT(0),
        Instruction::HALT,
    ];

    let (result, _) = run_program(&program, &[]);

    assert_eq!(
        result.unwrap_err().fault_reason(),
        Some(FaultReason::OutputOutOfRange)
    );
}

#[test]
fn output_emitted_before_a_fault_stays_visible() {
    let program = [
        Instruction::ORTH(0, u32::from(b'A')),
        Instruction::OUT(0),
        Instruction::DIV(1, 1, 2),
        Instruction::HALT,
    ];

    let (result, vm) = run_program(&program, &[]);

    assert_eq!(
        result.unwrap_err().fault_reason(),
        Some(FaultReason::ArithmeticError)
    );

    let (_, output) = vm.into_io();
    assert_eq!(output, b"A");
}
