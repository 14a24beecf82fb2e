use hexcore_rs::{assemble, INSTR_BYTES};
use pretty_assertions::assert_eq;

#[test]
fn single_add_round_trip() {
    let bin = assemble("ADD 0x0001 0x0002 0x0003").unwrap();
    assert_eq!(bin, vec![0x01, 0x00, 0x01, 0x00, 0x02, 0x03]);
}

#[test]
fn two_instruction_image() {
    // Program:
    //   ADD 0xFF52 0xFF00 0x0002
    //   STL 0xFFA0 0xFF00 0x0002
    let src = "ADD 0xFF52 0xFF00 0x0002\nSTL 0xFFA0 0xFF00 0x0002\n";
    let bin = assemble(src).unwrap();
    assert_eq!(
        bin,
        vec![
            0x01, 0xFF, 0x52, 0xFF, 0x00, 0x02, //
            0x10, 0xFF, 0xA0, 0xFF, 0x00, 0x02,
        ]
    );
}

#[test]
fn output_length_is_six_per_instruction() {
    let src = "\
// boot stub
JMP 0x0000 0x0000 0x0010

ADD 0x0001 0x0001 0x0000
SUB 0x0002 0x0001 0x0000
STP 0x0000 0x0000 0x0000
";
    let bin = assemble(src).unwrap();
    assert_eq!(bin.len(), 4 * INSTR_BYTES);
}

#[test]
fn comments_and_blanks_contribute_nothing() {
    assert_eq!(assemble("").unwrap(), Vec::<u8>::new());
    assert_eq!(assemble("\n\n   \n\t\n").unwrap(), Vec::<u8>::new());
    assert_eq!(assemble("// nothing but comments\n// here\n").unwrap(), Vec::<u8>::new());
}

#[test]
fn trailing_comment_discards_the_whole_line() {
    // The marker is not a token separator: everything on the line goes,
    // including the otherwise valid instruction before it.
    let bin = assemble("ADD 0x01 0x02 0x03 // comment\nRET 0x00 0x00 0x00\n").unwrap();
    assert_eq!(bin, vec![0x17, 0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn arbitrary_whitespace_between_tokens() {
    let bin = assemble("  PRNT\t0x0001   0x0000\t\t0x0000  ").unwrap();
    assert_eq!(bin, vec![0x18, 0x00, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn assembling_twice_is_byte_identical() {
    let src = "RBUS 0x0004 0x0000 0x0001\nWBUS 0x0004 0x0000 0x0001\nSTP 0x00 0x00 0x00\n";
    let first = assemble(src).unwrap();
    let second = assemble(src).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_mnemonic_assembles() {
    for d in hexcore_rs::TABLE {
        let src = format!("{} 0x0000 0x0000 0x0000", d.mnemonic);
        let bin = assemble(&src).unwrap();
        assert_eq!(bin[0], d.opcode, "mnemonic {}", d.mnemonic);
        assert_eq!(bin.len(), INSTR_BYTES);
    }
}
