//! Fixed field-encoding tables for the Hack instruction set.
//!
//! Each table maps a mnemonic to its bit pattern, with an all-zero default
//! for anything unrecognized. Encoding is best-effort and never fails;
//! inputs are assumed well-formed.

/// Encode an address instruction: the resolved value as 16 binary digits.
///
/// Values above 15 bits keep their natural 16-bit form, so the leading bit
/// is only guaranteed `0` for in-range addresses.
pub fn addr(value: u16) -> String {
    format!("{value:016b}")
}

/// Encode a compute instruction as `111` + comp(7) + dest(3) + jump(3).
pub fn compute(dest: &str, comp: &str, jump: &str) -> String {
    format!(
        "111{}{}{}",
        comp_bits(comp),
        dest_bits(dest),
        jump_bits(jump)
    )
}

fn comp_bits(mnemonic: &str) -> &'static str {
    match mnemonic {
        "0" => "0101010",
        "1" => "0111111",
        "-1" => "0111010",
        "D" => "0001100",
        "A" => "0110000",
        "!D" => "0001101",
        "!A" => "0110001",
        "-D" => "0001111",
        "-A" => "0110011",
        "D+1" => "0011111",
        "A+1" => "0110111",
        "D-1" => "0001110",
        "A-1" => "0110010",
        "D+A" => "0000010",
        "D-A" => "0010011",
        "A-D" => "0000111",
        "D&A" => "0000000",
        "D|A" => "0010101",
        "M" => "1110000",
        "!M" => "1110001",
        "-M" => "1110011",
        "M+1" => "1110111",
        "M-1" => "1110010",
        "D+M" => "1000010",
        "D-M" => "1010011",
        "M-D" => "1000111",
        "D&M" => "1000000",
        "D|M" => "1010101",
        _ => "0000000",
    }
}

fn dest_bits(mnemonic: &str) -> &'static str {
    match mnemonic {
        "" => "000",
        "M" => "001",
        "D" => "010",
        "MD" => "011",
        "A" => "100",
        "AM" => "101",
        "AD" => "110",
        "AMD" => "111",
        _ => "000",
    }
}

fn jump_bits(mnemonic: &str) -> &'static str {
    match mnemonic {
        "" => "000",
        "JGT" => "001",
        "JEQ" => "010",
        "JGE" => "011",
        "JLT" => "100",
        "JNE" => "101",
        "JLE" => "110",
        "JMP" => "111",
        _ => "000",
    }
}
