use crate::encode;
use crate::parse::{self, Line};
use crate::symbol::SymbolTable;

/// Two-pass translator from Hack assembly lines to 16-character binary strings.
///
/// The first pass records each `(LABEL)` against the index of the instruction
/// that follows it; the second pass encodes every instruction line, allocating
/// RAM slots for variables as they are first referenced.
///
/// The symbol table and variable cursor live as long as the instance and are
/// never reset, so feeding a second program through the same assembler sees
/// every binding the first one created. Callers wanting independent assemblies
/// construct a fresh instance per program.
pub struct Assembler {
    symbols: SymbolTable,
}

impl Assembler {
    /// Ready-to-use assembler with the predefined symbols seeded and the
    /// variable cursor at 16.
    pub fn new() -> Self {
        Assembler {
            symbols: SymbolTable::new(),
        }
    }

    /// Translate `lines` into one binary string per instruction, in source
    /// order. Blank, comment and label lines produce no output.
    ///
    /// There is no failure path: unrecognized mnemonics encode as their
    /// table's all-zero default and oversized literals wrap to 16 bits.
    pub fn assemble<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        // First pass: bind labels to instruction indices
        let mut counter: u16 = 0;
        for line in lines {
            match parse::classify(line.as_ref()) {
                Line::Blank => {}
                Line::Label(name) => self.symbols.bind(&name, counter),
                Line::Addr(_) | Line::Compute { .. } => counter = counter.wrapping_add(1),
            }
        }

        // Second pass: encode
        let mut binary = Vec::with_capacity(counter as usize);
        for line in lines {
            match parse::classify(line.as_ref()) {
                Line::Blank | Line::Label(_) => {}
                Line::Addr(symbol) => {
                    let value = if parse::is_literal(&symbol) {
                        parse::literal(&symbol)
                    } else {
                        self.symbols.resolve_or_allocate(&symbol)
                    };
                    binary.push(encode::addr(value));
                }
                Line::Compute { dest, comp, jump } => {
                    binary.push(encode::compute(&dest, &comp, &jump));
                }
            }
        }
        binary
    }

    /// Convenience over [`assemble`](Self::assemble) for a whole source text.
    pub fn assemble_source(&mut self, src: &str) -> Vec<String> {
        let lines: Vec<&str> = src.lines().collect();
        self.assemble(&lines)
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
