// Line classification
mod parse;
pub use parse::{classify, Line};

// Field encoding tables
mod encode;

// Two-pass translation
mod assembler;
pub use assembler::Assembler;

// Predefined symbols and variable allocation
mod symbol;
pub use symbol::SymbolTable;
