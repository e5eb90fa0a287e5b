/// A single source line after trimming and classification.
///
/// Only [`Line::Addr`] and [`Line::Compute`] occupy an instruction slot;
/// blank, comment and label lines produce no output.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Line {
    /// Empty or comment-only, skipped by both passes.
    Blank,
    /// `(NAME)` definition binding a name to the next instruction index.
    Label(String),
    /// `@symbol` or `@number` address instruction, holding the raw symbol.
    Addr(String),
    /// `[dest=]comp[;jump]` compute instruction, split into its fields.
    Compute {
        dest: String,
        comp: String,
        jump: String,
    },
}

/// Classify one raw source line.
///
/// Instruction lines get all internal whitespace removed and any trailing
/// `//` comment cut before field splitting, so `D = D + 1 // inc` reads the
/// same as `D=D+1`. Splitting is on the first `=` and first `;` only.
pub fn classify(raw: &str) -> Line {
    let line = raw.trim();
    if line.is_empty() || line.starts_with("//") {
        return Line::Blank;
    }

    if let Some(rest) = line.strip_prefix('(') {
        // Name runs to the first `)`. A missing `)` passes the remainder
        // through unchanged rather than faulting.
        let name = match rest.find(')') {
            Some(end) => &rest[..end],
            None => rest,
        };
        return Line::Label(name.to_string());
    }

    let mut line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(start) = line.find("//") {
        line.truncate(start);
    }

    if let Some(symbol) = line.strip_prefix('@') {
        return Line::Addr(symbol.to_string());
    }

    let (dest, rest) = match line.split_once('=') {
        Some((dest, rest)) => (dest.to_string(), rest),
        None => (String::new(), line.as_str()),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp.to_string(), jump.to_string()),
        None => (rest.to_string(), String::new()),
    };
    Line::Compute { dest, comp, jump }
}

/// True if `symbol` is a decimal literal rather than a name.
pub(crate) fn is_literal(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.bytes().all(|b| b.is_ascii_digit())
}

/// Fold a digit string into a `u16` with wrapping arithmetic.
///
/// Literals wider than 16 bits are reduced modulo 2^16 instead of failing;
/// everything in 0..=65535 round-trips exactly.
pub(crate) fn literal(digits: &str) -> u16 {
    digits.bytes().fold(0u16, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u16::from(b - b'0'))
    })
}
