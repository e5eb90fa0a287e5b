use fxhash::FxBuildHasher;
use indexmap::IndexMap;

// Symbol table of symbol -> memory address (ROM index for labels, RAM slot for variables)
type FxMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// First RAM address handed out to a variable.
const VAR_BASE: u16 = 16;

/// Fixed symbols every Hack program starts with.
const PREDEFINED: [(&str, u16); 23] = [
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", 16384),
    ("KBD", 24576),
];

/// Mapping of symbol names to memory addresses, plus the cursor handing out
/// fresh variable slots.
///
/// Owned by one [`Assembler`](crate::Assembler) and kept alive across its
/// `assemble` calls, so labels and variables from an earlier input stay bound
/// when the same instance is reused. A fresh table requires a fresh instance.
pub struct SymbolTable {
    map: FxMap<String, u16>,
    next_var: u16,
}

impl SymbolTable {
    /// New table holding only the predefined architectural symbols.
    pub fn new() -> Self {
        let mut map = IndexMap::with_capacity_and_hasher(PREDEFINED.len(), FxBuildHasher::default());
        for (name, addr) in PREDEFINED {
            map.insert(name.to_string(), addr);
        }
        SymbolTable {
            map,
            next_var: VAR_BASE,
        }
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    /// Bind `name` to `addr`, replacing any previous binding. Last write wins.
    pub fn bind(&mut self, name: &str, addr: u16) {
        self.map.insert(name.to_string(), addr);
    }

    /// Address of `name`, allocating the next free variable slot on first sight.
    pub fn resolve_or_allocate(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.map.get(name) {
            return *addr;
        }
        let addr = self.next_var;
        self.map.insert(name.to_string(), addr);
        self.next_var = self.next_var.wrapping_add(1);
        addr
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolTable;

    #[test]
    fn predefined_symbols() {
        let table = SymbolTable::new();
        assert_eq!(table.get("SP"), Some(0));
        assert_eq!(table.get("THAT"), Some(4));
        assert_eq!(table.get("R0"), Some(0));
        assert_eq!(table.get("R15"), Some(15));
        assert_eq!(table.get("SCREEN"), Some(16384));
        assert_eq!(table.get("KBD"), Some(24576));
        assert_eq!(table.get("LOOP"), None);
    }

    #[test]
    fn variables_allocate_from_16() {
        let mut table = SymbolTable::new();
        assert_eq!(table.resolve_or_allocate("i"), 16);
        assert_eq!(table.resolve_or_allocate("sum"), 17);
        // Repeated references resolve to the first allocation
        assert_eq!(table.resolve_or_allocate("i"), 16);
        assert_eq!(table.resolve_or_allocate("sum"), 17);
    }

    #[test]
    fn predefined_wins_over_allocation() {
        let mut table = SymbolTable::new();
        assert_eq!(table.resolve_or_allocate("KBD"), 24576);
        // No slot was consumed by the lookup above
        assert_eq!(table.resolve_or_allocate("fresh"), 16);
    }

    #[test]
    fn bind_overwrites() {
        let mut table = SymbolTable::new();
        table.bind("END", 4);
        table.bind("END", 9);
        assert_eq!(table.get("END"), Some(9));
    }
}
