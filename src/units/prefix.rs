/// SI magnitude prefix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prefix {
    pub symbol: &'static str,
    pub multiplier: f64,
}

impl Prefix {
    pub const fn new(symbol: &'static str, multiplier: f64) -> Self {
        Self { symbol, multiplier }
    }

    /// Symbol length in characters, `µ` counts as one.
    pub fn symbol_len(&self) -> usize {
        self.symbol.chars().count()
    }
}

/// Yotta through yocto, with both the micro sign and `u` standing for micro.
pub const PREFIXES: [Prefix; 21] = [
    Prefix::new("Y", 1e24),
    Prefix::new("Z", 1e21),
    Prefix::new("E", 1e18),
    Prefix::new("P", 1e15),
    Prefix::new("T", 1e12),
    Prefix::new("G", 1e9),
    Prefix::new("M", 1e6),
    Prefix::new("k", 1e3),
    Prefix::new("h", 1e2),
    Prefix::new("da", 1e1),
    Prefix::new("d", 1e-1),
    Prefix::new("c", 1e-2),
    Prefix::new("m", 1e-3),
    Prefix::new("µ", 1e-6),
    Prefix::new("u", 1e-6),
    Prefix::new("n", 1e-9),
    Prefix::new("p", 1e-12),
    Prefix::new("f", 1e-15),
    Prefix::new("a", 1e-18),
    Prefix::new("z", 1e-21),
    Prefix::new("y", 1e-24),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<_> = PREFIXES.iter().map(|prefix| prefix.symbol).collect();
        assert_eq!(symbols.len(), PREFIXES.len());
    }

    #[test]
    fn covers_yocto_through_yotta() {
        let exponents: HashSet<_> = PREFIXES
            .iter()
            .map(|prefix| {
                #[expect(clippy::cast_possible_truncation)]
                let exponent = prefix.multiplier.log10().round() as i32;
                exponent
            })
            .collect();
        assert_eq!(exponents.len(), 20);
        assert!(exponents.contains(&-24));
        assert!(exponents.contains(&24));
        assert!(exponents.contains(&1));
        assert!(exponents.contains(&-1));
    }

    #[test]
    fn micro_spellings_are_equivalent() {
        let micro_sign = PREFIXES.iter().find(|prefix| prefix.symbol == "µ").unwrap();
        let latin_u = PREFIXES.iter().find(|prefix| prefix.symbol == "u").unwrap();
        assert_relative_eq!(micro_sign.multiplier, latin_u.multiplier);
        assert_eq!(micro_sign.symbol_len(), 1);
    }
}
