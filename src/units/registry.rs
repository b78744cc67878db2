use std::{borrow::Cow, cmp::Reverse, collections::BTreeMap, sync::LazyLock};

use crate::units::{BASE_UNITS, PREFIXES, Prefix, Unit, UnitError};

/// Process-wide registry of the units the vendor reports in.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::default);

/// Known base units and SI prefixes.
///
/// Read-only once built.
pub struct Registry {
    base_units: BTreeMap<Cow<'static, str>, Unit>,

    /// Longest symbol first, so that `da` is tried before `d`.
    prefixes: Vec<Prefix>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(BASE_UNITS, PREFIXES)
    }
}

impl Registry {
    pub fn new(
        base_units: impl IntoIterator<Item = Unit>,
        prefixes: impl IntoIterator<Item = Prefix>,
    ) -> Self {
        let base_units = base_units.into_iter().map(|unit| (unit.symbol.clone(), unit)).collect();
        let mut prefixes: Vec<_> = prefixes.into_iter().collect();
        prefixes.sort_by_key(|prefix| Reverse(prefix.symbol_len()));
        Self { base_units, prefixes }
    }

    pub fn base_unit(&self, symbol: &str) -> Option<&Unit> {
        self.base_units.get(symbol)
    }

    pub fn base_units(&self) -> impl Iterator<Item = &Unit> {
        self.base_units.values()
    }

    pub fn prefix(&self, symbol: &str) -> Option<&Prefix> {
        self.prefixes.iter().find(|prefix| prefix.symbol == symbol)
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    /// Resolve a unit symbol, either a base unit as is or a prefixed one like `kWh`.
    ///
    /// Base units are returned unchanged, prefixed units are built anew on every call.
    pub fn resolve(&self, symbol: &str) -> Result<Unit, UnitError> {
        if let Some(unit) = self.base_unit(symbol) {
            return Ok(unit.clone());
        }
        self.prefixes
            .iter()
            .find_map(|prefix| {
                let remainder =
                    symbol.strip_prefix(prefix.symbol).filter(|remainder| !remainder.is_empty())?;
                self.base_unit(remainder).map(|unit| unit.with_prefix(prefix))
            })
            .ok_or_else(|| UnitError::UnknownUnit(symbol.to_owned()))
    }
}
