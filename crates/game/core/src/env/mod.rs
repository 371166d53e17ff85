//! Traits describing read-only game data.
//!
//! Oracles expose the unit catalog and the rules tables. The [`Env`] aggregate
//! bundles them so the engine can access everything it needs without hard
//! coupling to concrete implementations.
mod error;
mod rules;
mod units;

pub use error::OracleError;
pub use rules::{GameRules, HarvestYields, ImprovementCosts, MovementCosts, RulesOracle};
pub use units::{
    Abilities, UnitDefinition, UnitKind, UnitOracle, UnitRegistry, get_unit_definition,
};

/// Aggregates read-only oracles required by the validator and executor.
#[derive(Debug)]
pub struct Env<'a, U, R>
where
    U: UnitOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
    units: &'a U,
    rules: &'a R,
}

// Manual impls: deriving would require `U: Clone` and `R: Clone`.
impl<U, R> Clone for Env<'_, U, R>
where
    U: UnitOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, R> Copy for Env<'_, U, R>
where
    U: UnitOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn UnitOracle + 'a, dyn RulesOracle + 'a>;

impl<'a, U, R> Env<'a, U, R>
where
    U: UnitOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
    pub fn new(units: &'a U, rules: &'a R) -> Self {
        Self { units, rules }
    }

    pub fn units(&self) -> &'a U {
        self.units
    }

    pub fn rules(&self) -> &'a R {
        self.rules
    }
}

impl<'a, U, R> Env<'a, U, R>
where
    U: UnitOracle + 'a,
    R: RulesOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let units: &'a dyn UnitOracle = self.units;
        let rules: &'a dyn RulesOracle = self.rules;
        Env::new(units, rules)
    }
}
