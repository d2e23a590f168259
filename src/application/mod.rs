pub mod chart_builder;
pub mod symbol_lookup;

pub use chart_builder::{ChartBuilder, PortfolioChart};
pub use symbol_lookup::{LookupOutcome, LookupSequencer, SymbolLookupUseCase, validate_symbol};
