// fp-core/src/units.rs

use uom::si::f64::Mass as UomMass;

// Public canonical unit type (SI, f64)
pub type Mass = UomMass;

/// Metric tonnes.
#[inline]
pub fn tonnes(v: f64) -> Mass {
    use uom::si::mass::ton;
    Mass::new::<ton>(v)
}

#[inline]
pub fn mass_kg(m: Mass) -> f64 {
    use uom::si::mass::kilogram;
    m.get::<kilogram>()
}

pub mod constants {
    /// Divisor taking a kilogram figure to tonnes.
    pub const KG_PER_TONNE: f64 = 1000.0;

    // Annualization multipliers, one per input period.
    pub const DAYS_PER_YEAR: f64 = 365.0;
    pub const MONTHS_PER_YEAR: f64 = 12.0;
    pub const WEEKS_PER_YEAR: f64 = 52.0;
}
