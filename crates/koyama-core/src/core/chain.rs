use crate::core::omega::OmegaError;

/// Smallest persistence length the Koyama bending model can represent.
pub const MIN_PERSISTENCE_LENGTH: f64 = 4.0 / 3.0;

/// Immutable description of a freely-rotating, bond-angle-restricted chain.
///
/// Lengths share whatever unit the caller uses for wavevectors (k is in inverse units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainGeometry {
    sigma: f64,
    bond_length: f64,
    length: usize,
    persistence_length: f64,
}

impl ChainGeometry {
    /// Validates and builds a chain geometry.
    ///
    /// The persistence length is checked first, so `lp < 4/3` always yields
    /// [`OmegaError::InvalidPersistenceLength`] regardless of the other inputs.
    pub fn new(
        sigma: f64,
        bond_length: f64,
        length: usize,
        persistence_length: f64,
    ) -> Result<Self, OmegaError> {
        if !(persistence_length >= MIN_PERSISTENCE_LENGTH) {
            return Err(OmegaError::InvalidPersistenceLength {
                lp: persistence_length,
            });
        }
        if !persistence_length.is_finite() {
            return Err(OmegaError::InvalidGeometry(format!(
                "persistence length must be finite, got {}",
                persistence_length
            )));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(OmegaError::InvalidGeometry(format!(
                "site diameter sigma must be positive and finite, got {}",
                sigma
            )));
        }
        if !(bond_length.is_finite() && bond_length > 0.0) {
            return Err(OmegaError::InvalidGeometry(format!(
                "bond length must be positive and finite, got {}",
                bond_length
            )));
        }
        if length == 0 {
            return Err(OmegaError::InvalidGeometry(
                "chain must contain at least one site".to_string(),
            ));
        }

        Ok(Self {
            sigma,
            bond_length,
            length,
            persistence_length,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn bond_length(&self) -> f64 {
        self.bond_length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn persistence_length(&self) -> f64 {
        self.persistence_length
    }

    /// Cosine of the smallest bond angle allowed by 1-3 site overlap.
    ///
    /// Only meaningful in `(-1, 1)`; not validated beyond the persistence-length gate.
    #[inline]
    pub fn cos0(&self) -> f64 {
        1.0 - self.sigma * self.sigma / (2.0 * self.bond_length * self.bond_length)
    }

    /// Target first moment of the bond-angle cosine implied by the persistence length.
    #[inline]
    pub fn cos1(&self) -> f64 {
        self.bond_length / self.persistence_length - 1.0
    }
}
