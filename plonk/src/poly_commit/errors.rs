use ark_std::{error, fmt};

/// Polynomial commitment scheme errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolyComSchemeError {
    /// The degree of the polynomial is higher than the maximum degree allowed.
    DegreeError,
}

impl fmt::Display for PolyComSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PolyComSchemeError::DegreeError => {
                "The degree of the polynomial is higher than the maximum degree allowed."
            }
        };

        write!(f, "{}", c)
    }
}

impl error::Error for PolyComSchemeError {}
