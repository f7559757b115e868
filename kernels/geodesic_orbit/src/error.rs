// Fatal error conditions for a geodesic run

use std::fmt;

// ============================================================================
// ERROR TYPE
// ============================================================================

// Every fatal condition a run can hit
//
// There is no local recovery for any of these: each one aborts the whole run
// and is reported at the top level. Horizon crossing is NOT an error - it is
// a normal termination path (see integration::Termination).
#[derive(Debug)]
pub enum GeodesicError {
    // Unrecognized metric family name or invalid parameter combination
    // (programmer/input error, surfaced at the CLI boundary)
    Config(String),

    // Normalization produced (v⁰)² < 0: the time component would be complex
    NonPhysicalVelocity { v0_squared: f64 },

    // The derived local 3-velocity reached or exceeded light speed
    SuperluminalVelocity { v_local: f64 },

    // A deliberate capability gap, not a bug (e.g. Kerr Christoffel symbols)
    NotImplemented(&'static str),

    // Output destination or other resource failure
    Io(std::io::Error),
}

impl fmt::Display for GeodesicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeodesicError::Config(msg) => write!(f, "configuration error: {}", msg),
            GeodesicError::NonPhysicalVelocity { v0_squared } => write!(
                f,
                "non-physical four-velocity: (v0)^2 = {:.6e} < 0 (time component would be complex); \
                 try other values for the spatial velocity",
                v0_squared
            ),
            GeodesicError::SuperluminalVelocity { v_local } => write!(
                f,
                "local velocity exceeds light speed: v_local = {:.6} c; \
                 try other values for the spatial velocity",
                v_local
            ),
            GeodesicError::NotImplemented(what) => write!(f, "{} are not implemented yet", what),
            GeodesicError::Io(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for GeodesicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeodesicError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GeodesicError {
    fn from(err: std::io::Error) -> Self {
        GeodesicError::Io(err)
    }
}
