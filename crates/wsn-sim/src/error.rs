use thiserror::Error;

use wsn_core::WsnError;

#[derive(Debug, Error)]
pub enum SimError {
    /// An operation was called at the wrong point of the lifecycle, e.g.
    /// loading parameters after `initialize`.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("simulation is not configured: {0} not loaded")]
    NotConfigured(&'static str),

    #[error("simulation is not initialized")]
    NotInitialized,

    #[error("simulation is already initialized; call reset() first")]
    AlreadyInitialized,

    #[error("{what} length {got} does not match sensor count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] WsnError),
}

impl SimError {
    /// `true` for out-of-domain parameter or scenario values.
    pub fn is_validation(&self) -> bool {
        matches!(self, SimError::Core(WsnError::Validation(_)))
    }

    /// `true` for malformed external input.
    pub fn is_parse(&self) -> bool {
        matches!(self, SimError::Core(WsnError::Parse(_)))
    }
}

pub type SimResult<T> = Result<T, SimError>;
