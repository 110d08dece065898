use tarn_wellformed::WellFormednessError;

/// Why a compilation unit was rejected.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// Problems found and already emitted as diagnostics.
    #[error("could not compile `{path}` due to {errors} previous error(s)")]
    Aborted { path: String, errors: usize },

    /// Problems found but not yet rendered.
    #[error(transparent)]
    WellFormedness(#[from] WellFormednessError),
}
