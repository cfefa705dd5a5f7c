use async_trait::async_trait;

use crate::automaton::Tape;
use crate::errors::ExecutionError;

#[async_trait]
pub trait TapeUpdater: Send + Sync {
    /// Evolve `tape` by `iterations` steps of Rule 110.
    ///
    /// - `tape`: initial cells, treated as cyclic; ownership passes to the updater
    /// - `iterations`: number of steps, zero returns the tape unchanged
    ///
    /// Returns the evolved tape. The buffer of the input tape may be reused
    /// for the output.
    async fn update(&self, tape: Tape, iterations: usize) -> Result<Tape, ExecutionError>;

    fn name(&self) -> &'static str;
}
