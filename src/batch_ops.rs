#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::{Encoded, EnigmaError, Machine, Settings};

/// Encodes every message with its own machine built from `settings`, so
/// each one starts from the same configured state. Output order matches
/// input order.
#[cfg(feature = "batch-ops")]
pub fn encode_batch<M>(settings: &Settings, messages: &[M]) -> Result<Vec<Encoded>, EnigmaError>
where
    M: AsRef<str> + Sync,
{
    let prototype = Machine::new(settings)?;
    messages
        .par_iter()
        .map(|message| {
            let mut machine = prototype.clone();
            machine.encode(message.as_ref())
        })
        .collect()
}
