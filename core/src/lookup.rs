//! Batch lookup: validate every address, then resolve them one at a time.
//!
//! The run is fail-fast. A single malformed address rejects the whole batch
//! before any request goes out, and the first failed lookup stops the rest.

use macq_common::network::mac::{self, MacAddress, ValidationError};
use thiserror::Error;
use tracing::{Instrument, info, info_span};

use crate::vendors::{LookupError, VendorApi};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("lookup of {mac} failed")]
    Lookup {
        mac: String,
        #[source]
        source: LookupError,
    },
}

/// One resolved address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub mac: MacAddress,
    pub vendor: String,
}

/// Validates `inputs` and looks each one up, keeping input order.
pub async fn run<S: AsRef<str>>(
    api: &dyn VendorApi,
    inputs: &[S],
) -> Result<Vec<Lookup>, PipelineError> {
    let macs = mac::validate_all(inputs)?;
    info!("{} address(es) validated", macs.len());

    resolve(api, macs).await
}

/// Looks up already-validated addresses sequentially.
async fn resolve(
    api: &dyn VendorApi,
    macs: Vec<MacAddress>,
) -> Result<Vec<Lookup>, PipelineError> {
    let mut results = Vec::with_capacity(macs.len());

    for mac in macs {
        let vendor = api
            .lookup(&mac)
            .instrument(info_span!("lookup", mac = %mac))
            .await
            .map_err(|source| PipelineError::Lookup {
                mac: mac.to_string(),
                source,
            })?;
        results.push(Lookup { mac, vendor });
    }

    Ok(results)
}
