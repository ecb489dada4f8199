use thiserror::Error;

/// The only in-core failure: a detail lookup for an address the fixed
/// roster does not contain. All sampling is total and all aggregation
/// substitutes 0 for empty denominators, so nothing else can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no miner with address {0} in the fleet roster")]
    MinerNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
