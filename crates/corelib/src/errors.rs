use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeasibilityError {
    #[error("bitwidth {bitwidth} is invalid; the check needs at least one bit")]
    InvalidBitwidth { bitwidth: u32 },
}
