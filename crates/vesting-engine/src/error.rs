use thiserror::Error;

/// Custom error codes for the vesting engine.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingError {
    #[error("company name should not be greater than 50 bytes")]
    CompanyNameTooLong,

    #[error("supplied asset type does not match the grant mint")]
    InvalidMint,

    #[error("total vesting amount must be positive")]
    VestingAmountShouldBePositive,

    #[error("time constraints not satisfied")]
    InvalidVestingSchedule,

    #[error("treasury balance is insufficient to back the schedule")]
    NotEnoughTokensInTreasury,

    #[error("signer is not authorized for this operation")]
    UnAuthorized,

    #[error("nothing to claim")]
    NothingToClaim,

    #[error("a record already exists at the derived address")]
    DuplicateRecord,

    #[error("schedule has already been revoked")]
    AlreadyRevoked,

    #[error("no record exists at the given address")]
    RecordNotFound,

    #[error("stored record bytes do not decode")]
    CorruptedRecord,

    #[error("holding balance is insufficient for the transfer")]
    InsufficientFunds,

    #[error("math overflow")]
    MathOverflow,
}

pub type Result<T, E = VestingError> = core::result::Result<T, E>;

/// Guard-first validation: bail out with `$err` unless `$cond` holds.
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use require;
