use soroban_sdk::contracterror;

/// Errors that can occur during engine operations
///
/// A single enum covers the whole contract surface so composite operations
/// (deposit + mint + solvency check in one invocation) report a stable code
/// regardless of which internal step failed.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Amount is zero or negative
    InvalidAmount = 1,
    /// Asset is not in the registered collateral set
    AssetNotRegistered = 2,
    /// Construction lists are empty or of mismatched lengths
    ConfigMismatch = 3,
    /// Contract was already initialized
    AlreadyInitialized = 4,
    /// Contract has not been initialized
    NotInitialized = 5,
    /// Pushed price is zero or negative
    InvalidPrice = 6,
    /// User's vault balance is smaller than the requested amount
    InsufficientBalance = 7,
    /// User's recorded debt is smaller than the requested amount
    InsufficientDebt = 8,
    /// Arithmetic overflow
    Overflow = 9,
    /// Operation would leave a position below the minimum health factor
    HealthFactorTooLow = 10,
    /// Price feed is missing or older than the staleness bound
    StalePrice = 11,
    /// Liquidation target is above the minimum health factor
    HealthFactorOk = 12,
    /// Liquidation did not improve the target's health factor
    HealthFactorNotImproved = 13,
    /// Re-entrant call into a mutating operation
    ReentrantCall = 14,
    /// Operation class is paused
    OperationPaused = 15,
    /// Caller is not authorized for this operation
    Unauthorized = 16,
}
