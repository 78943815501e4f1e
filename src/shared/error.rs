/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Errors raised by the dispatch core.
 *
 * `SameFloorDirection` means a stage left a satisfied target in place before the
 * Move stage ran. It is an ordering defect, not a runtime condition, and the driver
 * treats it as fatal.
 */
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no direction from floor {floor} to itself")]
    SameFloorDirection { floor: i32 },

    #[error("malformed request: origin and destination are both floor {floor}")]
    MalformedRequest { floor: i32 },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
