use crate::error::GatewayError;
use crate::model::{Hawk, HawkId};
use crate::query::QueryParams;

/// The remote catalog the interface reads from and writes to.
///
/// Each method maps onto one REST call:
///
/// | method   | request                                   | success |
/// |----------|-------------------------------------------|---------|
/// | `list`   | `GET {base}/list?filter=&sortField=&sortDir=` | 200 |
/// | `create` | `POST {base}` with the record as JSON     | 200 |
/// | `update` | `PUT {base}/{id}` with the record as JSON | 200 |
/// | `delete` | `DELETE {base}/{id}`                      | 204 |
///
/// Any other status is reported as [`GatewayError::Rejected`]. Calls block
/// the current thread; async callers run them on a blocking pool.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync` so one instance can sit in shared
/// server state.
pub trait HawkGateway: Send + Sync {
    /// Fetch the collection for `params`, in the order the service returns it.
    fn list(&self, params: &QueryParams) -> Result<Vec<Hawk>, GatewayError>;

    /// Store a new record. The record's `id` is ignored.
    fn create(&self, hawk: &Hawk) -> Result<(), GatewayError>;

    /// Replace the record stored under `id`.
    fn update(&self, id: HawkId, hawk: &Hawk) -> Result<(), GatewayError>;

    fn delete(&self, id: HawkId) -> Result<(), GatewayError>;
}
