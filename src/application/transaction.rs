//! Scoped transactions
//!
//! [`with_transaction`] runs a closure inside one unit of work: commit when
//! the closure returns `Ok`, rollback when it returns `Err`. A panic unwinds
//! through the boxed unit of work, whose `Drop` rolls back.

use tracing::{debug, warn};

use crate::domain::ports::{KitchenStore, UnitOfWork};
use crate::error::CookmateResult;

pub fn with_transaction<T, F>(store: &dyn KitchenStore, work: F) -> CookmateResult<T>
where
    F: FnOnce(&mut dyn UnitOfWork) -> CookmateResult<T>,
{
    let mut uow = store.begin()?;
    debug!(backend = store.backend(), "transaction started");

    match work(uow.as_mut()) {
        Ok(value) => {
            uow.commit()?;
            debug!(backend = store.backend(), "transaction committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback() {
                warn!(error = %rollback_err, "rollback failed");
            }
            debug!(backend = store.backend(), error = %err, "transaction rolled back");
            Err(err)
        }
    }
}
