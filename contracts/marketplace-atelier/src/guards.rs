//! Call-level precondition guards shared by the entry points.

use crate::*;

/// Rejects any attached deposit on a free operation.
pub(crate) fn check_no_deposit(operation: &str) -> Result<(), MarketError> {
    let attached = env::attached_deposit().as_yoctonear();
    if attached != 0 {
        return Err(ErrorKind::UnexpectedDeposit { attached }.op(operation));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_active(&self, operation: &str) -> Result<(), MarketError> {
        if self.paused {
            return Err(ErrorKind::ContractPaused.op(operation));
        }
        Ok(())
    }

    pub(crate) fn check_admin(
        &self,
        caller: &AccountId,
        operation: &str,
    ) -> Result<(), MarketError> {
        if caller != &self.admin {
            return Err(ErrorKind::NotAdmin {
                caller: caller.clone(),
            }
            .op(operation));
        }
        Ok(())
    }
}
