use complaints_core_api::domain::AuthContext;
use complaints_core_api::error::{CoreError, CoreResult};

use crate::models::complaint::ComplaintModel;

/// Single authorization choke point for complaints and everything hanging
/// off them (comments, call requests).
///
/// Staff read everything; students read only complaints they own. The
/// `anonymous` flag affects how ownership is displayed, never who may
/// access the row.
pub fn can_read(ctx: &AuthContext, complaint: &ComplaintModel) -> bool {
    ctx.is_admin() || complaint.owner_person_id == ctx.principal_id
}

/// Read gate that reports denial as not-found, so unauthorized readers
/// cannot learn that the row exists.
pub fn ensure_read(ctx: &AuthContext, complaint: &ComplaintModel) -> CoreResult<()> {
    if can_read(ctx, complaint) {
        Ok(())
    } else {
        Err(CoreError::NotFound("complaint not found".into()))
    }
}
