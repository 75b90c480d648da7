mod villa;
mod villa_number;

pub use villa::VillaService;
pub use villa_number::VillaNumberService;

use crate::error::{VillaError, VillaResult};

/// Ids arrive from the route as any integer; only positive ones address a row.
fn ensure_id(id: i32) -> VillaResult<()> {
    if id <= 0 {
        return Err(VillaError::InvalidId(id));
    }
    Ok(())
}
