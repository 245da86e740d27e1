pub mod flood;
pub mod global;

use crate::foundation::error::{LithoError, LithoResult};
use crate::surface::{buffer::Surface, mask::BitMask};

pub(crate) fn stencil_matches(src: &Surface, stencil: &BitMask) -> LithoResult<()> {
    if src.width() != stencil.width() || src.height() != stencil.height() {
        return Err(LithoError::validation(
            "stencil dimensions must match the source surface",
        ));
    }
    Ok(())
}
