//! UTF-8 ⇄ UTF-16 conversion for wide-character text APIs.
//!
//! Standalone helpers for hosts whose text calls take NUL-terminated UTF-16
//! (Win32 `DrawTextW` and friends). The bundled canvases take `&str`, so
//! nothing in the drawing path calls these; a host canvas converts at its
//! own boundary.
//!
//! ```
//! use barchart_rs::encoding::{from_wide, to_wide};
//!
//! let wide = to_wide("项目");
//! assert_eq!(wide, [0x9879, 0x76EE, 0]);
//! assert_eq!(from_wide(&wide)?, "项目");
//! # Ok::<(), barchart_rs::ChartError>(())
//! ```

use crate::error::{ChartError, ChartResult};

/// Encode as UTF-16 with a trailing NUL.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode UTF-16 up to the first NUL (or the end of the slice).
pub fn from_wide(wide: &[u16]) -> ChartResult<String> {
    let end = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16(&wide[..end]).map_err(|e| ChartError::InvalidEncoding(e.to_string()))
}
