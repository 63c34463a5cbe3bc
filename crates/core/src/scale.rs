//! Detector-space to document-space coordinate normalization.
//!
//! Table boxes arrive in the pixel coordinates of the rasterized page image
//! the detector ran on; they are mapped into document (point) coordinates
//! before membership filtering. Scaling is independent per axis: the raster
//! and the document page are not assumed to share an aspect ratio.

use crate::error::{LayoutError, Result};
use crate::utils::Rect;

/// Computes per-axis scale factors from raster pixels to document points.
///
/// `raster` and `document` are (width, height) pairs. A zero or negative
/// dimension on either side fails with `InvalidDimensions`; the failure is
/// local to the page's table-normalization step.
pub fn scale_factors(raster: (f64, f64), document: (f64, f64)) -> Result<(f64, f64)> {
    let (img_w, img_h) = raster;
    let (doc_w, doc_h) = document;

    if img_w <= 0.0 || img_h <= 0.0 {
        return Err(LayoutError::InvalidDimensions {
            width: img_w,
            height: img_h,
        });
    }
    if doc_w <= 0.0 || doc_h <= 0.0 {
        return Err(LayoutError::InvalidDimensions {
            width: doc_w,
            height: doc_h,
        });
    }

    Ok((doc_w / img_w, doc_h / img_h))
}

/// Maps a detector-space box into document space with the given per-axis
/// scale factors.
pub fn to_document_space(bbox: Rect, scales: (f64, f64)) -> Rect {
    let (x0, y0, x1, y1) = bbox;
    let (sx, sy) = scales;
    (x0 * sx, y0 * sy, x1 * sx, y1 * sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factors_per_axis() {
        let (sx, sy) = scale_factors((800.0, 1000.0), (400.0, 500.0)).unwrap();
        assert_eq!(sx, 0.5);
        assert_eq!(sy, 0.5);
    }

    #[test]
    fn scale_factors_unequal_aspect() {
        let (sx, sy) = scale_factors((1000.0, 1000.0), (500.0, 250.0)).unwrap();
        assert_eq!(sx, 0.5);
        assert_eq!(sy, 0.25);
    }

    #[test]
    fn scale_factors_rejects_zero_raster() {
        assert!(matches!(
            scale_factors((0.0, 1000.0), (400.0, 500.0)),
            Err(LayoutError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn scale_factors_rejects_negative_document() {
        assert!(matches!(
            scale_factors((800.0, 1000.0), (-400.0, 500.0)),
            Err(LayoutError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn to_document_space_maps_full_page() {
        let scales = scale_factors((800.0, 1000.0), (400.0, 500.0)).unwrap();
        assert_eq!(
            to_document_space((0.0, 0.0, 800.0, 1000.0), scales),
            (0.0, 0.0, 400.0, 500.0)
        );
    }
}
