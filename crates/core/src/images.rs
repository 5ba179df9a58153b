//! Trip image-list mutation rules.
//!
//! A trip carries an ordered list of image references plus an optional cover
//! reference that, when set, always equals one element of the list. These
//! functions are the single place where that invariant is maintained; the
//! database layer applies them inside a row-locked transaction and persists
//! the result.

/// Append new references to the image list, preserving insertion order.
///
/// If the trip had no cover image and at least one reference was added, the
/// first new reference becomes the cover.
pub fn append_images(images: &mut Vec<String>, cover: &mut Option<String>, new_refs: &[String]) {
    images.extend_from_slice(new_refs);
    if cover.is_none() {
        if let Some(first) = new_refs.first() {
            *cover = Some(first.clone());
        }
    }
}

/// Remove the image at `index`, preserving the order of the rest.
///
/// If the removed reference was the cover, the cover becomes the element now
/// sitting at the same index, or is unset when the removal emptied that slot.
/// Returns `false` (and leaves everything unchanged) when `index` is outside
/// `[0, len)`.
pub fn remove_image(images: &mut Vec<String>, cover: &mut Option<String>, index: usize) -> bool {
    if index >= images.len() {
        return false;
    }
    let removed = images.remove(index);
    if cover.as_deref() == Some(removed.as_str()) {
        *cover = images.get(index).cloned();
    }
    true
}

/// Point the cover at the image currently at `index`.
///
/// Returns `false` when `index` is outside `[0, len)`.
pub fn set_cover(images: &[String], cover: &mut Option<String>, index: usize) -> bool {
    match images.get(index) {
        Some(image) => {
            *cover = Some(image.clone());
            true
        }
        None => false,
    }
}
