//! Image association
//!
//! Decides whether a paragraph's embedded image belongs to the open question.

use super::pending::PendingQuestion;

/// Attach `image` to the open question if it has no image yet and no answer
/// line has been recorded. Returns whether the image was kept.
pub fn associate_image(pending: Option<&mut PendingQuestion>, image: Option<Vec<u8>>) -> bool {
    let (Some(pending), Some(image)) = (pending, image) else {
        return false;
    };
    if pending.image.is_some() || !pending.correct_labels.is_empty() {
        return false;
    }
    pending.image = Some(image);
    true
}
