//! Lazy-load below-the-fold images.

use crate::dom;

/// Leading images (hero and friends) stay eagerly loaded.
const EAGER_IMAGE_COUNT: usize = 3;

pub fn bind() {
    for (index, img) in dom::query_all("img").iter().enumerate() {
        if index >= EAGER_IMAGE_COUNT && !img.has_attribute("loading") {
            let _ = img.set_attribute("loading", "lazy");
        }
    }
}
