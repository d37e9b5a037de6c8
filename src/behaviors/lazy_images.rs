//! Lazy Images
//!
//! `img[data-src]` gets its real `src` once it scrolls into view. Without an
//! intersection observer the remaining images load straight away.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::context::{PageContext, Platform};
use crate::dom::Dom;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    let images = ctx.dom.query_all(LAZY_IMAGE_SELECTOR);
    debug!(count = images.len(), "observing lazy images");

    let mut observing = true;
    for img in images {
        if observing {
            let dom = Rc::clone(&ctx.dom);
            let target = img.clone();
            match ctx
                .dom
                .observe_visible(&img, Box::new(move || load_image(&*dom, &target)))
            {
                Ok(()) => continue,
                Err(err) => {
                    warn!(%err, "visibility observer unavailable, loading eagerly");
                    observing = false;
                }
            }
        }
        load_image(&*ctx.dom, &img);
    }
}

/// Copy `data-src` into `src` and drop the `lazy` marker
pub fn load_image<D: Dom>(dom: &D, img: &D::Node) {
    if let Some(src) = dom.attribute(img, "data-src") {
        if let Err(err) = dom.set_attribute(img, "src", &src) {
            warn!(%err, "could not set image source");
        }
    }
    dom.remove_class(img, "lazy");
}
