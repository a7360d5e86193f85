//! Lazy illustration loading.
//!
//! Card illustrations are registered with a path and decoded only when the
//! card first scrolls into the content viewport. A missing or unreadable
//! image logs once and the placeholder frame keeps its label.

use std::path::PathBuf;

use fltk::frame::Frame;
use fltk::group::Scroll;
use fltk::image::SharedImage;
use fltk::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Pending,
    Loaded,
    Failed,
}

struct LazyImage {
    frame: Frame,
    path: PathBuf,
    state: LoadState,
}

pub struct LazyIllustrations {
    assets_dir: PathBuf,
    images: Vec<LazyImage>,
}

impl LazyIllustrations {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            assets_dir,
            images: Vec::new(),
        }
    }

    pub fn register(&mut self, frame: Frame, file: &str) {
        self.images.push(LazyImage {
            frame,
            path: self.assets_dir.join(file),
            state: LoadState::Pending,
        });
    }

    /// Decode any pending image whose frame currently intersects the scroll
    /// viewport. Called from the throttled scroll tick and after section
    /// switches.
    pub fn load_visible(&mut self, scroll: &Scroll) {
        let top = scroll.y();
        let bottom = scroll.y() + scroll.h();

        for img in &mut self.images {
            if img.state != LoadState::Pending || !img.frame.visible_r() {
                continue;
            }
            let above = img.frame.y() + img.frame.h() <= top;
            let below = img.frame.y() >= bottom;
            if above || below {
                continue;
            }

            match SharedImage::load(&img.path) {
                Ok(mut image) => {
                    image.scale(img.frame.w(), img.frame.h(), true, true);
                    img.frame.set_label("");
                    img.frame.set_image(Some(image));
                    img.frame.redraw();
                    img.state = LoadState::Loaded;
                }
                Err(e) => {
                    eprintln!("Illustration not loaded ({}): {}", img.path.display(), e);
                    img.state = LoadState::Failed;
                }
            }
        }
    }
}
