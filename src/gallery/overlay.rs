#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Detail,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub caption: String,
}

/// Open overlays. The image overlay stacks above the detail overlay.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    /// Index into the loaded entries.
    pub(super) detail: Option<usize>,
    pub(super) image: Option<ImageView>,
}

impl Overlays {
    pub fn open_detail(&mut self, index: usize) {
        self.image = None;
        self.detail = Some(index);
    }

    pub fn open_image(&mut self, image: ImageView) {
        self.image = Some(image);
    }

    pub fn close(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::Detail => self.detail = None,
            OverlayKind::Image => self.image = None,
        }
    }

    /// The overlay that receives Escape and background clicks.
    pub fn active(&self) -> Option<OverlayKind> {
        if self.image.is_some() {
            Some(OverlayKind::Image)
        } else if self.detail.is_some() {
            Some(OverlayKind::Detail)
        } else {
            None
        }
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Detail => self.detail.is_some(),
            OverlayKind::Image => self.image.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageView {
        ImageView {
            url: "a.jpg".into(),
            caption: "A".into(),
        }
    }

    #[test]
    fn test_image_is_topmost() {
        let mut overlays = Overlays::default();
        overlays.open_detail(0);
        overlays.open_image(image());
        assert_eq!(overlays.active(), Some(OverlayKind::Image));
        assert!(overlays.is_open(OverlayKind::Detail));
    }

    #[test]
    fn test_opening_detail_closes_image() {
        let mut overlays = Overlays::default();
        overlays.open_image(image());
        overlays.open_detail(2);
        assert_eq!(overlays.active(), Some(OverlayKind::Detail));
        assert!(!overlays.is_open(OverlayKind::Image));
    }

    #[test]
    fn test_nothing_open() {
        assert_eq!(Overlays::default().active(), None);
    }
}
