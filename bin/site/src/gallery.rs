//! Lightbox state for the product photo gallery.

/// Which photo is shown and whether the lightbox is open.
///
/// Navigation wraps at both ends. An empty gallery never opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
    open: bool,
}

/// Lightbox action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Prev,
    Next,
    Close,
}

impl GalleryCommand {
    /// Maps a `KeyboardEvent.key` value to a command.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

impl Gallery {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            open: false,
        }
    }

    /// Opens the lightbox on photo `index`. Out-of-range indices are ignored.
    pub fn open_at(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.open = true;
        }
    }

    /// Closes the lightbox, remembering the current photo.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Applies a keyboard command.
    pub fn apply(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::Prev => self.prev(),
            GalleryCommand::Next => self.next(),
            GalleryCommand::Close => self.close(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The photo on screen, if the lightbox is open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.open.then_some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let gallery = Gallery::new(8);
        assert!(!gallery.is_open());
        assert_eq!(gallery.current(), None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut gallery = Gallery::new(8);
        gallery.open_at(0);
        gallery.prev();
        assert_eq!(gallery.current(), Some(7));
        gallery.next();
        assert_eq!(gallery.current(), Some(0));
        gallery.open_at(7);
        gallery.next();
        assert_eq!(gallery.current(), Some(0));
    }

    #[test]
    fn close_keeps_index() {
        let mut gallery = Gallery::new(3);
        gallery.open_at(2);
        gallery.close();
        assert_eq!(gallery.current(), None);
        assert_eq!(gallery.index(), 2);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut gallery = Gallery::new(3);
        gallery.open_at(3);
        assert!(!gallery.is_open());

        let mut empty = Gallery::new(0);
        empty.open_at(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.current(), None);
    }

    #[test]
    fn keyboard_commands() {
        assert_eq!(GalleryCommand::from_key("ArrowLeft"), Some(GalleryCommand::Prev));
        assert_eq!(GalleryCommand::from_key("ArrowRight"), Some(GalleryCommand::Next));
        assert_eq!(GalleryCommand::from_key("Escape"), Some(GalleryCommand::Close));
        assert_eq!(GalleryCommand::from_key("Enter"), None);

        let mut gallery = Gallery::new(4);
        gallery.open_at(1);
        gallery.apply(GalleryCommand::Next);
        assert_eq!(gallery.current(), Some(2));
        gallery.apply(GalleryCommand::Close);
        assert!(!gallery.is_open());
    }
}
