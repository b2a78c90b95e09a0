/// Number of background images cycled behind the launch list.
pub const SLIDE_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    current: usize,
    len: usize,
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new(SLIDE_COUNT)
    }
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub(crate) fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}
