//! Single-open FAQ accordion: opening one item closes the rest.

#[derive(Debug)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Clicking an item opens it and closes every other one; clicking the
    /// open item closes it. Returns the new open state of `index`.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_item_closes_the_others() {
        let mut faq = Accordion::new(4);
        assert!(faq.toggle(0));
        assert!(faq.toggle(2));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
        assert_eq!(faq.open_item(), Some(2));
    }

    #[test]
    fn reclicking_the_open_item_closes_it() {
        let mut faq = Accordion::new(3);
        faq.toggle(1);
        assert!(!faq.toggle(1));
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn out_of_range_index_changes_nothing() {
        let mut faq = Accordion::new(2);
        faq.toggle(0);
        assert!(!faq.toggle(5));
        assert_eq!(faq.open_item(), Some(0));
    }

    #[test]
    fn at_most_one_item_is_ever_open() {
        let mut faq = Accordion::new(6);
        for i in [3, 1, 5, 2] {
            faq.toggle(i);
            let open = (0..6).filter(|&j| faq.is_open(j)).count();
            assert_eq!(open, 1);
        }
    }
}
