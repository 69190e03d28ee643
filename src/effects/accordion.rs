/// Exclusive accordion: at most one item expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse everything, then expand `index` unless it was the open one.
    pub fn toggle(&mut self, index: usize) {
        let was_open = self.is_expanded(index);
        self.expanded = None;
        if !was_open {
            self.expanded = Some(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_collapses_the_first() {
        let mut faq = Accordion::default();
        faq.toggle(0);
        assert!(faq.is_expanded(0));

        faq.toggle(1);
        assert!(!faq.is_expanded(0));
        assert!(faq.is_expanded(1));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        let mut faq = Accordion::default();
        faq.toggle(1);
        faq.toggle(1);
        assert!(!faq.is_expanded(1));
        assert_eq!(faq, Accordion::default());
    }
}
