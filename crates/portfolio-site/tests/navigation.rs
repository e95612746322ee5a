use std::cell::{Cell, RefCell};

use portfolio::{navigate_to_id, navigate_to_section, Navigation, SectionHost, SectionId};

/// Page stand-in: a column of tagged sections at fixed offsets.
struct FakePage {
    sections: Vec<(String, f64)>,
    scroll_y: Cell<f64>,
    scrolled: RefCell<Vec<String>>,
}

impl FakePage {
    fn new(sections: &[(&str, f64)]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|(id, top)| (format!("[data-section='{id}']"), *top))
                .collect(),
            scroll_y: Cell::new(0.0),
            scrolled: RefCell::new(Vec::new()),
        }
    }
}

impl SectionHost for FakePage {
    type Element = (String, f64);

    fn find_section(&self, selector: &str) -> Option<Self::Element> {
        self.sections.iter().find(|(s, _)| s == selector).cloned()
    }

    fn scroll_into_view(&self, element: &Self::Element) {
        self.scroll_y.set(element.1);
        self.scrolled.borrow_mut().push(element.0.clone());
    }
}

#[test]
fn missing_section_is_a_no_op() {
    let page = FakePage::new(&[("about", 800.0)]);
    page.scroll_y.set(120.0);

    assert_eq!(navigate_to_section(&page, SectionId::Projects), Navigation::Missing);
    assert_eq!(page.scroll_y.get(), 120.0);
    assert!(page.scrolled.borrow().is_empty());
}

#[test]
fn unknown_identifier_is_a_no_op() {
    let page = FakePage::new(&[("about", 800.0), ("contact", 2400.0)]);

    assert_eq!(navigate_to_id(&page, "contact"), Navigation::Missing);
    assert_eq!(navigate_to_id(&page, ""), Navigation::Missing);
    assert_eq!(page.scroll_y.get(), 0.0);
}

#[test]
fn matching_section_is_scrolled_into_view() {
    let page = FakePage::new(&[("about", 800.0), ("experience", 1600.0), ("projects", 2400.0)]);

    assert_eq!(navigate_to_section(&page, SectionId::Experience), Navigation::Scrolled);
    assert_eq!(page.scroll_y.get(), 1600.0);
    assert_eq!(*page.scrolled.borrow(), vec!["[data-section='experience']".to_string()]);

    assert_eq!(navigate_to_id(&page, "projects"), Navigation::Scrolled);
    assert_eq!(page.scroll_y.get(), 2400.0);
}
