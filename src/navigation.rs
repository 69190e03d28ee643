use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

/// The logical pages of the site. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    About,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::About,
        Section::Faq,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::About => "about",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Services => "Услуги",
            Section::Portfolio => "Портфолио",
            Section::About => "О нас",
            Section::Faq => "Вопросы",
            Section::Contact => "Контакты",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Where a clicked `href` should take the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// One of the page sections; handled by activation.
    Section(Section),
    /// Some other element on the page, scrolled into view.
    Anchor(String),
    /// A bare `#` or an empty href.
    Inert,
    /// Not an in-page link, left to the browser.
    External,
}

impl LinkTarget {
    pub fn parse(href: &str) -> LinkTarget {
        match href.strip_prefix('#') {
            Some("") => LinkTarget::Inert,
            Some(id) => match Section::from_id(id) {
                Some(section) => LinkTarget::Section(section),
                None => LinkTarget::Anchor(id.to_string()),
            },
            None if href.is_empty() => LinkTarget::Inert,
            None => LinkTarget::External,
        }
    }
}

/// Navigation controller state.
///
/// `visible` is the rendered page section, `highlighted` is the nav entry
/// shown as active. Clicks set both. Scroll sampling moves only the
/// highlight, so while the user scrolls the menu previews the section under
/// the viewport without switching pages.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub visible: Section,
    pub highlighted: Section,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            visible: Section::Home,
            highlighted: Section::Home,
            menu_open: false,
        }
    }
}

pub enum NavAction {
    /// Activate the section with this id. Unknown ids only close the menu.
    Activate(String),
    ToggleMenu,
    CloseMenu,
    Highlight(Section),
}

impl NavState {
    pub fn activate(&mut self, id: &str) -> Option<Section> {
        self.menu_open = false;
        let section = Section::from_id(id)?;
        self.visible = section;
        self.highlighted = section;
        Some(section)
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Activate(id) => match self.activate(&id) {
                Some(section) => info!("Activated section {}", section.id()),
                None => debug!("No section with id {:?}", id),
            },
            NavAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                debug!("Mobile menu open: {}", self.menu_open);
            }
            NavAction::CloseMenu => {
                if self.menu_open {
                    debug!("Mobile menu closed");
                }
                self.menu_open = false;
            }
            NavAction::Highlight(section) => {
                if self.highlighted != section {
                    debug!("Scroll highlight moved to {}", section.id());
                }
                self.highlighted = section;
            }
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible == section
    }

    pub fn is_highlighted(&self, section: Section) -> bool {
        self.highlighted == section
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub type NavHandle = UseReducerHandle<NavState>;

/// Vertical extent of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// The section whose extent contains `scroll_y + offset`. When extents
/// overlap, the later one wins.
pub fn section_at(scroll_y: f64, offset: f64, extents: &[SectionExtent]) -> Option<Section> {
    extents
        .iter()
        .filter(|e| scroll_y >= e.top - offset && scroll_y < e.top + e.height - offset)
        .last()
        .map(|e| e.section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count<F: Fn(Section) -> bool>(f: F) -> usize {
        Section::ALL.into_iter().filter(|s| f(*s)).count()
    }

    #[test]
    fn activating_services_shows_exactly_one_section() {
        let mut state = NavState {
            menu_open: true,
            ..NavState::default()
        };
        state.apply(NavAction::Activate("services".into()));

        assert_eq!(state.visible, Section::Services);
        assert_eq!(count(|s| state.is_visible(s)), 1);
        assert_eq!(count(|s| state.is_highlighted(s)), 1);
        assert!(state.is_highlighted(Section::Services));
        assert!(!state.menu_open);
    }

    #[test]
    fn unknown_section_only_closes_menu() {
        let mut state = NavState::default();
        state.apply(NavAction::Activate("about".into()));
        state.apply(NavAction::ToggleMenu);

        assert_eq!(state.activate("pricing"), None);
        assert!(!state.menu_open);
        assert_eq!(state.visible, Section::About);
        assert_eq!(state.highlighted, Section::About);
    }

    #[test]
    fn toggle_and_close_menu() {
        let mut state = NavState::default();
        state.apply(NavAction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(NavAction::ToggleMenu);
        assert!(!state.menu_open);

        state.apply(NavAction::ToggleMenu);
        state.apply(NavAction::CloseMenu);
        assert!(!state.menu_open);
        state.apply(NavAction::CloseMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn scroll_highlight_leaves_visibility_alone() {
        let mut state = NavState::default();
        state.apply(NavAction::Highlight(Section::Faq));

        assert_eq!(state.highlighted, Section::Faq);
        assert_eq!(state.visible, Section::Home);
    }

    #[test]
    fn section_at_uses_offset() {
        let extents = [
            SectionExtent { section: Section::Home, top: 0.0, height: 800.0 },
            SectionExtent { section: Section::Services, top: 800.0, height: 600.0 },
        ];

        assert_eq!(section_at(0.0, 100.0, &extents), Some(Section::Home));
        assert_eq!(section_at(699.0, 100.0, &extents), Some(Section::Home));
        assert_eq!(section_at(700.0, 100.0, &extents), Some(Section::Services));
        assert_eq!(section_at(1300.0, 100.0, &extents), None);
    }

    #[test]
    fn hidden_sections_never_match() {
        let extents = [
            SectionExtent { section: Section::Home, top: 0.0, height: 0.0 },
            SectionExtent { section: Section::About, top: 0.0, height: 1200.0 },
        ];
        assert_eq!(section_at(50.0, 100.0, &extents), Some(Section::About));
    }

    #[test]
    fn parses_link_targets() {
        assert_eq!(LinkTarget::parse("#contact"), LinkTarget::Section(Section::Contact));
        assert_eq!(LinkTarget::parse("#pricing"), LinkTarget::Anchor("pricing".into()));
        assert_eq!(LinkTarget::parse("#"), LinkTarget::Inert);
        assert_eq!(LinkTarget::parse(""), LinkTarget::Inert);
        assert_eq!(LinkTarget::parse("https://t.me/nexforge"), LinkTarget::External);
    }
}
