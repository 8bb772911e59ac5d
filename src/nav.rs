#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Element id of the target section.
    pub id: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        id: "home",
    },
    NavLink {
        label: "About",
        id: "about",
    },
    NavLink {
        label: "Projects",
        id: "projects",
    },
    NavLink {
        label: "Skills",
        id: "skills",
    },
    NavLink {
        label: "Contact",
        id: "contact",
    },
];

/// Mobile menu visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggles_on_each_click() {
        let mut menu = MenuState::default();
        assert!(!menu.open);
        for expected in [true, false, true, false] {
            menu.toggle();
            assert_eq!(menu.open, expected);
        }
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.open);
        // closing twice is harmless
        menu.close();
        assert!(!menu.open);
    }

    #[test]
    fn test_links_follow_page_order() {
        let ids = NAV_LINKS.iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "projects", "skills", "contact"]);
        assert_eq!(NAV_LINKS[2].href(), "#projects");
    }
}
