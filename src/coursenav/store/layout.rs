//! Sidebar, breadcrumb and chat-panel state for the learner app shell.

use super::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: String,
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
            is_active: false,
        }
    }
}

/// Sidebar entries with at most one active item.
#[derive(Debug, Clone)]
pub struct Sidebar {
    store: Store<Vec<SidebarItem>>,
    defaults: Vec<SidebarItem>,
}

impl Sidebar {
    /// Starts empty; `reset` installs `defaults`.
    pub fn new(defaults: Vec<SidebarItem>) -> Self {
        Self {
            store: Store::new(Vec::new()),
            defaults,
        }
    }

    pub fn store(&self) -> &Store<Vec<SidebarItem>> {
        &self.store
    }

    pub fn items(&self) -> Vec<SidebarItem> {
        self.store.get()
    }

    pub fn set_items(&self, items: Vec<SidebarItem>) {
        self.store.set(items);
    }

    /// Marks `id` active and every other item inactive.
    pub fn activate(&self, id: &str) {
        self.store.update(|items| {
            for item in items.iter_mut() {
                item.is_active = item.id == id;
            }
        });
    }

    pub fn active(&self) -> Option<SidebarItem> {
        self.store
            .with(|items| items.iter().find(|item| item.is_active).cloned())
    }

    pub fn reset(&self) {
        self.store.set(self.defaults.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crumb {
    Link {
        label: String,
        href: Option<String>,
        is_current: bool,
    },
    Menu {
        label: String,
        href: Option<String>,
        is_current: bool,
        items: Vec<Crumb>,
    },
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: Option<&str>) -> Self {
        Crumb::Link {
            label: label.into(),
            href: href.map(str::to_string),
            is_current: false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Crumb::Link { label, .. } | Crumb::Menu { label, .. } => label,
        }
    }

    pub fn is_current(&self) -> bool {
        match self {
            Crumb::Link { is_current, .. } | Crumb::Menu { is_current, .. } => *is_current,
        }
    }

    fn set_current(&mut self, current: bool) {
        match self {
            Crumb::Link { is_current, .. } | Crumb::Menu { is_current, .. } => {
                *is_current = current
            }
        }
    }
}

/// The breadcrumb trail. Always starts at the app home.
pub fn breadcrumbs() -> Store<Vec<Crumb>> {
    Store::new(vec![Crumb::Link {
        label: "Home".to_string(),
        href: Some("/app".to_string()),
        is_current: true,
    }])
}

/// Replaces the trail, marking only the last crumb current.
pub fn set_trail(store: &Store<Vec<Crumb>>, mut trail: Vec<Crumb>) {
    let last = trail.len().saturating_sub(1);
    for (i, crumb) in trail.iter_mut().enumerate() {
        crumb.set_current(i == last);
    }
    store.set(trail);
}

/// Whether the chat panel is open. Starts closed.
pub fn chat_panel() -> Store<bool> {
    Store::new(false)
}

pub fn toggle(store: &Store<bool>) {
    store.update(|open| *open = !*open);
}
