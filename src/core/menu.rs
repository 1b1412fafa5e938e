//! # Menu Data
//!
//! The two label lists shown by the layout shell: the side navigation
//! (dish categories) and the bottom tab bar (app sections).
//!
//! Both lists are ordered; display order is insertion order. Keys only need
//! to be unique within their own list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A selectable `{key, title}` entry rendered as a nav row or a tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavItem {
    pub key: String,
    pub title: String,
}

impl NavItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Which list a `NavItem` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavList {
    SideNav,
    TabBar,
}

impl fmt::Display for NavList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavList::SideNav => write!(f, "side_nav"),
            NavList::TabBar => write!(f, "tab_bar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub side_nav: Vec<NavItem>,
    pub tab_bar: Vec<NavItem>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            side_nav: default_side_nav(),
            tab_bar: default_tab_bar(),
        }
    }
}

pub fn default_side_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("1", "大厨"),
        NavItem::new("2", "家常菜"),
        NavItem::new("3", "主食"),
        NavItem::new("4", "小吃"),
    ]
}

pub fn default_tab_bar() -> Vec<NavItem> {
    vec![
        NavItem::new("1", "菜单"),
        NavItem::new("2", "订单"),
        NavItem::new("3", "我的"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    EmptyKey { list: NavList, index: usize },
    EmptyTitle { list: NavList, key: String },
    DuplicateKey { list: NavList, key: String },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::EmptyKey { list, index } => {
                write!(f, "{list} item #{index} has an empty key")
            }
            MenuError::EmptyTitle { list, key } => {
                write!(f, "{list} item '{key}' has an empty title")
            }
            MenuError::DuplicateKey { list, key } => {
                write!(f, "{list} key '{key}' is used more than once")
            }
        }
    }
}

impl std::error::Error for MenuError {}

impl MenuConfig {
    pub fn new(side_nav: Vec<NavItem>, tab_bar: Vec<NavItem>) -> Result<Self, MenuError> {
        validate_list(NavList::SideNav, &side_nav)?;
        validate_list(NavList::TabBar, &tab_bar)?;
        Ok(Self { side_nav, tab_bar })
    }

    pub fn items(&self, list: NavList) -> &[NavItem] {
        match list {
            NavList::SideNav => &self.side_nav,
            NavList::TabBar => &self.tab_bar,
        }
    }

    pub fn find(&self, list: NavList, key: &str) -> Option<&NavItem> {
        self.items(list).iter().find(|item| item.key == key)
    }
}

fn validate_list(list: NavList, items: &[NavItem]) -> Result<(), MenuError> {
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.key.trim().is_empty() {
            return Err(MenuError::EmptyKey { list, index });
        }
        if item.title.trim().is_empty() {
            return Err(MenuError::EmptyTitle {
                list,
                key: item.key.clone(),
            });
        }
        if !seen.insert(item.key.as_str()) {
            return Err(MenuError::DuplicateKey {
                list,
                key: item.key.clone(),
            });
        }
    }
    Ok(())
}
