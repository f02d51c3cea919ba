//! Menu entity - backend `systemManage` module
//!
//! Menus form a tree through `children`; each menu also carries the
//! route-meta props the router reads when it mounts the menu's page.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::common::{CommonRecord, PaginatingQueryRecord};
use super::route::RouteQuery;

/// Menu type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum MenuType {
    /// 目录
    Directory = 1,
    /// 菜单
    Menu = 2,
}

/// Icon type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum IconType {
    /// iconify icon
    Iconify = 1,
    /// local icon
    Local = 2,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButton {
    /// button id
    pub id: i64,
    /// button code, used to control the button permission
    pub code: String,
    /// button description
    pub desc: String,
    /// button label
    #[serde(default)]
    pub label: String,
}

/// Route-meta props stored on a menu
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPropsOfRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_in_menu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_menu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_index_in_tab: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<RouteQuery>>,
}

/// Menu fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuFields {
    /// parent menu id
    pub parent_id: i64,
    pub menu_type: MenuType,
    pub menu_name: String,
    pub route_name: String,
    pub route_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// iconify icon name or local icon name
    #[serde(default)]
    pub icon: String,
    pub icon_type: IconType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<MenuButton>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Menu>>,
    #[serde(flatten)]
    pub route_props: MenuPropsOfRoute,
}

pub type Menu = CommonRecord<MenuFields>;

pub type MenuList = PaginatingQueryRecord<Menu>;

/// Menu tree node, as shown in the role resource picker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTree {
    pub id: i64,
    pub label: String,
    pub p_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuTree>>,
}

impl MenuFields {
    /// Iterate over direct child menus
    pub fn child_menus(&self) -> impl Iterator<Item = &Menu> {
        self.children.iter().flatten()
    }

    /// Iterate over the buttons declared on this menu
    pub fn menu_buttons(&self) -> impl Iterator<Item = &MenuButton> {
        self.buttons.iter().flatten()
    }
}
