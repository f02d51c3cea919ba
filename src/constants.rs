//! Business constants
//!
//! Enum-to-i18n-key tables for status and menu selects, and the option
//! lists derived from them.

use serde::Serialize;
use std::sync::LazyLock;

use crate::entity::{EnableStatus, IconType, MenuType};

/// i18n key resolved by the UI
pub type I18nKey = &'static str;

/// One entry of a select input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption<K> {
    pub label: I18nKey,
    pub value: K,
}

pub const ENABLE_STATUS_RECORD: &[(EnableStatus, I18nKey)] = &[
    (EnableStatus::Enable, "page.manage.common.status.enable"),
    (EnableStatus::Disable, "page.manage.common.status.disable"),
];

pub const MENU_TYPE_RECORD: &[(MenuType, I18nKey)] = &[
    (MenuType::Directory, "page.manage.menu.type.directory"),
    (MenuType::Menu, "page.manage.menu.type.menu"),
];

pub const MENU_ICON_TYPE_RECORD: &[(IconType, I18nKey)] = &[
    (IconType::Iconify, "page.manage.menu.iconType.iconify"),
    (IconType::Local, "page.manage.menu.iconType.local"),
];

pub const TENANT_STATUS_RECORD: &[(EnableStatus, I18nKey)] = &[
    (EnableStatus::Enable, "page.tenant.common.status.enable"),
    (EnableStatus::Disable, "page.tenant.common.status.disable"),
];

/// Turn a record into select options, keeping declared order
pub fn to_options<K: Copy>(record: &[(K, I18nKey)]) -> Vec<SelectOption<K>> {
    record
        .iter()
        .map(|&(value, label)| SelectOption { label, value })
        .collect()
}

/// Look up the i18n key for `key`
pub fn record_label<K: PartialEq>(record: &[(K, I18nKey)], key: K) -> Option<I18nKey> {
    record
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, label)| label)
}

static ENABLE_STATUS_OPTIONS: LazyLock<Vec<SelectOption<EnableStatus>>> =
    LazyLock::new(|| to_options(ENABLE_STATUS_RECORD));

static MENU_TYPE_OPTIONS: LazyLock<Vec<SelectOption<MenuType>>> =
    LazyLock::new(|| to_options(MENU_TYPE_RECORD));

static MENU_ICON_TYPE_OPTIONS: LazyLock<Vec<SelectOption<IconType>>> =
    LazyLock::new(|| to_options(MENU_ICON_TYPE_RECORD));

static TENANT_STATUS_OPTIONS: LazyLock<Vec<SelectOption<EnableStatus>>> =
    LazyLock::new(|| to_options(TENANT_STATUS_RECORD));

pub fn enable_status_options() -> &'static [SelectOption<EnableStatus>] {
    &ENABLE_STATUS_OPTIONS
}

pub fn menu_type_options() -> &'static [SelectOption<MenuType>] {
    &MENU_TYPE_OPTIONS
}

pub fn menu_icon_type_options() -> &'static [SelectOption<IconType>] {
    &MENU_ICON_TYPE_OPTIONS
}

pub fn tenant_status_options() -> &'static [SelectOption<EnableStatus>] {
    &TENANT_STATUS_OPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_mirrors<K: Copy + PartialEq + std::fmt::Debug>(
        record: &[(K, I18nKey)],
        options: &[SelectOption<K>],
    ) {
        assert_eq!(options.len(), record.len());
        for (option, (key, label)) in options.iter().zip(record) {
            assert_eq!(option.value, *key);
            assert_eq!(option.label, *label);
            assert_eq!(record_label(record, option.value), Some(option.label));
        }
    }

    #[test]
    fn options_mirror_their_records() {
        assert_mirrors(ENABLE_STATUS_RECORD, enable_status_options());
        assert_mirrors(MENU_TYPE_RECORD, menu_type_options());
        assert_mirrors(MENU_ICON_TYPE_RECORD, menu_icon_type_options());
        assert_mirrors(TENANT_STATUS_RECORD, tenant_status_options());
    }

    #[test]
    fn options_are_built_once() {
        assert!(std::ptr::eq(enable_status_options(), enable_status_options()));
    }

    #[test]
    fn to_options_keeps_order() {
        let record: &[(u8, I18nKey)] = &[(2, "b"), (1, "a"), (3, "c")];
        let values: Vec<u8> = to_options(record).iter().map(|o| o.value).collect();
        assert_eq!(values, vec![2, 1, 3]);
        assert!(to_options::<u8>(&[]).is_empty());
    }

    #[test]
    fn labels_by_key() {
        assert_eq!(
            record_label(MENU_TYPE_RECORD, MenuType::Menu),
            Some("page.manage.menu.type.menu")
        );
        assert_eq!(
            record_label(TENANT_STATUS_RECORD, EnableStatus::Disable),
            Some("page.tenant.common.status.disable")
        );
        assert_eq!(record_label(&[(1u8, "x")], 2), None);
    }

    #[test]
    fn options_serialize_for_selects() {
        assert_eq!(
            serde_json::to_value(enable_status_options()).unwrap(),
            json!([
                {"label": "page.manage.common.status.enable", "value": 1},
                {"label": "page.manage.common.status.disable", "value": 2}
            ])
        );
    }
}
