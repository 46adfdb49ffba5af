//! Historical action names and their canonical replacements.
//!
//! Older call sites recorded loosely-named actions (`role.attach`,
//! `role.attach_attempt`). Lookups are case-insensitive; unknown actions pass
//! through unchanged.

use std::borrow::Cow;

/// Alias to canonical action table. Keys are lowercase.
const ACTION_ALIASES: &[(&str, &str)] = &[
    ("role.attach", "rbac.user_role.attached"),
    ("role.attach_attempt", "rbac.user_role.attached"),
    ("role.detach", "rbac.user_role.detached"),
    ("role.detach_attempt", "rbac.user_role.detached"),
    ("role.replace", "rbac.user_role.replaced"),
    ("role.replace_attempt", "rbac.user_role.replaced"),
    ("role.sync", "rbac.user_role.replaced"),
    ("role.create", "rbac.role.created"),
    ("role.update", "rbac.role.updated"),
    ("role.rename", "rbac.role.updated"),
    ("role.delete", "rbac.role.deleted"),
    ("user.create", "rbac.user.created"),
    ("user.delete", "rbac.user.deleted"),
    ("settings.update", "setting.modified"),
    ("setting.update", "setting.modified"),
    ("setting.updated", "setting.modified"),
    ("evidence.upload", "evidence.uploaded"),
    ("evidence.download", "evidence.downloaded"),
    ("evidence.delete", "evidence.deleted"),
    ("evidence.purge", "evidence.purged"),
];

/// Resolve an action name to its canonical form.
pub fn canonical_action(action: &str) -> Cow<'_, str> {
    let key = action.trim().to_lowercase();
    ACTION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(Cow::Borrowed(action), |(_, canonical)| Cow::Borrowed(*canonical))
}
