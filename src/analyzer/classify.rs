//! Action classification and address parsing.
//!
//! Classification folds the ordered list of low-level Terraform action verbs
//! into exactly one [`ChangeAction`]. The rules are deterministic and
//! order-insensitive for the delete+create pair, which always means a
//! replacement regardless of whether Terraform plans destroy-then-create or
//! create-then-destroy.

use crate::model::ChangeAction;

/// Classifies a raw action-verb list into a single change action.
///
/// Rules, in order:
/// 1. exactly `["no-op"]` is a no-op, exactly `["read"]` is a read;
/// 2. a list containing both `delete` and `create` is a replacement;
/// 3. `delete` without `create` is a deletion, `create` without `delete`
///    is a creation;
/// 4. anything else (including verb combinations outside the known
///    vocabulary) is conservatively an update, so unknown qualifiers never
///    abort analysis.
///
/// An empty list classifies as no-op, matching Terraform's meaning for a
/// resource with nothing to do.
#[must_use]
pub fn classify_actions(actions: &[String]) -> ChangeAction {
    if actions.is_empty() {
        return ChangeAction::NoOp;
    }

    if actions.len() == 1 {
        match actions[0].as_str() {
            "no-op" => return ChangeAction::NoOp,
            "read" => return ChangeAction::Read,
            _ => {}
        }
    }

    let has_create = actions.iter().any(|a| a == "create");
    let has_delete = actions.iter().any(|a| a == "delete");

    match (has_delete, has_create) {
        (true, true) => ChangeAction::Replace,
        (true, false) => ChangeAction::Delete,
        (false, true) => ChangeAction::Create,
        (false, false) => ChangeAction::Update,
    }
}

/// Splits a resource address into `(type, name)`.
///
/// Everything before the first `.` is the type; an address without a
/// separator yields itself for both parts. Callers prefer the declared
/// `type`/`name` fields when the document carries them, so this fallback is
/// only used for plain top-level addresses.
#[must_use]
pub fn split_address(address: &str) -> (String, String) {
    address.split_once('.').map_or_else(
        || (address.to_string(), address.to_string()),
        |(resource_type, resource_name)| (resource_type.to_string(), resource_name.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_verb_classification() {
        assert_eq!(classify_actions(&verbs(&["create"])), ChangeAction::Create);
        assert_eq!(classify_actions(&verbs(&["update"])), ChangeAction::Update);
        assert_eq!(classify_actions(&verbs(&["delete"])), ChangeAction::Delete);
        assert_eq!(classify_actions(&verbs(&["no-op"])), ChangeAction::NoOp);
        assert_eq!(classify_actions(&verbs(&["read"])), ChangeAction::Read);
    }

    #[test]
    fn test_replace_is_order_insensitive() {
        assert_eq!(
            classify_actions(&verbs(&["delete", "create"])),
            ChangeAction::Replace
        );
        assert_eq!(
            classify_actions(&verbs(&["create", "delete"])),
            ChangeAction::Replace
        );
    }

    #[test]
    fn test_empty_list_is_no_op() {
        assert_eq!(classify_actions(&[]), ChangeAction::NoOp);
    }

    #[test]
    fn test_unknown_combinations_default_to_update() {
        assert_eq!(
            classify_actions(&verbs(&["refresh", "forget"])),
            ChangeAction::Update
        );
        assert_eq!(
            classify_actions(&verbs(&["no-op", "read"])),
            ChangeAction::Update
        );
    }

    #[test]
    fn test_extra_qualifiers_keep_core_verb() {
        assert_eq!(
            classify_actions(&verbs(&["delete", "forget"])),
            ChangeAction::Delete
        );
        assert_eq!(
            classify_actions(&verbs(&["create", "refresh"])),
            ChangeAction::Create
        );
    }

    #[test]
    fn test_split_address() {
        assert_eq!(
            split_address("aws_instance.web"),
            ("aws_instance".to_string(), "web".to_string())
        );
        assert_eq!(
            split_address("aws_subnet.private.0"),
            ("aws_subnet".to_string(), "private.0".to_string())
        );
        assert_eq!(
            split_address("invalid"),
            ("invalid".to_string(), "invalid".to_string())
        );
    }
}
