//! Role Entity Implementation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::string_utils::normalize_key;

/// 이름이 붙은 권한 그룹
///
/// 역할 이름은 대소문자 구분 없이 유일하며, 부트스트랩에서 한 번 생성된 뒤 삭제되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub normalized_name: String,
}

impl Role {
    pub fn new(name: &str) -> Self {
        let name = name.trim().to_string();

        Self {
            id: Uuid::new_v4().to_string(),
            normalized_name: normalize_key(&name),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_is_trimmed_and_normalized() {
        let role = Role::new("  Agent ");

        assert_eq!(role.name, "Agent");
        assert_eq!(role.normalized_name, "AGENT");
    }
}
