use argus_common::enums::Status;
use argus_common::types::Pagination;
use serde::{Deserialize, Serialize};

/// 策略模板列表请求参数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplateRequest {
    /// 分页参数
    pub pagination: Pagination,
    /// 搜索关键字
    #[serde(default)]
    pub keyword: String,
    /// 状态（`All` 表示不过滤）
    #[serde(default = "Status::all")]
    pub status: Status,
}

impl Default for ListTemplateRequest {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            keyword: String::new(),
            status: Status::All,
        }
    }
}

/// 策略组列表请求参数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGroupRequest {
    /// 分页参数
    pub pagination: Pagination,
    /// 搜索关键字
    #[serde(default)]
    pub keyword: String,
    /// 状态（`All` 表示不过滤）
    #[serde(default = "Status::all")]
    pub status: Status,
}

impl Default for ListGroupRequest {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            keyword: String::new(),
            status: Status::All,
        }
    }
}

/// 详情响应体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailReply<T> {
    /// 实体详情
    pub detail: T,
}

/// 创建响应体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReply {
    /// 新建实体 ID
    pub id: i64,
}

/// 更新请求信封。字段级局部更新：`update` 中缺省的字段服务端保持不变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest<T> {
    pub update: T,
}

/// 批量状态变更请求体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    /// 目标实体 ID 列表
    pub ids: Vec<i64>,
    /// 目标状态（必须为具体状态，不允许 `All`）
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_defaults_to_wildcard_filter() {
        let req = ListTemplateRequest::default();
        assert_eq!(req.pagination.page_num, 1);
        assert_eq!(req.pagination.page_size, 10);
        assert!(req.keyword.is_empty());
        assert_eq!(req.status, Status::All);
    }

    #[test]
    fn list_request_wire_shape() {
        let req = ListTemplateRequest {
            keyword: "cpu".into(),
            status: Status::Enable,
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["pagination"]["pageNum"], 1);
        assert_eq!(json["keyword"], "cpu");
        assert_eq!(json["status"], 1);
    }

    #[test]
    fn update_envelope_wraps_payload() {
        let req = UpdateRequest { update: 7_i64 };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["update"], 7);
    }
}
