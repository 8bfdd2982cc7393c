use crate::enums::{Condition, Status, SustainType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 策略等级 ID。由调用方/服务端分配，在父实体内唯一；
/// 永远不要用数组下标充当该标识。
pub type LevelId = i64;

/// 默认分页大小。
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 分页请求参数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 页码（从 1 开始）
    pub page_num: u32,
    /// 每页条数
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 分页响应参数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationReply {
    /// 页码
    pub page_num: u32,
    /// 每页条数
    pub page_size: u32,
    /// 总条数
    pub total: u64,
}

/// 列表响应体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReply<T> {
    /// 数据列表
    pub list: Vec<T>,
    /// 分页信息
    pub pagination: PaginationReply,
}

/// 策略等级明细（读取形态，来自服务端）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelItem {
    /// 等级数据 ID
    pub id: i64,
    /// 策略等级（父实体内唯一）
    pub level_id: LevelId,
    /// 策略持续时间（如 "5m"）
    pub duration: String,
    /// 持续次数
    pub count: i64,
    /// 持续的类型
    pub sustain_type: SustainType,
    /// 执行频率
    pub interval: String,
    /// 条件
    pub condition: Condition,
    /// 阈值
    pub threshold: f64,
    /// 状态
    pub status: Status,
    /// 所属策略模板 ID
    pub strategy_id: i64,
}

/// 策略等级明细（写入形态）。
///
/// 新增等级在持久化前没有 `id`；键空间由 `level_id` 承担。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelMutation {
    /// 等级数据 ID（新增时为空，由服务端分配）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 策略持续时间
    pub duration: String,
    /// 持续次数
    pub count: i64,
    /// 持续的类型
    pub sustain_type: SustainType,
    /// 执行频率
    pub interval: String,
    /// 条件
    pub condition: Condition,
    /// 阈值
    pub threshold: f64,
}

/// 策略模板详情。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    /// 策略模板 ID
    pub id: i64,
    /// 策略名称
    pub alert: String,
    /// 策略表达式（对本核心不透明）
    pub expr: String,
    /// 策略各等级明细
    pub levels: Vec<LevelItem>,
    /// 策略标签
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// 策略注解
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    /// 策略状态
    pub status: Status,
    /// 策略说明信息
    pub remark: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 创建/更新策略模板请求体。
///
/// `level` 以 `level_id` 为键；`BTreeMap` 保证编码顺序为等级 ID 升序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMutation {
    /// 策略名称
    pub alert: String,
    /// 策略表达式
    pub expr: String,
    /// 策略说明信息
    pub remark: String,
    /// 标签字典
    pub labels: HashMap<String, String>,
    /// 注解
    pub annotations: HashMap<String, String>,
    /// 策略等级明细，键为策略等级 ID
    pub level: BTreeMap<LevelId, LevelMutation>,
}

/// 策略组详情。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItem {
    /// 策略组 ID
    pub id: i64,
    /// 策略组名称
    pub name: String,
    /// 策略组说明信息
    pub remark: String,
    /// 关联模板类目 ID 集合
    #[serde(default)]
    pub categories_ids: Vec<i64>,
    /// 状态
    pub status: Status,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 创建/更新策略组请求体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMutation {
    /// 策略组名称
    pub name: String,
    /// 策略组说明信息
    pub remark: String,
    /// 关联模板类目 ID 集合
    pub categories_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let p = Pagination::default();
        assert_eq!(p.page_num, 1);
        assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::default()).unwrap();
        assert_eq!(json["pageNum"], 1);
        assert_eq!(json["pageSize"], 10);
    }

    #[test]
    fn level_mutation_omits_absent_id() {
        let level = LevelMutation {
            id: None,
            duration: "5m".into(),
            count: 3,
            sustain_type: SustainType::For,
            interval: "1m".into(),
            condition: Condition::Gt,
            threshold: 90.0,
        };
        let json = serde_json::to_value(&level).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["sustainType"], 1);
        assert_eq!(json["condition"], ">");
    }

    #[test]
    fn template_mutation_keys_levels_by_level_id_in_ascending_order() {
        let mut level = BTreeMap::new();
        for level_id in [7_i64, 2, 4] {
            level.insert(
                level_id,
                LevelMutation {
                    id: None,
                    duration: "5m".into(),
                    count: 1,
                    sustain_type: SustainType::For,
                    interval: "1m".into(),
                    condition: Condition::Ge,
                    threshold: 1.0,
                },
            );
        }
        let payload = TemplateMutation {
            alert: "high-cpu".into(),
            expr: "cpu_usage > 90".into(),
            remark: String::new(),
            labels: HashMap::new(),
            annotations: HashMap::new(),
            level,
        };
        let keys: Vec<LevelId> = payload.level.keys().copied().collect();
        assert_eq!(keys, vec![2, 4, 7]);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["level"]["2"].is_object());
        assert!(json["level"]["7"].is_object());
    }
}
