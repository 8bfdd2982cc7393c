//! Form-field shapes and their translation to the wire-level request
//! shapes.
//!
//! The edit modal manipulates an ordered sequence of level rows and an
//! editable key/value list for labels/annotations; the wire expects a
//! `level_id`-keyed map and flat string-to-string mappings. The
//! encode/decode pair here is the only place that translation happens,
//! and it never uses array position as identity.

use argus_common::enums::{Condition, Status, SustainType};
use argus_common::types::{
    GroupItem, GroupMutation, LevelId, LevelItem, LevelMutation, TemplateItem, TemplateMutation,
};
use std::collections::{BTreeMap, HashMap, HashSet};

/// One editable key/value row (labels, annotations).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvItem {
    pub key: String,
    pub value: String,
}

impl KvItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One alert-level row as the edit form manipulates it.
///
/// `threshold` stays raw text until validation so a half-typed number
/// never corrupts the model. `id` is absent for rows added in this
/// session; the server assigns it on persist.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelForm {
    pub id: Option<i64>,
    pub level_id: LevelId,
    pub duration: String,
    pub count: i64,
    pub sustain_type: SustainType,
    pub condition: Option<Condition>,
    pub interval: String,
    pub threshold: String,
}

impl Default for LevelForm {
    fn default() -> Self {
        Self {
            id: None,
            level_id: 0,
            duration: "5m".to_string(),
            count: 1,
            // A fresh row must never start on the wildcard code.
            sustain_type: SustainType::For,
            condition: None,
            interval: "1m".to_string(),
            threshold: String::new(),
        }
    }
}

/// Strategy template edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateForm {
    pub alert: String,
    pub expr: String,
    pub remark: String,
    pub labels: Vec<KvItem>,
    pub annotations: Vec<KvItem>,
    pub levels: Vec<LevelForm>,
}

/// Strategy group edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupForm {
    pub name: String,
    pub remark: String,
    pub categories_ids: Vec<i64>,
}

/// One rejected field, reported inline near the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: impl Into<String>, message: &'static str) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }
}

/// All validation failures of one submit attempt. Raised before any
/// network call; the session stays open and untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: impl Into<String>, message: &'static str) {
        self.0.push(FieldError::new(field, message));
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Validates a template form without building the payload.
pub fn validate_template(form: &TemplateForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.alert.trim().is_empty() {
        errors.push("alert", "策略名称不能为空");
    }
    if form.levels.is_empty() {
        errors.push("levels", "至少需要一个策略等级");
    }

    let mut seen_levels: HashSet<LevelId> = HashSet::new();
    for (idx, level) in form.levels.iter().enumerate() {
        let field = |name: &str| format!("levels[{idx}].{name}");
        if !seen_levels.insert(level.level_id) {
            errors.push(field("levelId"), "策略等级重复");
        }
        if level.sustain_type.is_wildcard() {
            errors.push(field("sustainType"), "请选择持续类型");
        }
        if level.condition.is_none() {
            errors.push(field("condition"), "请选择条件");
        }
        if level.count <= 0 {
            errors.push(field("count"), "持续次数必须大于 0");
        }
        if level.duration.trim().is_empty() {
            errors.push(field("duration"), "持续时间不能为空");
        }
        if level.interval.trim().is_empty() {
            errors.push(field("interval"), "执行频率不能为空");
        }
        if level.threshold.trim().parse::<f64>().is_err() {
            errors.push(field("threshold"), "阈值必须为数字");
        }
    }

    check_unique_keys(&form.labels, "labels", &mut errors);
    check_unique_keys(&form.annotations, "annotations", &mut errors);

    errors.into_result()
}

/// Validates a group form.
pub fn validate_group(form: &GroupForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if form.name.trim().is_empty() {
        errors.push("name", "策略组名称不能为空");
    }
    errors.into_result()
}

fn check_unique_keys(items: &[KvItem], field: &str, errors: &mut ValidationErrors) {
    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, item) in items.iter().enumerate() {
        if item.key.trim().is_empty() {
            errors.push(format!("{field}[{idx}].key"), "键不能为空");
        } else if !seen.insert(item.key.as_str()) {
            errors.push(format!("{field}[{idx}].key"), "键重复");
        }
    }
}

/// Validates and builds the wire payload for a template form.
///
/// Level rows become a `level_id`-keyed map; rows without a persisted
/// `id` keep `id: None` in the payload and the server resolves them.
pub fn encode_template(form: &TemplateForm) -> Result<TemplateMutation, ValidationErrors> {
    validate_template(form)?;

    let mut level: BTreeMap<LevelId, LevelMutation> = BTreeMap::new();
    for row in &form.levels {
        // Parse/unwrap cannot fail here: validate_template vouched for them.
        let threshold = row.threshold.trim().parse::<f64>().unwrap_or_default();
        let condition = row.condition.unwrap_or(Condition::Gt);
        level.insert(
            row.level_id,
            LevelMutation {
                id: row.id,
                duration: row.duration.clone(),
                count: row.count,
                sustain_type: row.sustain_type,
                interval: row.interval.clone(),
                condition,
                threshold,
            },
        );
    }

    Ok(TemplateMutation {
        alert: form.alert.trim().to_string(),
        expr: form.expr.clone(),
        remark: form.remark.clone(),
        labels: collect_kv(&form.labels),
        annotations: collect_kv(&form.annotations),
        level,
    })
}

/// Validates and builds the wire payload for a group form.
pub fn encode_group(form: &GroupForm) -> Result<GroupMutation, ValidationErrors> {
    validate_group(form)?;
    Ok(GroupMutation {
        name: form.name.trim().to_string(),
        remark: form.remark.clone(),
        categories_ids: form.categories_ids.clone(),
    })
}

fn collect_kv(items: &[KvItem]) -> HashMap<String, String> {
    items
        .iter()
        .map(|item| (item.key.clone(), item.value.clone()))
        .collect()
}

/// Orders a fetched level collection for form rendering: ascending
/// `level_id`, the stable identity of each row.
pub fn decode_levels(mut levels: Vec<LevelItem>) -> Vec<LevelForm> {
    levels.sort_by_key(|l| l.level_id);
    levels
        .into_iter()
        .map(|l| LevelForm {
            id: Some(l.id),
            level_id: l.level_id,
            duration: l.duration,
            count: l.count,
            sustain_type: l.sustain_type,
            condition: Some(l.condition),
            interval: l.interval,
            threshold: format_threshold(l.threshold),
        })
        .collect()
}

/// Populates a template form from a fetched entity.
pub fn decode_template(item: TemplateItem) -> TemplateForm {
    TemplateForm {
        alert: item.alert,
        expr: item.expr,
        remark: item.remark,
        labels: decode_kv(&item.labels),
        annotations: decode_kv(&item.annotations),
        levels: decode_levels(item.levels),
    }
}

/// Populates a group form from a fetched entity.
pub fn decode_group(item: GroupItem) -> GroupForm {
    GroupForm {
        name: item.name,
        remark: item.remark,
        categories_ids: item.categories_ids,
    }
}

fn decode_kv(map: &HashMap<String, String>) -> Vec<KvItem> {
    let mut items: Vec<KvItem> = map
        .iter()
        .map(|(k, v)| KvItem::new(k.clone(), v.clone()))
        .collect();
    items.sort_by(|a, b| a.key.cmp(&b.key));
    items
}

fn format_threshold(value: f64) -> String {
    // Keep "90" instead of "90.0" so re-editing matches what was typed.
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// A level row ready to round-trip: used when re-encoding an edited
/// entity whose rows all carry persisted ids.
pub fn encode_levels(rows: &[LevelForm]) -> BTreeMap<LevelId, LevelMutation> {
    rows.iter()
        .map(|row| {
            (
                row.level_id,
                LevelMutation {
                    id: row.id,
                    duration: row.duration.clone(),
                    count: row.count,
                    sustain_type: row.sustain_type,
                    interval: row.interval.clone(),
                    condition: row.condition.unwrap_or(Condition::Gt),
                    threshold: row.threshold.trim().parse::<f64>().unwrap_or_default(),
                },
            )
        })
        .collect()
}

/// Inverse of [`encode_levels`] for persisted rows.
pub fn levels_from_map(map: &BTreeMap<LevelId, LevelMutation>, status: Status) -> Vec<LevelItem> {
    map.iter()
        .map(|(level_id, m)| LevelItem {
            id: m.id.unwrap_or_default(),
            level_id: *level_id,
            duration: m.duration.clone(),
            count: m.count,
            sustain_type: m.sustain_type,
            interval: m.interval.clone(),
            condition: m.condition,
            threshold: m.threshold,
            status,
            strategy_id: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_row(level_id: LevelId, id: Option<i64>) -> LevelForm {
        LevelForm {
            id,
            level_id,
            duration: "5m".into(),
            count: 3,
            sustain_type: SustainType::For,
            condition: Some(Condition::Gt),
            interval: "1m".into(),
            threshold: "90".into(),
        }
    }

    fn valid_form() -> TemplateForm {
        TemplateForm {
            alert: "high-cpu".into(),
            expr: "cpu_usage > 90".into(),
            remark: String::new(),
            labels: vec![KvItem::new("severity", "critical")],
            annotations: vec![KvItem::new("summary", "CPU 过高")],
            levels: vec![level_row(1, None)],
        }
    }

    #[test]
    fn encode_keys_levels_by_level_id_not_position() {
        let mut form = valid_form();
        form.levels = vec![level_row(9, Some(100)), level_row(2, None)];
        let payload = encode_template(&form).unwrap();
        let keys: Vec<LevelId> = payload.level.keys().copied().collect();
        assert_eq!(keys, vec![2, 9]);
        assert_eq!(payload.level[&9].id, Some(100));
        assert_eq!(payload.level[&2].id, None);
    }

    #[test]
    fn round_trip_preserves_ordered_sequence_for_increasing_ids() {
        let items = vec![
            LevelItem {
                id: 11,
                level_id: 1,
                duration: "5m".into(),
                count: 3,
                sustain_type: SustainType::For,
                interval: "1m".into(),
                condition: Condition::Gt,
                threshold: 90.0,
                status: Status::Enable,
                strategy_id: 5,
            },
            LevelItem {
                id: 12,
                level_id: 2,
                duration: "10m".into(),
                count: 5,
                sustain_type: SustainType::Max,
                interval: "2m".into(),
                condition: Condition::Ge,
                threshold: 99.5,
                status: Status::Enable,
                strategy_id: 5,
            },
        ];
        let rows = decode_levels(items.clone());
        let map = encode_levels(&rows);
        let back = levels_from_map(&map, Status::Enable);
        // strategy_id is not carried by the mutation shape
        for (orig, round) in items.iter().zip(&back) {
            assert_eq!(orig.id, round.id);
            assert_eq!(orig.level_id, round.level_id);
            assert_eq!(orig.duration, round.duration);
            assert_eq!(orig.count, round.count);
            assert_eq!(orig.sustain_type, round.sustain_type);
            assert_eq!(orig.condition, round.condition);
            assert_eq!(orig.threshold, round.threshold);
        }
        assert_eq!(decode_levels(back), rows);
    }

    #[test]
    fn decode_orders_levels_ascending() {
        let mut items = Vec::new();
        for (id, level_id) in [(31_i64, 3_i64), (11, 1), (21, 2)] {
            items.push(LevelItem {
                id,
                level_id,
                duration: "5m".into(),
                count: 1,
                sustain_type: SustainType::For,
                interval: "1m".into(),
                condition: Condition::Gt,
                threshold: 1.0,
                status: Status::Enable,
                strategy_id: 1,
            });
        }
        let rows = decode_levels(items);
        let order: Vec<LevelId> = rows.iter().map(|r| r.level_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_empty_alert() {
        let mut form = valid_form();
        form.alert = "  ".into();
        let err = validate_template(&form).unwrap_err();
        assert!(err.0.iter().any(|e| e.field == "alert"));
    }

    #[test]
    fn rejects_non_positive_count() {
        let mut form = valid_form();
        form.levels[0].count = 0;
        let err = validate_template(&form).unwrap_err();
        assert!(err.0.iter().any(|e| e.field.ends_with("count")));
    }

    #[test]
    fn rejects_wildcard_sustain_type() {
        let mut form = valid_form();
        form.levels[0].sustain_type = SustainType::Unknown;
        let err = validate_template(&form).unwrap_err();
        assert!(err.0.iter().any(|e| e.field.ends_with("sustainType")));
    }

    #[test]
    fn rejects_missing_condition_and_bad_threshold() {
        let mut form = valid_form();
        form.levels[0].condition = None;
        form.levels[0].threshold = "ninety".into();
        let err = validate_template(&form).unwrap_err();
        assert!(err.0.iter().any(|e| e.field.ends_with("condition")));
        assert!(err.0.iter().any(|e| e.field.ends_with("threshold")));
    }

    #[test]
    fn rejects_duplicate_label_keys() {
        let mut form = valid_form();
        form.labels = vec![KvItem::new("env", "prod"), KvItem::new("env", "dev")];
        let err = validate_template(&form).unwrap_err();
        assert!(err.0.iter().any(|e| e.field == "labels[1].key"));
    }

    #[test]
    fn rejects_duplicate_level_ids() {
        let mut form = valid_form();
        form.levels = vec![level_row(1, None), level_row(1, None)];
        let err = validate_template(&form).unwrap_err();
        assert!(err.0.iter().any(|e| e.field.ends_with("levelId")));
    }

    #[test]
    fn fresh_level_row_does_not_default_to_wildcard() {
        let row = LevelForm::default();
        assert!(!row.sustain_type.is_wildcard());
    }

    #[test]
    fn group_validation_requires_name() {
        let form = GroupForm::default();
        assert!(validate_group(&form).is_err());
        let form = GroupForm {
            name: "核心服务".into(),
            ..Default::default()
        };
        assert!(validate_group(&form).is_ok());
    }
}
