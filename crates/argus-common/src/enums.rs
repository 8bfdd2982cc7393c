//! Closed enumeration vocabularies used across the console.
//!
//! Every integer-coded enum serializes as its wire code, iterates in
//! declared numeric order starting at the code-0 wildcard ("全部" /
//! unknown), and carries `{label, color?}` display metadata. The
//! wildcard variant is only meaningful in filter/search contexts;
//! persisted entity fields must hold a concrete value, which the form
//! validation in the console crate enforces.

use serde::{Deserialize, Serialize};

/// Display metadata attached to one enum code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMeta {
    pub label: &'static str,
    pub color: Option<&'static str>,
}

macro_rules! code_enum {
    (
        $(#[$outer:meta])*
        $name:ident {
            $( $(#[$vdoc:meta])* $variant:ident = $code:literal, $label:expr, $color:expr; )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$vdoc])* $variant = $code, )+
        }

        impl $name {
            /// All variants in declared numeric order, wildcard first.
            pub const VARIANTS: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Integer wire code.
            pub fn code(self) -> i32 {
                self as i32
            }

            /// Display metadata for this code. Exhaustive by construction.
            pub fn meta(self) -> EnumMeta {
                match self {
                    $( $name::$variant => EnumMeta { label: $label, color: $color }, )+
                }
            }

            /// True for the code-0 "ALL"/unknown sentinel, which means
            /// "no filter applied" and is invalid in persisted fields.
            pub fn is_wildcard(self) -> bool {
                self.code() == 0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = String;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " code: {}"),
                        other
                    )),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.meta().label)
            }
        }
    };
}

code_enum! {
    /// 实体状态。
    ///
    /// `All` 仅用于搜索过滤；启用/禁用状态变更只在 `Enable` 与
    /// `Disable` 之间切换。
    Status {
        /// 全部（不过滤）
        All = 0, "全部", Some("blue");
        /// 启用
        Enable = 1, "启用", Some("green");
        /// 禁用
        Disable = 2, "禁用", Some("red");
    }
}

impl Status {
    /// serde default helper: filter requests fall back to `All`.
    pub fn all() -> Status {
        Status::All
    }
}

code_enum! {
    /// 告警持续类型：阈值越界在窗口内如何持续才触发。
    SustainType {
        /// 未知持续类型（仅过滤用）
        Unknown = 0, "全部", None;
        /// m 时间内出现 n 次
        For = 1, "持续出现", None;
        /// m 时间内最多出现 n 次
        Max = 2, "最多出现", None;
        /// m 时间内最少出现 n 次
        Min = 3, "最少出现", None;
    }
}

code_enum! {
    /// 指标类型。
    MetricType {
        /// 未知指标类型（仅过滤用）
        Unknown = 0, "全部", None;
        Counter = 1, "Counter", Some("green");
        Gauge = 2, "Gauge", Some("blue");
        Histogram = 3, "Histogram", Some("purple");
        Summary = 4, "Summary", Some("orange");
    }
}

code_enum! {
    /// 数据源类型。
    DataSourceType {
        /// 未知数据源类型（仅过滤用）
        Unknown = 0, "全部", None;
        Metric = 1, "Metric", None;
        Log = 2, "Log", None;
        Trace = 3, "Trace", None;
    }
}

code_enum! {
    /// 存储器类型。
    StorageType {
        /// 未知存储器类型（仅过滤用）
        Unknown = 0, "全部", None;
        Prometheus = 1, "Prometheus", None;
    }
}

code_enum! {
    /// 性别。
    Gender {
        All = 0, "全部", None;
        Male = 1, "男", None;
        Female = 2, "女", None;
    }
}

code_enum! {
    /// 系统角色。
    SystemRole {
        /// 全部 / 未知
        All = 0, "全部", None;
        /// 超级管理员
        SuperAdmin = 1, "超级管理员", None;
        /// 普通管理员
        Admin = 2, "管理员", None;
        /// 普通用户
        User = 3, "普通用户", None;
    }
}

/// Threshold comparison operator applied to the metric value.
///
/// String-coded on the wire (`"="`, `"!="`, `">"`, `"<"`, `">="`,
/// `"<="`). There is no wildcard variant; an unset condition in a form
/// is modeled as `Option<Condition>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

impl Condition {
    /// All operators in declared order.
    pub const VARIANTS: &'static [Condition] = &[
        Condition::Eq,
        Condition::Ne,
        Condition::Gt,
        Condition::Lt,
        Condition::Ge,
        Condition::Le,
    ];

    /// Wire symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Condition::Eq => "=",
            Condition::Ne => "!=",
            Condition::Gt => ">",
            Condition::Lt => "<",
            Condition::Ge => ">=",
            Condition::Le => "<=",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Condition::Eq),
            "!=" => Ok(Condition::Ne),
            ">" => Ok(Condition::Gt),
            "<" => Ok(Condition::Lt),
            ">=" => Ok(Condition::Ge),
            "<=" => Ok(Condition::Le),
            other => Err(format!("unknown condition: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_declared_in_numeric_order_with_wildcard_first() {
        fn check<T: Copy>(variants: &[T], code: fn(T) -> i32) {
            assert_eq!(code(variants[0]), 0, "wildcard must come first");
            for pair in variants.windows(2) {
                assert!(code(pair[0]) < code(pair[1]));
            }
        }
        check(Status::VARIANTS, Status::code);
        check(SustainType::VARIANTS, SustainType::code);
        check(MetricType::VARIANTS, MetricType::code);
        check(DataSourceType::VARIANTS, DataSourceType::code);
        check(StorageType::VARIANTS, StorageType::code);
        check(Gender::VARIANTS, Gender::code);
        check(SystemRole::VARIANTS, SystemRole::code);
    }

    #[test]
    fn every_variant_has_display_metadata() {
        for s in Status::VARIANTS {
            assert!(!s.meta().label.is_empty());
        }
        for m in MetricType::VARIANTS {
            assert!(!m.meta().label.is_empty());
        }
        assert_eq!(Status::Enable.meta().color, Some("green"));
        assert_eq!(Status::Disable.meta().color, Some("red"));
        assert_eq!(MetricType::Gauge.meta().label, "Gauge");
    }

    #[test]
    fn status_round_trips_as_integer_code() {
        let json = serde_json::to_string(&Status::Disable).unwrap();
        assert_eq!(json, "2");
        let back: Status = serde_json::from_str("1").unwrap();
        assert_eq!(back, Status::Enable);
        assert!(serde_json::from_str::<Status>("9").is_err());
    }

    #[test]
    fn wildcard_detection() {
        assert!(Status::All.is_wildcard());
        assert!(SustainType::Unknown.is_wildcard());
        assert!(!SustainType::For.is_wildcard());
        assert!(!Status::Enable.is_wildcard());
    }

    #[test]
    fn condition_round_trips_as_symbol() {
        let json = serde_json::to_string(&Condition::Ge).unwrap();
        assert_eq!(json, "\">=\"");
        let back: Condition = serde_json::from_str("\"!=\"").unwrap();
        assert_eq!(back, Condition::Ne);
        assert_eq!("<=".parse::<Condition>().unwrap(), Condition::Le);
        assert!("~".parse::<Condition>().is_err());
    }
}
