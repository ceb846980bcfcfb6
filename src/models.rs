use serde::{Deserialize, Serialize};
use toml::{Table, Value};

use crate::error::ComponentError;

/// 组件状态
///
/// 开放的键值记录，不约束 schema，各组件自行约定使用的键
/// （如 `title`、`words`、`count`）。所有修改都产生新的 State，
/// 已被观察到的 State 不会被原地改写。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(Table);

impl State {
    pub fn new() -> Self {
        Self(Table::new())
    }

    /// 构造时追加一个键值（覆盖同名键）
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 浅合并：`partial` 中的键覆盖或新增，其余键原样保留
    ///
    /// 两个输入都不会被修改，返回全新的记录。
    pub fn merge(&self, partial: &State) -> State {
        let mut merged = self.0.clone();
        for (key, value) in &partial.0 {
            merged.insert(key.clone(), value.clone());
        }
        State(merged)
    }

    /// 读取字符串字段，键不存在时返回 None
    pub fn str_field(&self, key: &str) -> Result<Option<&str>, ComponentError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ComponentError::type_mismatch(key, "string")),
        }
    }

    /// 读取整数字段，键不存在时返回 None
    pub fn integer_field(&self, key: &str) -> Result<Option<i64>, ComponentError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::Integer(n)) => Ok(Some(*n)),
            Some(_) => Err(ComponentError::type_mismatch(key, "integer")),
        }
    }

    /// 读取字符串序列，键不存在时视为空序列
    pub fn string_list(&self, key: &str) -> Result<Vec<&str>, ComponentError> {
        let Some(value) = self.0.get(key) else {
            return Ok(Vec::new());
        };
        let Value::Array(items) = value else {
            return Err(ComponentError::type_mismatch(key, "array of strings"));
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| ComponentError::type_mismatch(key, "array of strings"))
            })
            .collect()
    }
}

impl From<Table> for State {
    fn from(table: Table) -> Self {
        Self(table)
    }
}

impl From<State> for Table {
    fn from(state: State) -> Self {
        state.0
    }
}
