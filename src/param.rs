/// Значение, которое уходит исполнителю вместе с текстом запроса.
///
/// Порядок параметров совпадает с порядком плейсхолдеров в SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    // целые
    I64(i64),
    I32(i32),
    I16(i16),
    I8(i8),

    // числа с плавающей
    F64(f64),
    F32(f32),

    Bool(bool),

    // строки/байты
    Str(String),
    Bytes(Vec<u8>),

    Json(serde_json::Value),

    // chrono
    #[cfg(feature = "chrono")]
    ChronoNaiveDate(chrono::NaiveDate),
    #[cfg(feature = "chrono")]
    ChronoNaiveDateTime(chrono::NaiveDateTime),
    #[cfg(feature = "chrono")]
    ChronoDateTimeUtc(chrono::DateTime<chrono::Utc>),

    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),

    Null,

    /// Явный плейсхолдер: значение подставит исполнитель (опционально по имени)
    Deferred(Option<String>),
}

impl Param {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }
}

// ---- From impls ----
impl From<i8> for Param {
    fn from(v: i8) -> Self {
        Param::I8(v)
    }
}
impl From<i16> for Param {
    fn from(v: i16) -> Self {
        Param::I16(v)
    }
}
impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::I32(v)
    }
}
impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::I64(v)
    }
}
impl From<u32> for Param {
    fn from(v: u32) -> Self {
        Param::I64(i64::from(v))
    }
}

impl From<f32> for Param {
    fn from(v: f32) -> Self {
        Param::F32(v)
    }
}
impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::F64(v)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Str(v.to_string())
    }
}
impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Str(v)
    }
}
impl From<&String> for Param {
    fn from(v: &String) -> Self {
        Param::Str(v.clone())
    }
}
impl<'a> From<std::borrow::Cow<'a, str>> for Param {
    fn from(v: std::borrow::Cow<'a, str>) -> Self {
        Param::Str(v.into_owned())
    }
}

impl From<Vec<u8>> for Param {
    fn from(v: Vec<u8>) -> Self {
        Param::Bytes(v)
    }
}
impl From<&[u8]> for Param {
    fn from(v: &[u8]) -> Self {
        Param::Bytes(v.to_vec())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map_or(Param::Null, Into::into)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Param {
    fn from(v: chrono::NaiveDate) -> Self {
        Param::ChronoNaiveDate(v)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Param {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Param::ChronoNaiveDateTime(v)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Param {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        Param::ChronoDateTimeUtc(v)
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Param {
    fn from(v: uuid::Uuid) -> Self {
        Param::Uuid(v)
    }
}
#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Param {
    fn from(v: rust_decimal::Decimal) -> Self {
        Param::Decimal(v)
    }
}

/// Скалярный JSON → параметр. Массивы и объекты возвращаются как ошибка (исходное значение).
impl TryFrom<serde_json::Value> for Param {
    type Error = serde_json::Value;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;
        match v {
            Value::Null => Ok(Param::Null),
            Value::Bool(b) => Ok(Param::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Param::I64(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Param::F64(f))
                } else {
                    Err(Value::Number(n))
                }
            }
            Value::String(s) => Ok(Param::Str(s)),
            other @ (Value::Array(_) | Value::Object(_)) => Err(other),
        }
    }
}
