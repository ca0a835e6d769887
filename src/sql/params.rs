//! Typed request values and how sqlx binds them for SQLite.

use rust_decimal::Decimal;
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A coerced parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypedValue {
    Int(i64),
    Decimal(Decimal),
    Text(String),
}

/// Value bound at one placeholder; `None` binds SQL NULL.
#[derive(Clone, Debug)]
pub struct SqliteBindValue(pub Option<TypedValue>);

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match &self.0 {
            None => IsNull::Yes,
            Some(TypedValue::Int(n)) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            // Exact decimal text; SQLite applies numeric affinity against numeric columns.
            Some(TypedValue::Decimal(d)) => <String as Encode<Sqlite>>::encode_by_ref(&d.to_string(), buf)?,
            Some(TypedValue::Text(s)) => <String as Encode<Sqlite>>::encode_by_ref(s, buf)?,
        })
    }
}

impl sqlx::Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}
