//! Customer identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned primary key of a customer record.
///
/// Serializes as a bare integer. With the `postgres` feature it binds and
/// decodes as an `INTEGER` column, so queries take it directly.
///
/// ```
/// use notaria_core::CustomerId;
///
/// let id = CustomerId::new(7);
/// assert_eq!(i32::from(id), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<CustomerId> for i32 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
    use sqlx::{Decode, Encode, Postgres, Type};

    use super::CustomerId;

    impl Type<Postgres> for CustomerId {
        fn type_info() -> PgTypeInfo {
            <i32 as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <i32 as Type<Postgres>>::compatible(ty)
        }
    }

    impl<'r> Decode<'r, Postgres> for CustomerId {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            <i32 as Decode<Postgres>>::decode(value).map(CustomerId)
        }
    }

    impl Encode<'_, Postgres> for CustomerId {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <i32 as Encode<Postgres>>::encode_by_ref(&self.0, buf)
        }
    }
}
