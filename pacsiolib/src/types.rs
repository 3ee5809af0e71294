//! Простые типы ISO 20022 для заголовка и его фрагментов.
//!
//! Каждый тип хранит исходный текст как есть: длина, числовой формат и
//! списки кодов при присваивании не проверяются. Методы `to_*` разбирают
//! значение по запросу и возвращают `PacsError::Parse`, если не смогли.

use crate::error::{PacsError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FMT: &str = "%Y-%m-%d";
const DATE_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

macro_rules! text_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_type!(
    /// Текст до 35 символов.
    Max35Text
);
text_type!(
    /// Текст до 70 символов.
    Max70Text
);
text_type!(
    /// Текст до 128 символов.
    Max128Text
);
text_type!(
    /// Текст до 34 символов.
    Max34Text
);
text_type!(
    /// До 15 цифр.
    Max15NumericText
);
text_type!(
    /// Дата, `YYYY-MM-DD`.
    IsoDate
);
text_type!(
    /// Дата и время, `YYYY-MM-DDThh:mm:ss`, дробная часть и смещение необязательны.
    IsoDateTime
);
text_type!(
    /// Десятичное число без валюты.
    DecimalNumber
);
text_type!(
    /// `true` — одна проводка на пакет, `false` — по проводке на транзакцию.
    BatchBookingIndicator
);
text_type!(
    /// Буквенный код валюты ISO 4217.
    CurrencyCode
);
text_type!(BicIdentifier);
text_type!(IbanIdentifier);
text_type!(BbanIdentifier);
text_type!(CountryCode);
text_type!(
    /// INDA, INGA, COVE или CLRG.
    SettlementMethod1Code
);
text_type!(CashClearingSystem3Code);
text_type!(
    /// HIGH или NORM.
    Priority2Code
);
text_type!(
    /// RTGS, RTNS, MPNS или BOOK.
    ClearingChannel2Code
);
text_type!(ServiceLevel1Code);
text_type!(CategoryPurpose1Code);

fn parse_err(kind: &str, value: &str, e: impl fmt::Display) -> PacsError {
    PacsError::Parse(format!("{kind} {value:?}: {e}"))
}

impl IsoDate {
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_FMT).map_err(|e| parse_err("ISODate", &self.0, e))
    }
}

impl From<NaiveDate> for IsoDate {
    fn from(d: NaiveDate) -> Self {
        Self(d.format(DATE_FMT).to_string())
    }
}

impl IsoDateTime {
    /// Местное время значения; смещение, если есть, отбрасывается.
    pub fn to_naive_date_time(&self) -> Result<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.0) {
            return Ok(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(&self.0, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|e| parse_err("ISODateTime", &self.0, e))
    }
}

impl From<NaiveDateTime> for IsoDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt.format(DATE_TIME_FMT).to_string())
    }
}

fn parse_decimal(kind: &str, s: &str) -> Result<Decimal> {
    Decimal::from_str_exact(s)
        .or_else(|_| s.parse())
        .map_err(|e| parse_err(kind, s, e))
}

impl DecimalNumber {
    pub fn to_decimal(&self) -> Result<Decimal> {
        parse_decimal("DecimalNumber", &self.0)
    }
}

impl From<Decimal> for DecimalNumber {
    fn from(d: Decimal) -> Self {
        Self(d.to_string())
    }
}

impl BatchBookingIndicator {
    /// Лексические формы xs:boolean.
    pub fn to_bool(&self) -> Result<bool> {
        match self.0.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(parse_err("BatchBookingIndicator", other, "not an xs:boolean")),
        }
    }
}

impl From<bool> for BatchBookingIndicator {
    fn from(b: bool) -> Self {
        Self(b.to_string())
    }
}

impl Max15NumericText {
    pub fn to_count(&self) -> Result<u64> {
        self.0
            .parse()
            .map_err(|e| parse_err("Max15NumericText", &self.0, e))
    }
}

impl From<u64> for Max15NumericText {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Сумма с валютой: `<Tag Ccy="EUR">12.50</Tag>`. Пустые значения допустимы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAndAmount {
    #[serde(rename = "@Ccy", default)]
    pub currency: CurrencyCode,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl CurrencyAndAmount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            currency: CurrencyCode::new(currency),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }

    pub fn amount(&self) -> Result<Decimal> {
        parse_decimal("CurrencyAndAmount", &self.value)
    }
}
